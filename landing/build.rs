//! Renders the registry-derived sitemap into the static assets so trunk
//! ships it alongside the site.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Canonical deployment root, no trailing slash.
const BASE_URL: &str = "https://herofolio.dev";

fn main() {
    let entries = hero_core::sitemap::entries(BASE_URL);
    let xml = hero_core::sitemap::to_xml(&entries);

    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR"));
    let assets = manifest_dir.join("assets");
    fs::create_dir_all(&assets).expect("create assets dir");
    fs::write(assets.join("sitemap.xml"), xml).expect("write assets/sitemap.xml");

    println!("cargo:rerun-if-changed=build.rs");
}
