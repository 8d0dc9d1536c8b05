//! Registry-derived sitemap.
//!
//! The URL list is generated from [`crate::content::HERO_RECORDS`] so it
//! can never drift out of sync with the registry: the home page plus one
//! URL per vertical, each with fixed change-frequency and priority
//! metadata. The landing crate's build script renders this to
//! `sitemap.xml`.

use crate::content::HERO_RECORDS;

/// One `<url>` entry of the sitemap.
#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,
    /// `<changefreq>` value.
    pub change_frequency: &'static str,
    /// `<priority>` value in `[0.0, 1.0]`.
    pub priority: f32,
}

/// The full URL list for a deployment rooted at `base_url` (no trailing
/// slash): the home page at priority 1.0, then every registry entry at
/// 0.8.
pub fn entries(base_url: &str) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    let mut urls = vec![SitemapEntry {
        url: base_url.to_string(),
        change_frequency: "monthly",
        priority: 1.0,
    }];
    urls.extend(HERO_RECORDS.iter().map(|record| SitemapEntry {
        url: format!("{base_url}/{}", record.id),
        change_frequency: "monthly",
        priority: 0.8,
    }));
    urls
}

/// Render entries as a sitemap XML document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.url, entry.change_frequency, entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://herofolio.dev";

    #[test]
    fn covers_home_plus_every_registry_entry() {
        let urls = entries(BASE);
        assert_eq!(urls.len(), 1 + HERO_RECORDS.len());
        assert_eq!(urls[0].url, BASE);
        assert_eq!(urls[0].priority, 1.0);
        for record in &HERO_RECORDS {
            let expected = format!("{BASE}/{}", record.id);
            let entry = urls
                .iter()
                .find(|entry| entry.url == expected)
                .expect("every vertical is listed");
            assert_eq!(entry.priority, 0.8);
            assert_eq!(entry.change_frequency, "monthly");
        }
    }

    #[test]
    fn trailing_slash_on_the_base_is_tolerated() {
        let urls = entries("https://herofolio.dev/");
        assert_eq!(urls[0].url, BASE);
        assert_eq!(urls[1].url, format!("{BASE}/corporate-it"));
    }

    #[test]
    fn renders_a_sitemap_document() {
        let xml = to_xml(&entries(BASE));
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        for record in &HERO_RECORDS {
            assert!(xml.contains(&format!("<loc>{BASE}/{}</loc>", record.id)));
        }
        assert!(xml.ends_with("</urlset>\n"));
    }
}
