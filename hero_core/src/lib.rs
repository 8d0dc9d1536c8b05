//! # hero-core
//!
//! Data and presentation logic for the herofolio landing site.
//!
//! The site shows one full-viewport "hero" section per industry vertical.
//! Everything it needs to do that lives here, free of any DOM or WASM
//! dependency so it can be unit-tested natively:
//!
//! - [`content`] - the static registry of hero records and the slug lookup
//! - [`presentation`] - the pure mapping from a record to its visual
//!   directives (classes, overlay, typography, reveal timing)
//! - [`carousel`] - the wrapping index state machine behind the home view
//! - [`sitemap`] - the registry-derived sitemap document
//!
//! The rendering layer (the `landing` crate) consumes these and does
//! nothing but paint.

#![warn(missing_docs)]

pub mod carousel;
pub mod content;
pub mod presentation;
pub mod sitemap;
