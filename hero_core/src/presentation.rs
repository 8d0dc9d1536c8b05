//! Pure mapping from a hero record to its visual directives.
//!
//! Everything here is table-driven `match` dispatch over the closed enums
//! in [`crate::content`]. The selector has no state and no side effects;
//! calling it twice with the same record yields identical bundles, so the
//! renderer is free to call it on every paint.
//!
//! The directive values are CSS class names defined in the landing crate's
//! stylesheet. Unknown slugs get the generic typography bundle; the enum
//! parse fallbacks (`from_tag`) cover unknown scheme/layout tags.

use crate::content::{ColorScheme, HeroRecord, Industry, Layout};

/// The fixed {text, overlay, button} class tuple of a color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeStyle {
    /// Base text color class applied to logo, copy, and footer label.
    pub text: &'static str,
    /// Gradient overlay class painted over the background image.
    pub overlay: &'static str,
    /// Button color class.
    pub button: &'static str,
}

/// Per-industry typography bundle.
///
/// Each known vertical gets a bespoke voice; everything else reads the
/// generic default (black heading, light subheading, bold logo, no button
/// accent, standard shadow).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    /// Heading weight/tracking/tone classes.
    pub heading: &'static str,
    /// Subheading weight classes.
    pub subheading: &'static str,
    /// Logo wordmark classes.
    pub logo: &'static str,
    /// Extra button accent class, empty for most verticals.
    pub button_accent: &'static str,
    /// Text shadow depth class.
    pub shadow: &'static str,
}

/// The full style-directive bundle for one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Base text color class.
    pub text: &'static str,
    /// Overlay gradient class.
    pub overlay: &'static str,
    /// Button color class.
    pub button: &'static str,
    /// Copy block alignment class.
    pub alignment: &'static str,
    /// Per-industry typography.
    pub typography: Typography,
}

impl Presentation {
    /// Derive the directive bundle for a record. Pure and idempotent.
    pub fn of(record: &HeroRecord) -> Self {
        let scheme = scheme_style(record.color_scheme);
        Self {
            text: scheme.text,
            overlay: scheme.overlay,
            button: scheme.button,
            alignment: alignment(record.layout),
            typography: typography(Industry::from_slug(record.id)),
        }
    }
}

/// Scheme dispatch. Exhaustive over the closed enum; loose tags reach this
/// through [`ColorScheme::from_tag`], whose fallback is `Dark`.
pub fn scheme_style(scheme: ColorScheme) -> SchemeStyle {
    match scheme {
        ColorScheme::Dark => SchemeStyle {
            text: "text-light",
            overlay: "overlay-dark",
            button: "btn-light",
        },
        ColorScheme::Light => SchemeStyle {
            text: "text-ink",
            overlay: "overlay-light",
            button: "btn-ink",
        },
        ColorScheme::Colorful => SchemeStyle {
            text: "text-ink",
            overlay: "overlay-colorful",
            button: "btn-gradient",
        },
    }
}

/// Copy block alignment class for a layout.
pub fn alignment(layout: Layout) -> &'static str {
    match layout {
        Layout::Left => "content-left",
        Layout::Center => "content-center",
        Layout::Right => "content-right",
    }
}

/// Typography dispatch. `None` (slug outside the registry's nine) reads
/// the generic bundle.
pub fn typography(industry: Option<Industry>) -> Typography {
    match industry {
        Some(Industry::CorporateIt) => Typography {
            heading: "font-mono track-wider glow-steel",
            subheading: "weight-light track-wide",
            logo: "font-mono track-widest glow-steel",
            button_accent: "accent-steel",
            shadow: "shadow-lg",
        },
        Some(Industry::Manufacturing) => Typography {
            heading: "weight-black track-tight tone-forge",
            subheading: "weight-medium",
            logo: "weight-black track-tight tone-forge",
            button_accent: "accent-forge",
            shadow: "shadow-2xl",
        },
        Some(Industry::Medical) => Typography {
            heading: "weight-light track-wide tone-soft",
            subheading: "weight-extralight",
            logo: "weight-light track-wide tone-soft",
            button_accent: "",
            shadow: "shadow-sm",
        },
        Some(Industry::EcFashion) => Typography {
            heading: "weight-bold italic tone-gradient",
            subheading: "weight-normal italic",
            logo: "weight-bold italic tone-gradient",
            button_accent: "",
            shadow: "shadow-md",
        },
        Some(Industry::Restaurant) => Typography {
            heading: "font-serif weight-bold track-wide tone-elegant",
            subheading: "font-serif weight-light",
            logo: "font-serif weight-bold tone-elegant",
            button_accent: "",
            shadow: "shadow-xl",
        },
        Some(Industry::Beauty) => Typography {
            heading: "weight-extralight track-widest tone-delicate",
            subheading: "weight-thin track-wide",
            logo: "weight-thin track-widest tone-delicate",
            button_accent: "",
            shadow: "shadow-sm",
        },
        Some(Industry::RealEstate) => Typography {
            heading: "weight-bold track-tight caps tone-strong",
            subheading: "weight-medium",
            logo: "weight-bold track-wide caps tone-strong",
            button_accent: "",
            shadow: "shadow-2xl",
        },
        Some(Industry::Saas) => Typography {
            heading: "weight-semibold tone-modern",
            subheading: "weight-light track-wide",
            logo: "weight-bold tone-modern",
            button_accent: "",
            shadow: "shadow-lg",
        },
        Some(Industry::Recruitment) => Typography {
            heading: "weight-medium track-wide tone-warm",
            subheading: "weight-normal",
            logo: "weight-medium track-wide tone-warm",
            button_accent: "",
            shadow: "shadow-md",
        },
        None => Typography {
            heading: "weight-black",
            subheading: "weight-light",
            logo: "weight-bold",
            button_accent: "",
            shadow: "shadow-lg",
        },
    }
}

/// One step of the entrance reveal: how long an element animates and how
/// long it waits before starting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Animation duration in milliseconds.
    pub duration_ms: u32,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u32,
}

impl Reveal {
    /// Inline style string for the element's animation timing.
    pub fn style(&self) -> String {
        format!(
            "animation-duration:{}ms;animation-delay:{}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Logo enters first.
pub const REVEAL_LOGO: Reveal = Reveal { duration_ms: 600, delay_ms: 0 };
/// Heading follows the logo.
pub const REVEAL_HEADING: Reveal = Reveal { duration_ms: 800, delay_ms: 200 };
/// Subheading follows the heading.
pub const REVEAL_SUBHEADING: Reveal = Reveal { duration_ms: 800, delay_ms: 400 };
/// CTA button follows the subheading.
pub const REVEAL_BUTTON: Reveal = Reveal { duration_ms: 800, delay_ms: 600 };
/// Footer label lands last.
pub const REVEAL_FOOTER: Reveal = Reveal { duration_ms: 1000, delay_ms: 1000 };

/// The reveal order, header to footer. The stagger is a fixed visual
/// contract: delays increase strictly down this list.
pub const REVEAL_SEQUENCE: [Reveal; 5] = [
    REVEAL_LOGO,
    REVEAL_HEADING,
    REVEAL_SUBHEADING,
    REVEAL_BUTTON,
    REVEAL_FOOTER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_RECORDS, find_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn selection_is_idempotent() {
        for record in &HERO_RECORDS {
            assert_eq!(Presentation::of(record), Presentation::of(record));
        }
    }

    #[test]
    fn every_registered_slug_gets_its_bespoke_typography() {
        for record in &HERO_RECORDS {
            let industry = Industry::from_slug(record.id);
            assert!(industry.is_some());
            let bundle = typography(industry);
            assert_ne!(
                bundle,
                typography(None),
                "{} should not read the generic bundle",
                record.id
            );
            assert_eq!(Presentation::of(record).typography, bundle);
        }
    }

    #[test]
    fn unknown_slug_reads_the_generic_bundle() {
        let generic = typography(Industry::from_slug("food-trucks"));
        assert_eq!(generic, typography(None));
        assert_eq!(generic.heading, "weight-black");
        assert_eq!(generic.subheading, "weight-light");
        assert_eq!(generic.logo, "weight-bold");
        assert_eq!(generic.button_accent, "");
        assert_eq!(generic.shadow, "shadow-lg");
    }

    #[test]
    fn unrecognized_scheme_tags_share_the_dark_tuple() {
        let dark = scheme_style(ColorScheme::Dark);
        for tag in ["", "dARk", "sepia", "0", "dark "] {
            assert_eq!(scheme_style(ColorScheme::from_tag(tag)), dark);
        }
    }

    #[test]
    fn unrecognized_layout_tags_share_center_alignment() {
        for tag in ["", "middle", "justify", "Left"] {
            assert_eq!(alignment(Layout::from_tag(tag)), "content-center");
        }
        assert_eq!(alignment(Layout::from_tag("left")), "content-left");
        assert_eq!(alignment(Layout::from_tag("right")), "content-right");
    }

    #[test]
    fn scheme_tuples_are_fixed() {
        let dark = scheme_style(ColorScheme::Dark);
        assert_eq!(dark.text, "text-light");
        assert_eq!(dark.overlay, "overlay-dark");
        assert_eq!(dark.button, "btn-light");

        let light = scheme_style(ColorScheme::Light);
        assert_eq!(light.text, "text-ink");
        assert_eq!(light.overlay, "overlay-light");
        assert_eq!(light.button, "btn-ink");

        let colorful = scheme_style(ColorScheme::Colorful);
        assert_eq!(colorful.overlay, "overlay-colorful");
        assert_eq!(colorful.button, "btn-gradient");
    }

    #[test]
    fn restaurant_presentation_is_elegant_dark_center() {
        let record = find_record("restaurant").unwrap();
        let style = Presentation::of(record);
        assert_eq!(style.text, "text-light");
        assert_eq!(style.alignment, "content-center");
        assert!(style.typography.heading.contains("font-serif"));
    }

    #[test]
    fn reveal_delays_increase_from_header_to_footer() {
        for pair in REVEAL_SEQUENCE.windows(2) {
            assert!(
                pair[0].delay_ms < pair[1].delay_ms,
                "reveal stagger must be strictly increasing"
            );
        }
    }

    #[test]
    fn reveal_style_is_inline_css() {
        assert_eq!(
            REVEAL_HEADING.style(),
            "animation-duration:800ms;animation-delay:200ms"
        );
    }
}
