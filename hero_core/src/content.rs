//! Static hero content: one record per industry vertical.
//!
//! The registry is authored at build time and never mutated. Records are
//! addressed by their slug, which doubles as the routing key for the
//! `/{slug}` pages.

use serde::Serialize;

/// Base visual theme of a hero section.
///
/// Controls the text color, overlay gradient, and button treatment as a
/// fixed tuple (see [`crate::presentation::SchemeStyle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark imagery, light text.
    Dark,
    /// Light imagery, ink text.
    Light,
    /// Saturated imagery, gradient accents.
    Colorful,
}

impl ColorScheme {
    /// Parse a loose string tag. Unrecognized tags fall back to [`Self::Dark`],
    /// matching the dispatch's default branch.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "light" => Self::Light,
            "colorful" => Self::Colorful,
            _ => Self::Dark,
        }
    }
}

/// Horizontal placement of the hero copy block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Copy hugs the left edge.
    Left,
    /// Copy centered.
    Center,
    /// Copy hugs the right edge.
    Right,
}

impl Layout {
    /// Parse a loose string tag. Unrecognized tags fall back to
    /// [`Self::Center`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }
}

/// The nine industry verticals the site ships bespoke typography for.
///
/// Slugs outside this set still render - they get the generic typography
/// bundle - so the enum is only consulted through [`Industry::from_slug`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Industry {
    /// Corporate IT / infrastructure.
    CorporateIt,
    /// Manufacturing.
    Manufacturing,
    /// Medical / clinics.
    Medical,
    /// E-commerce fashion.
    EcFashion,
    /// Restaurants and cafés.
    Restaurant,
    /// Beauty salons.
    Beauty,
    /// Real estate and architecture.
    RealEstate,
    /// SaaS products.
    Saas,
    /// Recruitment.
    Recruitment,
}

impl Industry {
    /// Exact slug match; anything else is `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "corporate-it" => Some(Self::CorporateIt),
            "manufacturing" => Some(Self::Manufacturing),
            "medical" => Some(Self::Medical),
            "ec-fashion" => Some(Self::EcFashion),
            "restaurant" => Some(Self::Restaurant),
            "beauty" => Some(Self::Beauty),
            "real-estate" => Some(Self::RealEstate),
            "saas" => Some(Self::Saas),
            "recruitment" => Some(Self::Recruitment),
            _ => None,
        }
    }

    /// The routing slug for this vertical.
    pub fn as_slug(self) -> &'static str {
        match self {
            Self::CorporateIt => "corporate-it",
            Self::Manufacturing => "manufacturing",
            Self::Medical => "medical",
            Self::EcFashion => "ec-fashion",
            Self::Restaurant => "restaurant",
            Self::Beauty => "beauty",
            Self::RealEstate => "real-estate",
            Self::Saas => "saas",
            Self::Recruitment => "recruitment",
        }
    }
}

/// One industry vertical's full set of display copy, imagery reference,
/// and style hints.
///
/// All fields are `'static` - the registry is the single authored source
/// and nothing edits it at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroRecord {
    /// Unique slug, also the routing key.
    pub id: &'static str,
    /// Industry display label (footer zone).
    pub industry: &'static str,
    /// Fictional client name.
    pub company_name: &'static str,
    /// Main heading copy.
    pub main_copy: &'static str,
    /// Subheading copy.
    pub sub_copy: &'static str,
    /// Call-to-action button label.
    pub cta_text: &'static str,
    /// Logo wordmark shown in the header zone.
    pub logo_text: &'static str,
    /// Static asset path for the full-bleed background.
    pub background_image: &'static str,
    /// Base visual theme.
    pub color_scheme: ColorScheme,
    /// Copy block placement.
    pub layout: Layout,
}

/// The ordered hero registry, one record per supported vertical.
pub static HERO_RECORDS: [HeroRecord; 9] = [
    HeroRecord {
        id: "corporate-it",
        industry: "コーポレートIT",
        company_name: "TechCore Solutions",
        main_copy: "未来を動かす基盤を、静かに強く。",
        sub_copy: "事業を支えるインフラと、成長を導く設計。",
        cta_text: "お問い合わせ",
        logo_text: "TechCore",
        background_image: "/images/corporate-it.jpg",
        color_scheme: ColorScheme::Dark,
        layout: Layout::Left,
    },
    HeroRecord {
        id: "manufacturing",
        industry: "製造業",
        company_name: "Precision Works",
        main_copy: "精度は、信頼になる。",
        sub_copy: "一つの部品から、世界の品質へ。",
        cta_text: "詳しく見る",
        logo_text: "PrecisionWorks",
        background_image: "/images/manufacturing.jpg",
        color_scheme: ColorScheme::Dark,
        layout: Layout::Center,
    },
    HeroRecord {
        id: "medical",
        industry: "医療",
        company_name: "CareFirst Medical",
        main_copy: "まっすぐ、あなたの健康へ。",
        sub_copy: "根拠ある医療体験を、やさしい導線で。",
        cta_text: "無料相談",
        logo_text: "CareFirst",
        background_image: "/images/medical.jpg",
        color_scheme: ColorScheme::Light,
        layout: Layout::Right,
    },
    HeroRecord {
        id: "ec-fashion",
        industry: "ECファッション",
        company_name: "Style Avenue",
        main_copy: "今日の\"好き\"が、明日のスタイル。",
        sub_copy: "新作から定番まで、心が動くセレクト。",
        cta_text: "ショップを見る",
        logo_text: "StyleAvenue",
        background_image: "/images/ec-fashion.jpg",
        color_scheme: ColorScheme::Colorful,
        layout: Layout::Left,
    },
    HeroRecord {
        id: "restaurant",
        industry: "レストラン・カフェ",
        company_name: "Bon Appetit",
        main_copy: "一皿で、記憶に残す。",
        sub_copy: "香りから余韻まで、体験で味わう食。",
        cta_text: "予約する",
        logo_text: "Bon Appetit",
        background_image: "/images/restaurant.jpg",
        color_scheme: ColorScheme::Dark,
        layout: Layout::Center,
    },
    HeroRecord {
        id: "beauty",
        industry: "美容・エステ",
        company_name: "Pure Beauty",
        main_copy: "素肌が主役になる。",
        sub_copy: "揺らぎに寄り添う、ていねいなケア。",
        cta_text: "体験予約",
        logo_text: "PureBeauty",
        background_image: "/images/beauty.jpg",
        color_scheme: ColorScheme::Light,
        layout: Layout::Right,
    },
    HeroRecord {
        id: "real-estate",
        industry: "不動産・建築",
        company_name: "Urban Design",
        main_copy: "景色になる建築を。",
        sub_copy: "暮らしと価値を、ともに育てる設計。",
        cta_text: "物件を見る",
        logo_text: "UrbanDesign",
        background_image: "/images/real-estate.jpg",
        color_scheme: ColorScheme::Dark,
        layout: Layout::Left,
    },
    HeroRecord {
        id: "saas",
        industry: "SaaS",
        company_name: "DataFlow Pro",
        main_copy: "意思決定を、速く正しく。",
        sub_copy: "見える化から自動化まで、ひと続きに。",
        cta_text: "無料トライアル",
        logo_text: "DataFlow",
        background_image: "/images/saas.jpg",
        color_scheme: ColorScheme::Dark,
        layout: Layout::Center,
    },
    HeroRecord {
        id: "recruitment",
        industry: "採用",
        company_name: "TalentLink",
        main_copy: "\"らしさ\"で、惹き合う採用。",
        sub_copy: "カルチャーが伝わる、等身大の発信を。",
        cta_text: "採用情報",
        logo_text: "TalentLink",
        background_image: "/images/recruitment.jpg",
        color_scheme: ColorScheme::Colorful,
        layout: Layout::Right,
    },
];

/// Resolve a path segment to its hero record.
///
/// Exact equality only - no normalization, no fuzzy matching. `None` is a
/// perfectly ordinary outcome and renders as the not-found page.
pub fn find_record(id: &str) -> Option<&'static HeroRecord> {
    HERO_RECORDS.iter().find(|record| record.id == id)
}

/// Route of the home view; the not-found page links back here.
pub const HOME_PATH: &str = "/";

/// Heading shown when a slug resolves to nothing.
pub const NOT_FOUND_HEADING: &str = "業界が見つかりません";

/// Label of the not-found page's return link.
pub const NOT_FOUND_BACK_LABEL: &str = "トップページに戻る";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_ids_are_unique() {
        for (i, a) in HERO_RECORDS.iter().enumerate() {
            for b in &HERO_RECORDS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate slug in registry");
            }
        }
    }

    #[test]
    fn every_registry_id_resolves_to_its_own_record() {
        for record in &HERO_RECORDS {
            let found = find_record(record.id).expect("registered slug must resolve");
            assert_eq!(found.id, record.id);
            assert_eq!(found.company_name, record.company_name);
        }
    }

    #[test]
    fn unknown_slug_resolves_to_none() {
        assert_eq!(find_record("nonexistent-industry"), None);
        assert_eq!(find_record(""), None);
        // no fuzzy matching
        assert_eq!(find_record("restaurants"), None);
        assert_eq!(find_record("Restaurant"), None);
    }

    #[test]
    fn restaurant_resolves_to_bon_appetit() {
        let record = find_record("restaurant").unwrap();
        assert_eq!(record.company_name, "Bon Appetit");
        assert_eq!(record.color_scheme, ColorScheme::Dark);
        assert_eq!(record.layout, Layout::Center);
    }

    #[test]
    fn scheme_tags_outside_the_set_fall_back_to_dark() {
        assert_eq!(ColorScheme::from_tag("dark"), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_tag("light"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_tag("colorful"), ColorScheme::Colorful);
        assert_eq!(ColorScheme::from_tag("neon"), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_tag(""), ColorScheme::Dark);
    }

    #[test]
    fn layout_tags_outside_the_set_fall_back_to_center() {
        assert_eq!(Layout::from_tag("left"), Layout::Left);
        assert_eq!(Layout::from_tag("center"), Layout::Center);
        assert_eq!(Layout::from_tag("right"), Layout::Right);
        assert_eq!(Layout::from_tag("justified"), Layout::Center);
    }

    #[test]
    fn not_found_fallback_links_back_home() {
        assert_eq!(HOME_PATH, "/");
        assert!(!NOT_FOUND_HEADING.is_empty());
        assert!(!NOT_FOUND_BACK_LABEL.is_empty());
    }

    #[test]
    fn records_serialize_with_lowercase_tags() {
        let json = serde_json::to_value(find_record("saas").unwrap()).unwrap();
        assert_eq!(json["color_scheme"], "dark");
        assert_eq!(json["layout"], "center");
        assert_eq!(json["company_name"], "DataFlow Pro");
    }

    #[test]
    fn industry_slugs_round_trip() {
        for record in &HERO_RECORDS {
            let industry = Industry::from_slug(record.id).expect("registry slug is known");
            assert_eq!(industry.as_slug(), record.id);
        }
        assert_eq!(Industry::from_slug("nonexistent-industry"), None);
    }
}
