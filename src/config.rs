//! Page variants and their content.
//!
//! Every variant is one JSON document under `config/variants/`, embedded at
//! compile time and validated on load. The template in `pages::home` renders
//! whichever one is selected; nothing else differs between variants.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::form::REQUIRED_QUOTE_FIELDS;
use crate::nav::NavItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Classic,
    Express,
    Premium,
    Showcase,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Express,
        Variant::Premium,
        Variant::Showcase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Express => "express",
            Variant::Premium => "premium",
            Variant::Showcase => "showcase",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Variant::Classic => include_str!("../config/variants/classic.json"),
            Variant::Express => include_str!("../config/variants/express.json"),
            Variant::Premium => include_str!("../config/variants/premium.json"),
            Variant::Showcase => include_str!("../config/variants/showcase.json"),
        }
    }

    pub fn load(self) -> Result<SiteConfig> {
        let config: SiteConfig =
            serde_json::from_str(self.source()).map_err(|source| SiteError::Config {
                variant: self.name(),
                source,
            })?;
        config.validate(self)?;
        Ok(config)
    }

    /// Variant baked in at build time through `SITE_VARIANT`.
    pub fn build_default() -> Variant {
        match option_env!("SITE_VARIANT") {
            Some(name) => name.parse().unwrap_or_else(|e| {
                warn!("{}, using classic", e);
                Variant::Classic
            }),
            None => Variant::Classic,
        }
    }

    /// Resolves a `?variant=` query value, falling back to the build default.
    pub fn resolve(requested: Option<&str>) -> Variant {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => name.parse().unwrap_or_else(|e| {
                let fallback = Variant::build_default();
                warn!("{}, falling back to {}", e, fallback);
                fallback
            }),
            None => Variant::build_default(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SiteError::UnknownVariant(s.to_string()))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub business: Business,
    pub theme: Theme,
    #[serde(default)]
    pub scroll: ScrollMetrics,
    pub nav: Vec<NavItem>,
    pub sections: Vec<SectionKind>,
    pub hero: Hero,
    pub about: About,
    pub services: ServicesBlock,
    pub reviews: ReviewsBlock,
    #[serde(default)]
    pub projects: Option<ProjectsBlock>,
    pub contact: ContactBlock,
    pub quote_form: Vec<FormField>,
}

impl SiteConfig {
    fn validate(&self, variant: Variant) -> Result<()> {
        let invalid = |reason: String| SiteError::InvalidConfig {
            variant: variant.name(),
            reason,
        };

        if self.nav.is_empty() {
            return Err(invalid("navigation list is empty".into()));
        }

        let mut sections = HashSet::new();
        for kind in &self.sections {
            if !sections.insert(kind.id()) {
                return Err(invalid(format!("section '{}' listed twice", kind.id())));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.nav {
            if !seen.insert(item.id.as_str()) {
                return Err(invalid(format!("duplicate nav id '{}'", item.id)));
            }
            if !sections.contains(item.id.as_str()) {
                return Err(invalid(format!("nav id '{}' has no section", item.id)));
            }
        }

        if sections.contains(SectionKind::Projects.id()) && self.projects.is_none() {
            return Err(invalid("projects section listed without content".into()));
        }

        for name in REQUIRED_QUOTE_FIELDS {
            match self.quote_form.iter().find(|f| f.name == *name) {
                Some(field) if field.required => {}
                Some(_) => return Err(invalid(format!("quote field '{}' must be required", name))),
                None => return Err(invalid(format!("quote field '{}' is missing", name))),
            }
        }

        if let Some(field) = self
            .quote_form
            .iter()
            .find(|f| f.kind == FieldKind::Select && f.options.is_empty())
        {
            return Err(invalid(format!("select '{}' has no options", field.name)));
        }

        Ok(())
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Business {
    pub name: String,
    pub legal_name: String,
    pub tagline: String,
    pub phone: Phone,
    pub hours_summary: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

impl Phone {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub accent: String,
    pub dark: String,
    pub light: String,
}

impl Theme {
    /// Custom properties consumed by the component stylesheets: the palette
    /// and the fixed header height.
    pub fn css_vars(&self, scroll: &ScrollMetrics) -> String {
        format!(
            "--primary: {}; --accent: {}; --dark: {}; --light: {}; --header-height: {}px;",
            self.primary, self.accent, self.dark, self.light, scroll.header_offset
        )
    }
}

/// Pixel constants for the scroll-spy and smooth scroll.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ScrollMetrics {
    /// Height of the fixed top bar; scroll targets land this far above a section.
    pub header_offset: f64,
    /// Added to the scroll offset so a section counts as active a bit early.
    pub lookahead: f64,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            lookahead: 100.0,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Home,
    About,
    Services,
    Projects,
    Reviews,
    Contact,
}

impl SectionKind {
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Projects => "projects",
            SectionKind::Reviews => "reviews",
            SectionKind::Contact => "contact",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct IconText {
    pub icon: String,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_label: String,
    #[serde(default)]
    pub badges: Vec<IconText>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct About {
    pub heading: String,
    pub intro: String,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub color: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServicesBlock {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Service>,
    pub cta_label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Review {
    pub rating: u8,
    pub text: String,
    pub name: String,
    pub title: String,
    pub color: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RatingSummary {
    pub average: String,
    pub basis: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ReviewsBlock {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Review>,
    pub summary: RatingSummary,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub vehicle: String,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectsBlock {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HoursRow {
    pub days: String,
    pub hours: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactBlock {
    pub heading: String,
    pub intro: String,
    pub phone_blurb: String,
    pub hours: Vec<HoursRow>,
    pub service_area: String,
    pub benefits_title: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub form_title: String,
    pub call_prompt: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Select,
    Textarea,
}

impl FieldKind {
    /// `type` attribute for `<input>` kinds.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Tel => "tel",
            FieldKind::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Spans both grid columns when false.
    #[serde(default)]
    pub half_width: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours_text(config: &SiteConfig) -> String {
        config
            .contact
            .hours
            .iter()
            .map(|row| format!("{} {}", row.days, row.hours))
            .collect::<Vec<_>>()
            .join("|")
    }

    #[test]
    fn every_variant_loads() {
        for variant in Variant::ALL {
            let config = variant.load().unwrap_or_else(|e| panic!("{}", e));
            let ids: Vec<&str> = config.nav.iter().map(|n| n.id.as_str()).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(sorted, ["about", "contact", "home", "reviews", "services"]);
            assert_eq!(config.scroll.header_offset, 80.0);
        }
    }

    #[test]
    fn classic_matches_the_original_page() {
        let config = Variant::Classic.load().unwrap();
        assert_eq!(config.business.name, "Cee's Mobile Detailing");
        assert_eq!(config.business.phone.tel_href(), "tel:+13128984141");
        assert_eq!(config.nav[0].id, "home");
        assert_eq!(config.nav[0].label, "Home");
        assert_eq!(config.services.items.len(), 6);
        assert_eq!(config.reviews.items.len(), 6);
        assert!(config.projects.is_none());
    }

    #[test]
    fn variants_differ_in_order_hours_and_projects() {
        let classic = Variant::Classic.load().unwrap();
        let express = Variant::Express.load().unwrap();
        let premium = Variant::Premium.load().unwrap();
        let showcase = Variant::Showcase.load().unwrap();

        assert_ne!(classic.sections, express.sections);
        assert_ne!(hours_text(&classic), hours_text(&premium));
        assert!(showcase.projects.is_some());
        assert!(showcase.sections.contains(&SectionKind::Projects));
        for other in [&classic, &express, &premium] {
            assert!(other.projects.is_none());
        }
    }

    #[test]
    fn variant_names_parse_case_insensitively() {
        assert_eq!("Showcase".parse::<Variant>().unwrap(), Variant::Showcase);
        assert!(matches!(
            "neon".parse::<Variant>(),
            Err(SiteError::UnknownVariant(name)) if name == "neon"
        ));
    }

    #[test]
    fn resolve_falls_back_on_unknown_or_empty() {
        assert_eq!(Variant::resolve(Some("premium")), Variant::Premium);
        assert_eq!(Variant::resolve(Some("neon")), Variant::build_default());
        assert_eq!(Variant::resolve(Some("  ")), Variant::build_default());
        assert_eq!(Variant::resolve(None), Variant::build_default());
    }

    #[test]
    fn scroll_metrics_default_when_omitted() {
        let metrics: ScrollMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, ScrollMetrics::default());
        let metrics: ScrollMetrics = serde_json::from_str(r#"{"header_offset": 64}"#).unwrap();
        assert_eq!(metrics.header_offset, 64.0);
        assert_eq!(metrics.lookahead, 100.0);
    }

    #[test]
    fn header_height_follows_scroll_offset() {
        let config = Variant::Classic.load().unwrap();
        let vars = config.theme.css_vars(&config.scroll);
        assert!(vars.contains("--header-height: 80px;"), "{}", vars);

        let tall = ScrollMetrics {
            header_offset: 96.0,
            lookahead: 100.0,
        };
        assert!(config.theme.css_vars(&tall).contains("--header-height: 96px;"));
    }

    #[test]
    fn validation_rejects_broken_nav() {
        let mut config = Variant::Classic.load().unwrap();
        config.nav.push(config.nav[0].clone());
        let err = config.validate(Variant::Classic).unwrap_err();
        assert!(err.to_string().contains("duplicate nav id 'home'"));

        let mut config = Variant::Classic.load().unwrap();
        config.sections.retain(|s| *s != SectionKind::Reviews);
        let err = config.validate(Variant::Classic).unwrap_err();
        assert!(err.to_string().contains("'reviews' has no section"));

        let mut config = Variant::Classic.load().unwrap();
        config.nav.clear();
        assert!(config.validate(Variant::Classic).is_err());
    }

    #[test]
    fn validation_requires_quote_fields() {
        let mut config = Variant::Classic.load().unwrap();
        config.quote_form.retain(|f| f.name != "email");
        let err = config.validate(Variant::Classic).unwrap_err();
        assert!(err.to_string().contains("'email' is missing"));

        let mut config = Variant::Classic.load().unwrap();
        if let Some(field) = config.quote_form.iter_mut().find(|f| f.name == "location") {
            field.required = false;
        }
        assert!(config.validate(Variant::Classic).is_err());
    }

    #[test]
    fn validation_rejects_projects_without_content() {
        let mut config = Variant::Showcase.load().unwrap();
        config.projects = None;
        assert!(config.validate(Variant::Showcase).is_err());
    }
}
