use std::sync::OnceLock;

use dioxus::logger::tracing::warn;
use ui::HeroContent;

use crate::config::SiteConfig;

const HERO_JSON: &str = include_str!("../content/hero.json");

/// Hero copy for the home page, parsed once per process.
pub fn site_hero() -> &'static HeroContent {
    static HERO: OnceLock<HeroContent> = OnceLock::new();
    HERO.get_or_init(|| load_hero(HERO_JSON, &SiteConfig::from_build_env()))
}

fn load_hero(raw: &str, config: &SiteConfig) -> HeroContent {
    let mut content = match HeroContent::from_json(raw) {
        Ok(content) => content,
        Err(e) => {
            warn!("{e}; falling back to the built-in hero");
            HeroContent::hibiscus()
        }
    };
    config.apply(&mut content);
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_parses() {
        let content = HeroContent::from_json(HERO_JSON).expect("hero.json should parse");
        assert!(!content.title.is_empty());
        assert!(content.ctas.iter().any(|cta| cta.primary));
    }

    #[test]
    fn malformed_document_falls_back_to_preset() {
        let content = load_hero("{ broken", &SiteConfig::default());
        assert_eq!(content, HeroContent::hibiscus());
    }

    #[test]
    fn overrides_apply_after_fallback() {
        let config = SiteConfig::from_values(Some("technical"), Some("/hero.webp"));
        let content = load_hero("{ broken", &config);
        assert_eq!(content.variant.as_deref(), Some("technical"));
        assert_eq!(content.image_src.as_deref(), Some("/hero.webp"));
    }

    #[test]
    fn null_fields_keep_the_rest_of_the_document() {
        let content = load_hero(
            r#"{ "title": "Fleet", "subtitle": null, "ctas": null }"#,
            &SiteConfig::default(),
        );
        assert_eq!(content.title, "Fleet");
        assert!(content.subtitle.is_empty());
        assert!(content.ctas.is_empty());
    }

    #[test]
    fn overrides_apply_to_loaded_document() {
        let config = SiteConfig::from_values(Some("corporate"), None);
        let content = load_hero(r#"{ "title": "Fleet", "variant": "landing" }"#, &config);
        assert_eq!(content.title, "Fleet");
        assert_eq!(content.variant.as_deref(), Some("corporate"));
    }
}
