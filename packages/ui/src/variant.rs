use dioxus::logger::tracing::debug;

/// Sizing preset for a hero banner.
///
/// `heading_size` and `lead_size` are class tokens styled by `hero.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub name: &'static str,
    pub heading_size: &'static str,
    pub lead_size: &'static str,
    pub image_priority: bool,
}

pub const DEFAULT_VARIANT: &str = "landing";

static VARIANTS: [VariantConfig; 4] = [
    VariantConfig {
        name: "landing",
        heading_size: "hero_title_xl",
        lead_size: "hero_lead_lg",
        image_priority: true,
    },
    VariantConfig {
        name: "corporate",
        heading_size: "hero_title_lg",
        lead_size: "hero_lead_md",
        image_priority: true,
    },
    VariantConfig {
        name: "technical",
        heading_size: "hero_title_md",
        lead_size: "hero_lead_sm",
        image_priority: false,
    },
    VariantConfig {
        name: "visionary",
        heading_size: "hero_title_2xl",
        lead_size: "hero_lead_xl",
        image_priority: true,
    },
];

/// All known presets, in table order.
pub fn variants() -> &'static [VariantConfig] {
    &VARIANTS
}

fn lookup(name: &str) -> Option<&'static VariantConfig> {
    VARIANTS.iter().find(|config| config.name == name)
}

/// Resolve a variant by exact name. Unknown or missing names get `landing`.
pub fn resolve_variant(name: Option<&str>) -> &'static VariantConfig {
    if let Some(config) = name.and_then(lookup) {
        return config;
    }

    if let Some(name) = name {
        debug!("unknown hero variant {name:?}, using {DEFAULT_VARIANT}");
    }
    &VARIANTS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(config: &VariantConfig) -> (&str, &str, bool) {
        (config.heading_size, config.lead_size, config.image_priority)
    }

    #[test]
    fn known_variants_resolve_to_their_presets() {
        assert_eq!(
            triple(resolve_variant(Some("landing"))),
            ("hero_title_xl", "hero_lead_lg", true)
        );
        assert_eq!(
            triple(resolve_variant(Some("corporate"))),
            ("hero_title_lg", "hero_lead_md", true)
        );
        assert_eq!(
            triple(resolve_variant(Some("technical"))),
            ("hero_title_md", "hero_lead_sm", false)
        );
        assert_eq!(
            triple(resolve_variant(Some("visionary"))),
            ("hero_title_2xl", "hero_lead_xl", true)
        );
    }

    #[test]
    fn unknown_variants_fall_back_to_landing() {
        let landing = resolve_variant(Some("landing"));
        assert_eq!(resolve_variant(Some("enterprise")), landing);
        assert_eq!(resolve_variant(Some("")), landing);
        assert_eq!(resolve_variant(None), landing);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve_variant(Some("Technical")).name, DEFAULT_VARIANT);
        assert_eq!(resolve_variant(Some(" technical")).name, DEFAULT_VARIANT);
    }

    #[test]
    fn table_names_are_unique_and_default_is_first() {
        let names: Vec<&str> = variants().iter().map(|v| v.name).collect();
        assert_eq!(names, ["landing", "corporate", "technical", "visionary"]);
        assert_eq!(variants()[0].name, DEFAULT_VARIANT);
    }
}
