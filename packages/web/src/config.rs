use ui::HeroContent;

/// Site overrides, fixed at build time so server render and hydration agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub variant: Option<String>,
    pub image_src: Option<String>,
}

impl SiteConfig {
    /// Reads `HERO_VARIANT` and `HERO_IMAGE_SRC` from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("HERO_VARIANT"), option_env!("HERO_IMAGE_SRC"))
    }

    pub fn from_values(variant: Option<&str>, image_src: Option<&str>) -> Self {
        Self {
            variant: non_empty(variant),
            image_src: non_empty(image_src),
        }
    }

    pub fn apply(&self, content: &mut HeroContent) {
        if let Some(variant) = &self.variant {
            content.variant = Some(variant.clone());
        }
        if let Some(image_src) = &self.image_src {
            content.image_src = Some(image_src.clone());
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
