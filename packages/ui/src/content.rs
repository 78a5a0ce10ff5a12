use serde::{Deserialize, Deserializer, Serialize};

/// A labeled link prompting the visitor to act.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub primary: bool,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>, primary: bool) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            primary,
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.primary {
            "btn primary"
        } else {
            "btn"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

impl StatItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid hero content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Hero copy as stored in a content document.
///
/// Every field is optional in JSON; keys are camelCase (`imageSrc`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub variant: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub eyebrow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ctas: Vec<CallToAction>,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<StatItem>,
    pub image_src: Option<String>,
}

/// `null` reads as the field's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl HeroContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The fixed Hibiscus AI banner, expressed as plain content.
    pub fn hibiscus() -> Self {
        Self {
            variant: Some("landing".to_string()),
            eyebrow: "Trusted by sovereign enterprises".to_string(),
            title: "Hibiscus AI — On-device intelligence".to_string(),
            subtitle: "Run advanced AI inside your firewalls. Low-latency, high-control, built for enterprise data sovereignty.".to_string(),
            ctas: vec![CallToAction::new("Request Demo", "/demo", true)],
            stats: Vec::new(),
            image_src: None,
        }
    }
}

/// `Some(text)` when there is anything to show. No trimming.
pub fn present_text(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn present_items<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
