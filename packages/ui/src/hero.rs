use dioxus::prelude::*;

use crate::content::{present_items, present_text, CallToAction, StatItem};
use crate::motion::use_entrance_motion;
use crate::radial::RadialMotif;
use crate::sub_nav::HeroSubNav;
use crate::variant::resolve_variant;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Preset name; unknown or missing names render as `landing`.
    pub variant: Option<String>,
    #[props(default, into)]
    pub eyebrow: String,
    #[props(default, into)]
    pub title: String,
    #[props(default, into)]
    pub subtitle: String,
    #[props(default)]
    pub ctas: Vec<CallToAction>,
    #[props(default)]
    pub stats: Vec<StatItem>,
    pub image_src: Option<String>,
    /// DOM id of the banner root.
    #[props(default = "hero".to_string(), into)]
    pub id: String,
    /// Play the entrance transition after mount.
    #[props(default = true)]
    pub animate: bool,
}

#[component]
pub fn HeroSection(props: HeroProps) -> Element {
    let config = resolve_variant(props.variant.as_deref());
    use_entrance_motion(props.id.clone(), props.animate);

    let eyebrow = present_text(&props.eyebrow);
    let subtitle = present_text(&props.subtitle);
    let ctas = present_items(&props.ctas);
    let stats = present_items(&props.stats);
    let image_src = props.image_src.as_deref().and_then(present_text);
    let (loading, fetch_priority) = if config.image_priority {
        ("eager", "high")
    } else {
        ("lazy", "auto")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "{props.id}",
            class: "hero",
            "data-variant": config.name,
            div { class: "hero_inner",
                div { class: "hero_copy", "data-motion": "copy",
                    if let Some(text) = eyebrow {
                        p { class: "hero_eyebrow", "{text}" }
                    }
                    h1 { class: "hero_title {config.heading_size}", "{props.title}" }
                    if let Some(text) = subtitle {
                        p { class: "hero_subtitle {config.lead_size}", "{text}" }
                    }
                    if let Some(ctas) = ctas {
                        div { class: "cta_row",
                            for (index, cta) in ctas.iter().enumerate() {
                                a { key: "{index}", class: cta.class_name(), href: "{cta.href}", "{cta.label}" }
                            }
                        }
                    }
                    if let Some(stats) = stats {
                        dl { class: "hero_stats",
                            for (index, stat) in stats.iter().enumerate() {
                                div { key: "{index}", class: "hero_stat",
                                    dt { class: "hero_stat_label", "{stat.label}" }
                                    dd { class: "hero_stat_value", "{stat.value}" }
                                }
                            }
                        }
                    }
                }
                div { class: "hero_visual", "data-motion": "visual",
                    if let Some(src) = image_src {
                        img {
                            class: "hero_image",
                            src: "{src}",
                            alt: "",
                            "loading": loading,
                            "fetchpriority": fetch_priority,
                        }
                    } else {
                        RadialMotif {}
                    }
                }
            }
            HeroSubNav {}
        }
    }
}
