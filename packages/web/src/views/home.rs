use dioxus::prelude::*;
use ui::{HeroSection, SUB_NAV_LINKS};

use crate::content::site_hero;

fn section_blurb(anchor: &str) -> &'static str {
    match anchor {
        "overview" => "One runtime for private inference on hardware you already operate.",
        "platform" => "Model serving, retrieval and policy enforcement, packaged as a single appliance.",
        "security" => "Prompts, weights and logs never cross your network boundary.",
        "deployment" => "Air-gapped installs, Kubernetes operators and bare-metal images.",
        "customers" => "Public agencies, banks and hospitals running regulated workloads.",
        "pricing" => "Per-node licensing with no usage metering.",
        _ => "",
    }
}

#[component]
pub fn Home() -> Element {
    let hero = site_hero();

    rsx! {
        HeroSection {
            variant: hero.variant.clone(),
            eyebrow: hero.eyebrow.clone(),
            title: hero.title.clone(),
            subtitle: hero.subtitle.clone(),
            ctas: hero.ctas.clone(),
            stats: hero.stats.clone(),
            image_src: hero.image_src.clone(),
        }
        div { class: "route_view",
            for link in SUB_NAV_LINKS {
                section { key: "{link.href}", id: link.anchor(), class: "panel",
                    h2 { "{link.label}" }
                    p { class: "hint", {section_blurb(link.anchor())} }
                }
            }
        }
    }
}
