use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubNavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SubNavLink {
    /// Target element id, i.e. the href without its leading `#`.
    pub fn anchor(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const SUB_NAV_LINKS: [SubNavLink; 6] = [
    SubNavLink { label: "Overview", href: "#overview" },
    SubNavLink { label: "Platform", href: "#platform" },
    SubNavLink { label: "Security", href: "#security" },
    SubNavLink { label: "Deployment", href: "#deployment" },
    SubNavLink { label: "Customers", href: "#customers" },
    SubNavLink { label: "Pricing", href: "#pricing" },
];

/// Fixed in-page navigation under the hero. Takes no props.
#[component]
pub fn HeroSubNav() -> Element {
    rsx! {
        nav { class: "hero_subnav", "aria-label": "Sections",
            for link in SUB_NAV_LINKS {
                a { key: "{link.href}", class: "hero_subnav_link", href: link.href, "{link.label}" }
            }
        }
    }
}
