//! This crate contains all shared UI for the workspace.

mod content;
pub use content::{
    present_items, present_text, CallToAction, ContentError, HeroContent, StatItem,
};

mod variant;
pub use variant::{resolve_variant, variants, VariantConfig, DEFAULT_VARIANT};

mod hero;
pub use hero::{HeroProps, HeroSection};

mod radial;
pub use radial::{spokes, RadialMotif, SPOKE_COUNT};

mod sub_nav;
pub use sub_nav::{HeroSubNav, SubNavLink, SUB_NAV_LINKS};

mod motion;
pub use motion::{entrance_script, use_entrance_motion, EntranceMotion};

mod theme;
pub use theme::HeroTheme;
