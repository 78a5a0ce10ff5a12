use dioxus::prelude::*;

use config::SiteConfig;
use views::Home;

mod config;
mod content;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let site = SiteConfig::from_build_env();
    match site.variant.as_deref() {
        Some(name) if ui::variants().iter().any(|v| v.name == name) => {
            eprintln!("startup: HERO_VARIANT={name}");
        }
        Some(name) => {
            eprintln!(
                "startup: WARNING HERO_VARIANT={name} is unknown, hero renders as {}",
                ui::DEFAULT_VARIANT
            );
        }
        None => {}
    }
    if let Some(src) = &site.image_src {
        eprintln!("startup: HERO_IMAGE_SRC={src}");
    }

    let hero = content::site_hero();
    eprintln!(
        "startup: hero variant={} ctas={} stats={}",
        ui::resolve_variant(hero.variant.as_deref()).name,
        hero.ctas.len(),
        hero.stats.len()
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::HeroTheme {}
        Router::<Route> {}
    }
}
