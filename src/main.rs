//! AICO Switcher - Simulator Entry Point
//!
//! Drives the switching engine against an in-memory rendition of the
//! site navbar, using the OS locale and the file-backed preference
//! store. Lets redirect and rewrite behavior be checked without a
//! browser.

use anyhow::Result;

use aico_switcher::constants::TOGGLE_SELECTOR;
use aico_switcher::dom::{Document, MemoryDocument};
use aico_switcher::domain::config::SiteConfig;
use aico_switcher::page::SimulatedPage;
use aico_switcher::store::FilePreferenceStore;
use aico_switcher::switcher::LanguageSwitcher;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting AICO language switcher simulator...");

    let config = SiteConfig::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default site config");
        SiteConfig::default()
    });

    // Primary tag the way a browser would report it
    let reported = locale_config::Locale::current().to_string();
    let primary = reported.split(',').next().unwrap_or("").to_string();
    let locale = aico_switcher::i18n::classify_tag(&primary);
    tracing::info!(tag = %primary, locale = locale.display_name(), "Detected OS locale");

    let page = SimulatedPage::new(format!("{}index.html", config.site_base), vec![primary]);
    let store = FilePreferenceStore::from_default_location()?;
    let dom = sample_navbar();

    let mut switcher = LanguageSwitcher::new(page, dom, store, config);
    switcher.run();

    match switcher.page().navigations().first() {
        Some(target) => {
            tracing::info!(target = %target, "First visit: engine requested a redirect");
        }
        None => {
            let label = switcher
                .dom()
                .query(TOGGLE_SELECTOR)
                .map(|n| switcher.dom().text(n))
                .unwrap_or_else(|| "(not injected)".to_string());
            tracing::info!(toggle = %label, "No redirect; toggle control injected");
        }
    }

    Ok(())
}

/// Bootstrap-shaped navbar mirroring the production site header
fn sample_navbar() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let nav = doc.append_element(doc.root(), "nav", "navbar");
    let container = doc.append_element(nav, "div", "container-fluid");
    let collapse = doc.append_element(container, "div", "navbar-collapse");

    let links = doc.append_element(collapse, "ul", "navbar-nav");
    for (label, href) in [
        ("Methodology", "./methodology/index.html"),
        ("Framework", "./framework/index.html"),
        ("Skills", "./skills/index.html"),
        ("Lab", "./lab/index.html"),
        ("Service", "./service/index.html"),
        ("Blog", "./blog/index.html"),
    ] {
        let item = doc.append_element(links, "li", "nav-item");
        let link = doc.append_element(item, "a", "nav-link");
        doc.set_attribute(link, "href", href);
        doc.set_text(link, label);
    }

    // Right-aligned list the toggle is prepended to
    doc.append_element(collapse, "ul", "navbar-nav ms-auto");
    doc
}
