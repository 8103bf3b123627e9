//! # hotel-site
//!
//! Client-side behavior for the hotel's static, server-rendered pages,
//! compiled to WebAssembly. Each component reads the markup it needs at
//! load, builds a small state object, and attaches its own listeners. A page
//! that lacks a component's markup simply skips that component.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference: stored choice, OS fallback, toggle |
//! | [`header`] | Sticky header "scrolled" class |
//! | [`nav_toggle`] | Mobile hamburger menu |
//! | [`reveal`] | One-shot scroll reveal, optionally staggered |
//! | [`scroll_spy`] | Section-driven nav highlighting |
//! | [`thumbnails`] | Room gallery image switcher |
//! | [`contact_form`] | Simulated contact form submission |
//! | [`gallery`] | Category filter + lightbox wiring |
//! | [`lightbox`] | Circular lightbox cursor |
//! | [`config`] | Selectors, classes, timings; inline JSON override |
//! | [`error`] | [`error::BehaviorError`] and reporting |
//! | [`consts`] | Shared defaults |
//!
//! Without the `hydrate` feature only the pure state machines are built,
//! which is what the native test suite exercises.

pub mod config;
pub mod consts;
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod nav_toggle;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;
pub mod thumbnails;

#[cfg(feature = "hydrate")]
pub use browser::{mount_all, start};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::Document;

    use crate::config::SiteConfig;
    use crate::error::report;
    use crate::{contact_form, dom, gallery, header, nav_toggle, reveal, scroll_spy, theme, thumbnails};

    /// Load config and mount every component independently.
    pub fn mount_all(document: &Document) {
        let config = SiteConfig::load(document);
        match config.log_level() {
            Ok(level) => log::set_max_level(level),
            Err(err) => log::warn!("{err}"),
        }

        report("theme", theme::mount(document, &config.theme));
        report("header", header::mount(document, &config.header));
        report("nav", nav_toggle::mount(document, &config.nav));
        for group in &config.reveal {
            report("reveal", reveal::mount(document, group));
        }
        for spy in &config.scroll_spy {
            report("scroll-spy", scroll_spy::mount(document, spy));
        }
        report("thumbnails", thumbnails::mount(document, &config.thumbnails));
        report("contact", contact_form::mount(document, &config.contact));
        report("gallery", gallery::mount(document, &config.gallery));
        log::debug!("site behavior mounted");
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Trace) {
            web_sys::console::warn_1(&format!("logger init failed: {err}").into());
        }

        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                log::debug!("start: {err}");
                return;
            }
        };

        if document.ready_state() != "loading" {
            mount_all(&document);
            return;
        }
        let target = document.clone();
        report(
            "start",
            dom::listen(&target, "DOMContentLoaded", move |_| mount_all(&document)),
        );
    }
}
