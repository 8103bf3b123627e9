//! Site behavior configuration.
//!
//! Defaults describe the hotel site's markup contract. A page may override
//! any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-behavior-config">
//!   { "header": { "thresholdPx": 80 }, "logLevel": "debug" }
//! </script>
//! ```
//!
//! Missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_CLASS, ATTRACTION_BOTTOM_MARGIN_PCT, ATTRACTION_EXTRA_OFFSET_PX, CONTACT_SENDING_MS, CONTACT_SUCCESS_MS,
    HEADER_SCROLL_THRESHOLD_PX, POLICY_BOTTOM_MARGIN_PCT, POLICY_EXTRA_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLLED_CLASS, STAGGER_STEP_MS, STAGGER_THRESHOLD, THEME_ATTRIBUTE, THEME_STORAGE_KEY, THUMBNAIL_FADE_MS,
    VISIBLE_CLASS,
};
use crate::error::BehaviorError;

/// Id of the inline override block.
pub const CONFIG_ELEMENT_ID: &str = "site-behavior-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub log_level: String,
    pub header: HeaderConfig,
    pub nav: NavConfig,
    pub theme: ThemeConfig,
    pub reveal: Vec<RevealGroup>,
    pub scroll_spy: Vec<SpyConfig>,
    pub thumbnails: ThumbnailConfig,
    pub contact: ContactConfig,
    pub gallery: GalleryConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            header: HeaderConfig::default(),
            nav: NavConfig::default(),
            theme: ThemeConfig::default(),
            reveal: vec![
                RevealGroup::default(),
                RevealGroup {
                    selector: ".stagger-group".into(),
                    threshold: STAGGER_THRESHOLD,
                    root_margin: "0px".into(),
                    stagger_ms: Some(STAGGER_STEP_MS),
                    visible_class: VISIBLE_CLASS.into(),
                },
            ],
            scroll_spy: vec![SpyConfig::policies(), SpyConfig::attractions()],
            thumbnails: ThumbnailConfig::default(),
            contact: ContactConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub threshold_px: f64,
    /// Coalesce scroll events into one update per animation frame.
    pub throttle: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header".into(),
            scrolled_class: SCROLLED_CLASS.into(),
            threshold_px: HEADER_SCROLL_THRESHOLD_PX,
            throttle: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub button_selector: String,
    pub panel_selector: String,
    pub open_class: String,
    /// Put `body_class` on `<body>` instead of the open class on the panel.
    pub toggle_body: bool,
    pub body_class: String,
    pub close_on_link: bool,
    pub link_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            button_selector: ".hamburger".into(),
            panel_selector: ".nav-menu".into(),
            open_class: ACTIVE_CLASS.into(),
            toggle_body: false,
            body_class: "nav-open".into(),
            close_on_link: true,
            link_selector: "a".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub toggle_selector: String,
    pub storage_key: String,
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_selector: "#theme-toggle".into(),
            storage_key: THEME_STORAGE_KEY.into(),
            attribute: THEME_ATTRIBUTE.into(),
        }
    }
}

/// One set of elements revealed on scroll.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealGroup {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    /// When set, the matched elements are containers whose children are
    /// revealed this many milliseconds apart.
    pub stagger_ms: Option<u32>,
    pub visible_class: String,
}

impl Default for RevealGroup {
    fn default() -> Self {
        Self {
            selector: ".fade-in, .slide-up, .animate-on-scroll".into(),
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.into(),
            stagger_ms: None,
            visible_class: VISIBLE_CLASS.into(),
        }
    }
}

/// One scroll-spy instance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpyConfig {
    pub name: String,
    pub section_selector: String,
    pub link_selector: String,
    /// Sticky elements whose heights push the active boundary down.
    pub offset_selectors: Vec<String>,
    pub extra_offset_px: f64,
    pub bottom_margin_pct: f64,
    pub threshold: f64,
    pub active_class: String,
}

impl SpyConfig {
    pub fn policies() -> Self {
        Self {
            name: "policies".into(),
            section_selector: ".policy-section".into(),
            link_selector: ".policy-nav a".into(),
            offset_selectors: vec![".header".into(), ".policy-nav".into()],
            extra_offset_px: POLICY_EXTRA_OFFSET_PX,
            bottom_margin_pct: POLICY_BOTTOM_MARGIN_PCT,
            threshold: 0.0,
            active_class: ACTIVE_CLASS.into(),
        }
    }

    pub fn attractions() -> Self {
        Self {
            name: "attractions".into(),
            section_selector: ".attraction-section".into(),
            link_selector: ".attractions-nav a".into(),
            offset_selectors: vec![".header".into(), ".attractions-nav".into()],
            extra_offset_px: ATTRACTION_EXTRA_OFFSET_PX,
            bottom_margin_pct: ATTRACTION_BOTTOM_MARGIN_PCT,
            threshold: 0.0,
            active_class: ACTIVE_CLASS.into(),
        }
    }
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self::policies()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThumbnailConfig {
    pub thumb_selector: String,
    pub container_selector: String,
    pub active_class: String,
    /// Attribute naming the id of the main `<img>`.
    pub target_attr: String,
    pub responsive_attr: String,
    pub fallback_attr: String,
    pub fade_ms: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            thumb_selector: ".thumbnail".into(),
            container_selector: ".room-gallery".into(),
            active_class: ACTIVE_CLASS.into(),
            target_attr: "data-target".into(),
            responsive_attr: "data-webp".into(),
            fallback_attr: "data-full".into(),
            fade_ms: THUMBNAIL_FADE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub form_selector: String,
    pub submit_selector: String,
    /// Element inside the submit button whose text carries the label.
    pub label_selector: String,
    pub loading_class: String,
    pub success_class: String,
    pub sending_label: String,
    pub success_label: String,
    pub sending_ms: u32,
    pub success_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_selector: "#contact-form".into(),
            submit_selector: "button[type=\"submit\"]".into(),
            label_selector: ".btn-text".into(),
            loading_class: "loading".into(),
            success_class: "success".into(),
            sending_label: "Sending...".into(),
            success_label: "Message Sent!".into(),
            sending_ms: CONTACT_SENDING_MS,
            success_ms: CONTACT_SUCCESS_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub filter_selector: String,
    pub filter_attr: String,
    pub item_selector: String,
    pub category_attr: String,
    pub caption_attr: String,
    pub lightbox_selector: String,
    pub image_selector: String,
    pub caption_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
    pub close_selector: String,
    pub active_class: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            filter_selector: ".filter-btn".into(),
            filter_attr: "data-filter".into(),
            item_selector: ".gallery-item".into(),
            category_attr: "data-category".into(),
            caption_attr: "data-caption".into(),
            lightbox_selector: "#lightbox".into(),
            image_selector: ".lightbox-img".into(),
            caption_selector: ".lightbox-caption".into(),
            prev_selector: ".lightbox-prev".into(),
            next_selector: ".lightbox-next".into(),
            close_selector: ".lightbox-close".into(),
            active_class: ACTIVE_CLASS.into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Configured log level.
    pub fn log_level(&self) -> Result<log::LevelFilter, BehaviorError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| BehaviorError::InvalidConfig(format!("unknown log level: {}", self.log_level)))
    }

    pub fn validate(&self) -> Result<(), BehaviorError> {
        self.log_level()?;
        for group in &self.reveal {
            check_threshold(&group.selector, group.threshold)?;
            check_selector("reveal.selector", &group.selector)?;
        }
        for spy in &self.scroll_spy {
            check_threshold(&spy.name, spy.threshold)?;
            check_selector("scrollSpy.sectionSelector", &spy.section_selector)?;
            check_selector("scrollSpy.linkSelector", &spy.link_selector)?;
            if !(0.0..=100.0).contains(&spy.bottom_margin_pct) {
                return Err(BehaviorError::InvalidConfig(format!(
                    "{}: bottomMarginPct {} outside 0..=100",
                    spy.name, spy.bottom_margin_pct
                )));
            }
        }
        check_selector("header.selector", &self.header.selector)?;
        check_selector("nav.buttonSelector", &self.nav.button_selector)?;
        check_selector("nav.panelSelector", &self.nav.panel_selector)?;
        check_selector("theme.toggleSelector", &self.theme.toggle_selector)?;
        check_selector("theme.storageKey", &self.theme.storage_key)?;
        check_selector("thumbnails.thumbSelector", &self.thumbnails.thumb_selector)?;
        check_selector("contact.formSelector", &self.contact.form_selector)?;
        check_selector("contact.labelSelector", &self.contact.label_selector)?;
        check_selector("gallery.itemSelector", &self.gallery.item_selector)?;
        Ok(())
    }
}

fn check_threshold(owner: &str, threshold: f64) -> Result<(), BehaviorError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(BehaviorError::InvalidConfig(format!("{owner}: threshold {threshold} outside 0..=1")))
    }
}

fn check_selector(field: &str, value: &str) -> Result<(), BehaviorError> {
    if value.trim().is_empty() {
        Err(BehaviorError::InvalidConfig(format!("{field} is empty")))
    } else {
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl SiteConfig {
    /// Defaults, overridden by the page's inline config block if present.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: {err}; using defaults");
                Self::default()
            }
        }
    }
}
