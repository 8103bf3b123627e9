//! Shared constants for the site behavior layer.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting the OS dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Header ──────────────────────────────────────────────────────

/// Vertical scroll offset past which the header counts as scrolled.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAGGER_THRESHOLD: f64 = 0.2;
pub const STAGGER_STEP_MS: u32 = 100;

// ── Scroll-spy ──────────────────────────────────────────────────

/// Bottom root margin (percent of viewport) for policy pages.
pub const POLICY_BOTTOM_MARGIN_PCT: f64 = 60.0;
pub const POLICY_EXTRA_OFFSET_PX: f64 = 20.0;

/// Bottom root margin (percent of viewport) for attraction pages.
pub const ATTRACTION_BOTTOM_MARGIN_PCT: f64 = 50.0;
pub const ATTRACTION_EXTRA_OFFSET_PX: f64 = 10.0;

// ── Timings ─────────────────────────────────────────────────────

/// Fade-out duration before a room image swaps sources.
pub const THUMBNAIL_FADE_MS: u32 = 200;

/// Simulated network delay for the contact form.
pub const CONTACT_SENDING_MS: u32 = 2_000;

/// How long the contact form success state stays visible.
pub const CONTACT_SUCCESS_MS: u32 = 3_000;

// ── Gallery ─────────────────────────────────────────────────────

/// Filter value that matches every gallery item.
pub const FILTER_ALL: &str = "all";

// ── Classes ─────────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";
