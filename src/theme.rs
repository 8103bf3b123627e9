//! Light/dark theme preference.
//!
//! The applied theme lives in the `data-theme` attribute on `<html>`. An
//! explicit choice is persisted to `localStorage` and always wins; with no
//! stored choice the page follows the OS `prefers-color-scheme` setting, live.
//!
//! Applying the initial theme never persists it, otherwise the first visit
//! would pin the OS value and stop following later OS changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::BehaviorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored preference if present, otherwise the OS preference.
#[must_use]
pub fn initial_theme(stored: Option<Theme>, os_prefers_dark: bool) -> Theme {
    stored.unwrap_or(Theme::from_os(os_prefers_dark))
}

/// OS dark preference from a media query result. An unavailable query
/// reads as light.
#[must_use]
pub fn media_prefers_dark(query_matches: Option<bool>) -> bool {
    query_matches == Some(true)
}

/// Persistence seam for the single theme key.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme) -> Result<(), BehaviorError>;
}

/// In-memory store used off-browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub value: Option<Theme>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value
    }

    fn save(&mut self, theme: Theme) -> Result<(), BehaviorError> {
        self.value = Some(theme);
        Ok(())
    }
}

/// Theme state for one page: the store plus the currently applied value.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S, os_prefers_dark: bool) -> Self {
        let applied = initial_theme(store.load(), os_prefers_dark);
        Self { store, applied }
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.store.load().is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply and persist an explicit choice.
    pub fn set(&mut self, theme: Theme) -> Result<Theme, BehaviorError> {
        self.applied = theme;
        self.store.save(theme)?;
        Ok(theme)
    }

    /// Flip the applied theme and persist it, making it sticky.
    pub fn toggle(&mut self) -> Result<Theme, BehaviorError> {
        self.set(self.applied.flipped())
    }

    /// React to a live OS preference change.
    ///
    /// Returns the theme to apply, or `None` when an explicit choice is
    /// stored (or nothing changed).
    pub fn on_os_change(&mut self, os_prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        let next = Theme::from_os(os_prefers_dark);
        if next == self.applied {
            return None;
        }
        self.applied = next;
        Some(next)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStore, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, MediaQueryList, MediaQueryListEvent, Storage};

    use super::{PreferenceStore, Theme, ThemeManager, media_prefers_dark};
    use crate::config::ThemeConfig;
    use crate::consts::DARK_SCHEME_QUERY;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    /// `localStorage`-backed preference.
    pub struct LocalStore {
        storage: Option<Storage>,
        key: String,
    }

    impl LocalStore {
        pub fn open(key: &str) -> Self {
            let storage = match dom::window().map(|w| w.local_storage()) {
                Ok(Ok(storage)) => storage,
                _ => None,
            };
            Self { storage, key: key.to_owned() }
        }
    }

    impl PreferenceStore for LocalStore {
        fn load(&self) -> Option<Theme> {
            let storage = self.storage.as_ref()?;
            match storage.get_item(&self.key) {
                Ok(Some(raw)) => Theme::parse(&raw),
                _ => None,
            }
        }

        fn save(&mut self, theme: Theme) -> Result<(), BehaviorError> {
            let Some(storage) = self.storage.as_ref() else {
                return Err(BehaviorError::Dom("localStorage unavailable".into()));
            };
            storage.set_item(&self.key, theme.as_str())?;
            Ok(())
        }
    }

    fn apply(document: &Document, attribute: &str, theme: Theme) -> Result<(), BehaviorError> {
        let root = document.document_element().ok_or_else(|| BehaviorError::missing("html"))?;
        root.set_attribute(attribute, theme.as_str())?;
        Ok(())
    }

    /// Apply the initial theme, wire the toggle, and follow OS changes.
    ///
    /// The initial theme is applied even when the toggle control is absent.
    pub fn mount(document: &Document, config: &ThemeConfig) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let media = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(media) => media,
            Err(err) => {
                log::debug!("theme: {}", BehaviorError::from(err));
                None
            }
        };
        let os_dark = media_prefers_dark(media.as_ref().map(MediaQueryList::matches));

        let manager = Rc::new(RefCell::new(ThemeManager::new(LocalStore::open(&config.storage_key), os_dark)));
        apply(document, &config.attribute, manager.borrow().applied())?;

        if let Some(media) = media {
            let manager = Rc::clone(&manager);
            let document = document.clone();
            let attribute = config.attribute.clone();
            dom::listen(&media, "change", move |event| {
                let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                if let Some(theme) = manager.borrow_mut().on_os_change(event.matches()) {
                    log::debug!("theme: following os preference -> {}", theme.as_str());
                    report("theme", apply(&document, &attribute, theme));
                }
            })?;
        }

        let toggle = dom::require(document, &config.toggle_selector)?;
        let document = document.clone();
        let attribute = config.attribute.clone();
        dom::listen(&toggle, "click", move |_| {
            let result = manager.borrow_mut().toggle();
            match result {
                Ok(theme) => report("theme", apply(&document, &attribute, theme)),
                Err(err) => {
                    // Persisting failed; still honor the click for this page.
                    let theme = manager.borrow().applied();
                    log::warn!("theme: {err}");
                    report("theme", apply(&document, &attribute, theme));
                }
            }
        })?;
        Ok(())
    }
}
