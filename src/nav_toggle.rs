//! Mobile navigation (hamburger) toggle.
//!
//! The button and the nav panel carry the same open class; in body mode the
//! document body gets a class instead of the panel.

#[cfg(test)]
#[path = "nav_toggle_test.rs"]
mod nav_toggle_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::MenuState;
    use crate::config::NavConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    struct NavParts {
        button: Element,
        panel: Element,
        body: Option<Element>,
    }

    impl NavParts {
        fn render(&self, config: &NavConfig, open: bool) -> Result<(), BehaviorError> {
            dom::set_class(&self.button, &config.open_class, open)?;
            match &self.body {
                Some(body) => dom::set_class(body, &config.body_class, open),
                None => dom::set_class(&self.panel, &config.open_class, open),
            }
        }
    }

    pub fn mount(document: &Document, config: &NavConfig) -> Result<(), BehaviorError> {
        let button = dom::require(document, &config.button_selector)?;
        let panel = dom::require(document, &config.panel_selector)?;
        let body = if config.toggle_body {
            Some(document.body().ok_or_else(|| BehaviorError::missing("body"))?.into())
        } else {
            None
        };
        let parts = Rc::new(NavParts { button, panel, body });
        let state = Rc::new(Cell::new(MenuState::default()));
        let config = Rc::new(config.clone());

        {
            let parts = Rc::clone(&parts);
            let state = Rc::clone(&state);
            let config = Rc::clone(&config);
            let button = parts.button.clone();
            dom::listen(&button, "click", move |_| {
                let mut menu = state.get();
                let open = menu.toggle();
                state.set(menu);
                report("nav", parts.render(&config, open));
            })?;
        }

        if config.close_on_link {
            for link in dom::query_all_in(&parts.panel, &config.link_selector)? {
                let parts = Rc::clone(&parts);
                let state = Rc::clone(&state);
                let config = Rc::clone(&config);
                dom::listen(&link, "click", move |_| {
                    let mut menu = state.get();
                    if menu.close() {
                        state.set(menu);
                        report("nav", parts.render(&config, false));
                    }
                })?;
            }
        }
        Ok(())
    }
}
