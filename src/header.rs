//! Sticky header "scrolled" class.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Last written header state, so the class is only touched on change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: Option<bool>,
}

impl HeaderState {
    /// Returns the new state when it differs from the last one written.
    pub fn update(&mut self, scroll_y: f64, threshold_px: f64) -> Option<bool> {
        let next = is_scrolled(scroll_y, threshold_px);
        if self.scrolled == Some(next) {
            return None;
        }
        self.scrolled = Some(next);
        Some(next)
    }

    #[must_use]
    pub fn is_scrolled(self) -> bool {
        self.scrolled.unwrap_or(false)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Window};

    use super::HeaderState;
    use crate::config::HeaderConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    fn sync(window: &Window, header: &Element, state: &Cell<HeaderState>, config: &HeaderConfig) -> Result<(), BehaviorError> {
        let scroll_y = window.scroll_y()?;
        let mut next = state.get();
        if let Some(scrolled) = next.update(scroll_y, config.threshold_px) {
            dom::set_class(header, &config.scrolled_class, scrolled)?;
        }
        state.set(next);
        Ok(())
    }

    fn request_sync(
        window: &Window,
        header: &Element,
        state: &Rc<Cell<HeaderState>>,
        config: &Rc<HeaderConfig>,
        raf_pending: &Rc<Cell<bool>>,
    ) {
        if raf_pending.get() {
            return;
        }
        raf_pending.set(true);

        let window_for_cb = window.clone();
        let header_for_cb = header.clone();
        let state_for_cb = Rc::clone(state);
        let config_for_cb = Rc::clone(config);
        let pending_for_cb = Rc::clone(raf_pending);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            pending_for_cb.set(false);
            report("header", sync(&window_for_cb, &header_for_cb, &state_for_cb, &config_for_cb));
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        } else {
            raf_pending.set(false);
            report("header", sync(window, header, state, config));
        }
    }

    pub fn mount(document: &Document, config: &HeaderConfig) -> Result<(), BehaviorError> {
        let header = dom::require(document, &config.selector)?;
        let window = dom::window()?;
        let state = Rc::new(Cell::new(HeaderState::default()));
        let config = Rc::new(config.clone());
        sync(&window, &header, &state, &config)?;

        let raf_pending = Rc::new(Cell::new(false));
        let target = window.clone();
        dom::listen(&target, "scroll", move |_| {
            if config.throttle {
                request_sync(&window, &header, &state, &config, &raf_pending);
            } else {
                report("header", sync(&window, &header, &state, &config));
            }
        })?;
        Ok(())
    }
}
