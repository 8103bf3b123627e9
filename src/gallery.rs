//! Filterable photo gallery with lightbox.
//!
//! Items are read once from the DOM. Filtering only toggles `display`, so
//! items keep their identity and listeners. The visible list is recomputed
//! at open and before every navigation, which keeps the lightbox consistent
//! with the filter.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::consts::FILTER_ALL;
use crate::lightbox::{Lightbox, LightboxCommand, LightboxUpdate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: String,
    pub caption: String,
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter control value; the `all` sentinel matches everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == FILTER_ALL {
            Self::All
        } else {
            Self::Category(raw.to_owned())
        }
    }

    /// Exact category match.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }
}

/// Gallery state for one page: items, current filter, and the lightbox.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    filter: Filter,
    lightbox: Lightbox,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, filter: Filter::All, lightbox: Lightbox::default() }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Switch filter and return the visibility flag of every item.
    pub fn set_filter(&mut self, filter: Filter) -> Vec<bool> {
        self.filter = filter;
        self.visibility()
    }

    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        self.items
            .iter()
            .map(|item| self.filter.matches(&item.category))
            .collect()
    }

    /// Indices of currently visible items, in document order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(&item.category))
            .map(|(i, _)| i)
            .collect()
    }

    /// Open the lightbox on item `index`. Hidden items do not open.
    pub fn open(&mut self, index: usize) -> Option<&GalleryItem> {
        let visible = self.visible_indices();
        let item = self.lightbox.open(visible, index)?;
        self.items.get(item)
    }

    pub fn command(&mut self, command: LightboxCommand) -> Option<LightboxUpdate> {
        let visible = self.visible_indices();
        self.lightbox.apply_over(visible, command)
    }

    /// Item currently shown in the lightbox.
    #[must_use]
    pub fn current(&self) -> Option<&GalleryItem> {
        self.lightbox.current().and_then(|i| self.items.get(i))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent};

    use super::{Filter, Gallery, GalleryItem};
    use crate::config::GalleryConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};
    use crate::lightbox::{LightboxCommand, LightboxUpdate};

    struct LightboxView {
        root: Element,
        image: HtmlImageElement,
        caption: Element,
        body: Option<HtmlElement>,
    }

    impl LightboxView {
        fn show(&self, item: &GalleryItem, config: &GalleryConfig) -> Result<(), BehaviorError> {
            self.image.set_src(&item.src);
            self.image.set_alt(&item.caption);
            self.caption.set_text_content(Some(item.caption.as_str()));
            dom::set_class(&self.root, &config.active_class, true)?;
            if let Some(body) = &self.body {
                dom::set_style(body, "overflow", "hidden")?;
            }
            Ok(())
        }

        fn hide(&self, config: &GalleryConfig) -> Result<(), BehaviorError> {
            dom::set_class(&self.root, &config.active_class, false)?;
            if let Some(body) = &self.body {
                dom::set_style(body, "overflow", "")?;
            }
            Ok(())
        }

        fn render(&self, gallery: &Gallery, update: LightboxUpdate, config: &GalleryConfig) -> Result<(), BehaviorError> {
            match update {
                LightboxUpdate::Show(_) => match gallery.current() {
                    Some(item) => self.show(item, config),
                    None => Ok(()),
                },
                LightboxUpdate::Closed => self.hide(config),
            }
        }
    }

    struct Shared {
        gallery: RefCell<Gallery>,
        elements: Vec<Element>,
        view: Option<LightboxView>,
        config: GalleryConfig,
    }

    impl Shared {
        fn command(&self, command: LightboxCommand) -> Result<(), BehaviorError> {
            let Some(view) = &self.view else {
                return Ok(());
            };
            let update = self.gallery.borrow_mut().command(command);
            match update {
                Some(update) => view.render(&self.gallery.borrow(), update, &self.config),
                None => Ok(()),
            }
        }
    }

    fn read_item(el: &Element, config: &GalleryConfig) -> GalleryItem {
        GalleryItem {
            src: el.get_attribute("href").unwrap_or_default(),
            caption: el.get_attribute(&config.caption_attr).unwrap_or_default(),
            category: el.get_attribute(&config.category_attr).unwrap_or_default(),
        }
    }

    fn mount_view(document: &Document, config: &GalleryConfig) -> Result<LightboxView, BehaviorError> {
        let root = dom::require(document, &config.lightbox_selector)?;
        let image = dom::require_in(&root, &config.image_selector)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| BehaviorError::missing(&config.image_selector))?;
        let caption = dom::require_in(&root, &config.caption_selector)?;
        Ok(LightboxView { root, image, caption, body: document.body() })
    }

    fn apply_filter(shared: &Shared, buttons: &[Element], clicked: &Element) -> Result<(), BehaviorError> {
        for other in buttons {
            dom::set_class(other, &shared.config.active_class, dom::same_node(other, clicked))?;
        }
        let raw = clicked.get_attribute(&shared.config.filter_attr).unwrap_or_default();
        let visible = shared.gallery.borrow_mut().set_filter(Filter::parse(&raw));
        for (el, show) in shared.elements.iter().zip(visible) {
            dom::set_style(el, "display", if show { "" } else { "none" })?;
        }
        Ok(())
    }

    fn wire_filters(document: &Document, shared: &Rc<Shared>) -> Result<(), BehaviorError> {
        let buttons = Rc::new(dom::query_all(document, &shared.config.filter_selector)?);
        for button in buttons.iter() {
            let shared = Rc::clone(shared);
            let buttons = Rc::clone(&buttons);
            let clicked = button.clone();
            dom::listen(button, "click", move |_| {
                report("gallery filter", apply_filter(&shared, &buttons, &clicked));
            })?;
        }
        Ok(())
    }

    fn wire_lightbox(document: &Document, shared: &Rc<Shared>) -> Result<(), BehaviorError> {
        let Some(view) = &shared.view else {
            return Err(BehaviorError::missing(&shared.config.lightbox_selector));
        };

        for (index, el) in shared.elements.iter().enumerate() {
            let shared = Rc::clone(shared);
            dom::listen(el, "click", move |event| {
                event.prevent_default();
                let Some(view) = &shared.view else {
                    return;
                };
                let item = shared.gallery.borrow_mut().open(index).cloned();
                if let Some(item) = item {
                    report("lightbox", view.show(&item, &shared.config));
                }
            })?;
        }

        let controls = [
            (&shared.config.prev_selector, LightboxCommand::Prev),
            (&shared.config.next_selector, LightboxCommand::Next),
            (&shared.config.close_selector, LightboxCommand::Close),
        ];
        for (selector, command) in controls {
            let Some(control) = view.root.query_selector(selector)? else {
                log::debug!("lightbox: no control {selector}");
                continue;
            };
            let shared = Rc::clone(shared);
            dom::listen(&control, "click", move |event| {
                event.stop_propagation();
                report("lightbox", shared.command(command));
            })?;
        }

        {
            let shared = Rc::clone(shared);
            let root = view.root.clone();
            dom::listen(&view.root, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_ref::<Element>().map(|el| dom::same_node(el, &root)))
                    .unwrap_or(false);
                if on_backdrop {
                    report("lightbox", shared.command(LightboxCommand::Close));
                }
            })?;
        }

        let shared = Rc::clone(shared);
        dom::listen(document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let Some(command) = LightboxCommand::from_key(&key) else {
                return;
            };
            if !shared.gallery.borrow().lightbox().is_active() {
                return;
            }
            event.prevent_default();
            report("lightbox", shared.command(command));
        })?;
        Ok(())
    }

    /// Wire filter controls and the lightbox. Either half may be absent.
    pub fn mount(document: &Document, config: &GalleryConfig) -> Result<(), BehaviorError> {
        let elements = dom::require_all(document, &config.item_selector)?;
        let items = elements.iter().map(|el| read_item(el, config)).collect();
        let view = match mount_view(document, config) {
            Ok(view) => Some(view),
            Err(err) if err.is_expected_absence() => None,
            Err(err) => return Err(err),
        };
        let shared = Rc::new(Shared { gallery: RefCell::new(Gallery::new(items)), elements, view, config: config.clone() });

        report("gallery filter", wire_filters(document, &shared));
        report("lightbox", wire_lightbox(document, &shared));
        Ok(())
    }
}
