//! Room gallery thumbnail switcher.
//!
//! Selecting a thumbnail fades the target image out, swaps its `<source>`
//! (responsive format) and `<img>` (fallback format) to the thumbnail's
//! full-size sources, fades back in, and moves the active marker. The
//! active marker is scoped to the nearest gallery container, so several
//! galleries on one page stay independent.

#[cfg(test)]
#[path = "thumbnails_test.rs"]
mod thumbnails_test;

/// Full-size sources carried by a thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSources {
    /// Responsive format (e.g. WebP) for the `<source srcset>`, if any.
    pub responsive: Option<String>,
    /// Fallback format for the `<img src>`.
    pub fallback: String,
}

impl ImageSources {
    /// Build from raw attribute values. A fallback is required.
    #[must_use]
    pub fn from_attributes(responsive: Option<String>, fallback: Option<String>) -> Option<Self> {
        let fallback = fallback.filter(|s| !s.trim().is_empty())?;
        let responsive = responsive.filter(|s| !s.trim().is_empty());
        Some(Self { responsive, fallback })
    }

    /// What the sibling `<source>` must carry after a swap.
    ///
    /// Without a responsive format the old `srcset` is cleared; a `<picture>`
    /// prefers its `<source>`, so leaving it would keep showing the old image.
    #[must_use]
    pub fn source_update(&self) -> SourceUpdate<'_> {
        match self.responsive.as_deref() {
            Some(srcset) => SourceUpdate::Set(srcset),
            None => SourceUpdate::Clear,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceUpdate<'a> {
    Set(&'a str),
    Clear,
}

/// Marker changes for one thumbnail activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub deactivate: Vec<usize>,
    pub activate: usize,
}

/// Decide what a click on thumbnail `clicked` does within its group.
///
/// `None` when the thumbnail is already active, out of range, or its target
/// image is missing.
#[must_use]
pub fn plan_handoff(active_flags: &[bool], clicked: usize, target_present: bool) -> Option<Handoff> {
    let already_active = *active_flags.get(clicked)?;
    if already_active || !target_present {
        return None;
    }
    let deactivate = active_flags
        .iter()
        .enumerate()
        .filter_map(|(i, active)| active.then_some(i))
        .collect();
    Some(Handoff { deactivate, activate: clicked })
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlImageElement, HtmlSourceElement};

    use super::{ImageSources, SourceUpdate, plan_handoff};
    use crate::config::ThumbnailConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    /// The `<img>` whose id the thumbnail names.
    fn target_image(document: &Document, thumb: &Element, config: &ThumbnailConfig) -> Option<HtmlImageElement> {
        let id = thumb.get_attribute(&config.target_attr)?;
        document.get_element_by_id(&id)?.dyn_ref::<HtmlImageElement>().cloned()
    }

    fn sibling_source(image: &HtmlImageElement) -> Result<Option<HtmlSourceElement>, BehaviorError> {
        let Some(parent) = image.parent_element() else {
            return Ok(None);
        };
        Ok(parent
            .query_selector("source")?
            .and_then(|el| el.dyn_ref::<HtmlSourceElement>().cloned()))
    }

    fn swap_sources(image: &HtmlImageElement, sources: &ImageSources) -> Result<(), BehaviorError> {
        if let Some(source) = sibling_source(image)? {
            match sources.source_update() {
                SourceUpdate::Set(srcset) => source.set_srcset(srcset),
                SourceUpdate::Clear => source.remove_attribute("srcset")?,
            }
        }
        image.set_src(&sources.fallback);
        dom::set_style(image, "opacity", "1")
    }

    fn activate(document: &Document, thumb: &Element, config: &Rc<ThumbnailConfig>) -> Result<(), BehaviorError> {
        let group = match thumb.closest(&config.container_selector)? {
            Some(container) => dom::query_all_in(&container, &config.thumb_selector)?,
            None => dom::query_all(document, &config.thumb_selector)?,
        };
        let Some(clicked) = dom::index_of(&group, thumb) else {
            return Ok(());
        };
        let flags = group
            .iter()
            .map(|el| dom::has_class(el, &config.active_class))
            .collect::<Vec<_>>();
        let image = target_image(document, thumb, config);
        let Some(handoff) = plan_handoff(&flags, clicked, image.is_some()) else {
            return Ok(());
        };
        let Some(image) = image else {
            return Ok(());
        };
        let sources = ImageSources::from_attributes(
            thumb.get_attribute(&config.responsive_attr),
            thumb.get_attribute(&config.fallback_attr),
        )
        .ok_or_else(|| BehaviorError::missing(&config.fallback_attr))?;

        dom::set_style(&image, "opacity", "0")?;
        dom::after(config.fade_ms, move || report("thumbnails", swap_sources(&image, &sources)));

        for i in handoff.deactivate {
            if let Some(el) = group.get(i) {
                dom::set_class(el, &config.active_class, false)?;
            }
        }
        dom::set_class(thumb, &config.active_class, true)
    }

    pub fn mount(document: &Document, config: &ThumbnailConfig) -> Result<(), BehaviorError> {
        let thumbs = dom::require_all(document, &config.thumb_selector)?;
        let config = Rc::new(config.clone());
        for thumb in thumbs {
            let document = document.clone();
            let config = Rc::clone(&config);
            let target = thumb.clone();
            dom::listen(&target, "click", move |_| {
                report("thumbnails", activate(&document, &thumb, &config));
            })?;
        }
        Ok(())
    }
}
