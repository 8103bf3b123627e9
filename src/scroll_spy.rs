//! Scroll-spy navigation highlighting.
//!
//! One instance per page family (policy pages, attraction pages). Sections
//! are matched to links by `href` fragment == section `id`. When several
//! sections intersect in one batch, the topmost one wins (smallest rect top,
//! then document order), independent of host delivery order.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// One intersection entry, reduced to what the spy needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionHit {
    /// Section position in document order.
    pub index: usize,
    pub is_intersecting: bool,
    /// Bounding rect top in viewport pixels.
    pub top: f64,
}

/// The part of `href` after `#`, if non-empty.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    let (_, frag) = href.split_once('#')?;
    if frag.is_empty() { None } else { Some(frag) }
}

/// Topmost intersecting section of a batch.
#[must_use]
pub fn pick_active(hits: &[SectionHit]) -> Option<usize> {
    hits.iter()
        .filter(|hit| hit.is_intersecting)
        .min_by(|a, b| a.top.total_cmp(&b.top).then(a.index.cmp(&b.index)))
        .map(|hit| hit.index)
}

/// Observer root margin that puts the active boundary just below the
/// sticky chrome (`offset_px`) and ignores the lower `bottom_pct` of the
/// viewport.
#[must_use]
pub fn root_margin(offset_px: f64, bottom_pct: f64) -> String {
    let top = offset_px.max(0.0).round();
    let bottom = bottom_pct.clamp(0.0, 100.0);
    format!("-{top}px 0px -{bottom}% 0px")
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    section_ids: Vec<String>,
    link_targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Build from section ids and raw link `href`s, both in document order.
    pub fn new(section_ids: Vec<String>, link_hrefs: &[String]) -> Self {
        let link_targets = link_hrefs
            .iter()
            .map(|href| fragment(href).map(str::to_owned))
            .collect();
        Self { section_ids, link_targets, active: None }
    }

    /// Apply one callback batch. Returns the active section id when it changed.
    ///
    /// A batch with no intersecting section keeps the current highlight.
    pub fn handle_batch(&mut self, hits: &[SectionHit]) -> Option<&str> {
        let next = pick_active(hits).filter(|i| *i < self.section_ids.len())?;
        if self.active == Some(next) {
            return None;
        }
        self.active = Some(next);
        self.section_ids.get(next).map(String::as_str)
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.section_ids.get(i))
            .map(String::as_str)
    }

    /// Active flag per link, in link order.
    #[must_use]
    pub fn link_states(&self) -> Vec<bool> {
        let active = self.active_section();
        self.link_targets
            .iter()
            .map(|target| target.is_some() && target.as_deref() == active)
            .collect()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, HtmlElement};
    use wasm_bindgen::JsCast;

    use super::{ScrollSpy, SectionHit, root_margin};
    use crate::config::SpyConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    /// Combined height of the sticky chrome above the sections.
    fn chrome_offset(document: &Document, config: &SpyConfig) -> Result<f64, BehaviorError> {
        let mut offset = config.extra_offset_px;
        for selector in &config.offset_selectors {
            if let Some(el) = document.query_selector(selector)? {
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    offset += f64::from(html.offset_height());
                }
            }
        }
        Ok(offset)
    }

    fn render(links: &[Element], spy: &ScrollSpy, class: &str) -> Result<(), BehaviorError> {
        for (link, active) in links.iter().zip(spy.link_states()) {
            dom::set_class(link, class, active)?;
        }
        Ok(())
    }

    pub fn mount(document: &Document, config: &SpyConfig) -> Result<(), BehaviorError> {
        let sections = dom::require_all(document, &config.section_selector)?;
        let links = dom::require_all(document, &config.link_selector)?;

        let ids = sections.iter().map(Element::id).collect::<Vec<_>>();
        let hrefs = links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect::<Vec<_>>();
        let spy = Rc::new(RefCell::new(ScrollSpy::new(ids, &hrefs)));

        let margin = root_margin(chrome_offset(document, config)?, config.bottom_margin_pct);
        log::debug!("scroll-spy {}: root margin {margin}", config.name);

        let name = config.name.clone();
        let class = config.active_class.clone();
        let targets = sections.clone();
        dom::observe_intersections(&targets, &margin, config.threshold, move |entries, _| {
            let hits = entries
                .iter()
                .filter_map(|entry| {
                    let index = dom::index_of(&sections, &entry.target())?;
                    Some(SectionHit {
                        index,
                        is_intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top(),
                    })
                })
                .collect::<Vec<_>>();
            let mut spy = spy.borrow_mut();
            if let Some(id) = spy.handle_batch(&hits) {
                log::debug!("scroll-spy {name}: active #{id}");
                report("scroll-spy", render(&links, &spy, &class));
            }
        })?;
        Ok(())
    }
}
