//! Scroll-triggered reveal animations.
//!
//! Each observed element moves `Unseen -> Revealed` exactly once. In stagger
//! mode the observed element is a container and its immediate children are
//! revealed with an increasing delay instead.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Single,
    Stagger { step_ms: u32 },
}

/// What to do with one intersection entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Not intersecting, or already revealed.
    Ignore,
    /// Mark the element revealed and stop observing it.
    Reveal,
    /// Stop observing the container and reveal child `i` after `delays[i]` ms.
    /// `delays[i]` is the child's start time from the trigger, not an extra
    /// offset on top of another delay.
    Stagger(Vec<u32>),
}

/// Per-child delays for a staggered reveal.
#[must_use]
pub fn stagger_delays(child_count: usize, step_ms: u32) -> Vec<u32> {
    (0..child_count)
        .map(|i| u32::try_from(i).map_or(u32::MAX, |i| i.saturating_mul(step_ms)))
        .collect()
}

/// Reveal state for every element of one observed group.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    mode: RevealMode,
}

impl RevealTracker {
    pub fn new(count: usize, mode: RevealMode) -> Self {
        Self { states: vec![RevealState::Unseen; count], mode }
    }

    /// Feed one intersection entry for element `index`.
    ///
    /// `child_count` is only consulted in stagger mode.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, child_count: usize) -> RevealStep {
        let Some(state) = self.states.get_mut(index) else {
            return RevealStep::Ignore;
        };
        if !is_intersecting || *state == RevealState::Revealed {
            return RevealStep::Ignore;
        }
        *state = RevealState::Revealed;
        match self.mode {
            RevealMode::Single => RevealStep::Reveal,
            RevealMode::Stagger { step_ms } => RevealStep::Stagger(stagger_delays(child_count, step_ms)),
        }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    /// Every element has been revealed; the observer can be dropped.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed_count() == self.states.len()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::{RevealMode, RevealStep, RevealTracker};
    use crate::config::RevealGroup;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    fn children(container: &Element) -> Vec<Element> {
        let list = container.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    /// The timer is the only offset; the stylesheet's own transition starts
    /// when the class lands.
    fn reveal_children(children: Vec<Element>, delays: &[u32], class: &str) {
        for (child, delay) in children.into_iter().zip(delays.iter().copied()) {
            let class = class.to_owned();
            dom::after(delay, move || report("reveal", dom::set_class(&child, &class, true)));
        }
    }

    pub fn mount(document: &Document, group: &RevealGroup) -> Result<(), BehaviorError> {
        let elements = dom::require_all(document, &group.selector)?;
        let mode = match group.stagger_ms {
            Some(step_ms) => RevealMode::Stagger { step_ms },
            None => RevealMode::Single,
        };
        let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len(), mode)));
        let targets = elements.clone();
        let class = group.visible_class.clone();

        dom::observe_intersections(&targets, &group.root_margin, group.threshold, move |entries, observer| {
            for entry in entries {
                let target = entry.target();
                let Some(index) = dom::index_of(&elements, &target) else {
                    continue;
                };
                let kids = children(&target);
                let step = tracker
                    .borrow_mut()
                    .observe(index, entry.is_intersecting(), kids.len());
                match step {
                    RevealStep::Ignore => {}
                    RevealStep::Reveal => {
                        observer.unobserve(&target);
                        report("reveal", dom::set_class(&target, &class, true));
                    }
                    RevealStep::Stagger(delays) => {
                        observer.unobserve(&target);
                        reveal_children(kids, &delays, &class);
                    }
                }
            }
            if tracker.borrow().is_done() {
                observer.disconnect();
            }
        })?;
        Ok(())
    }
}
