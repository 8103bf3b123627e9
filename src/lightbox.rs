//! Circular single-image lightbox cursor.
//!
//! The lightbox holds a list of visible gallery item indices and a cursor
//! into it. The gallery hands it a freshly computed list on open and on
//! every navigation, so a filter change behind an open lightbox is picked
//! up. Navigation wraps in both directions; every operation on an empty
//! list is rejected.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// `(i + 1) mod len`, or `None` for an empty list.
#[must_use]
pub fn next_index(i: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((i % len + 1) % len)
}

/// `(i - 1 + len) mod len`, or `None` for an empty list.
#[must_use]
pub fn prev_index(i: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((i % len + len - 1) % len)
}

/// Commands the lightbox accepts from keys and controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Prev,
    Next,
    Close,
}

impl LightboxCommand {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// What the view must do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxUpdate {
    /// Show gallery item `n`.
    Show(usize),
    Closed,
}

#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    slots: Vec<usize>,
    cursor: usize,
    active: bool,
}

impl Lightbox {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Gallery item index under the cursor while open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.slots.get(self.cursor).copied()
    }

    /// Open on `item`, given the freshly computed visible item list.
    ///
    /// Rejected when `item` is not among `visible`.
    pub fn open(&mut self, visible: Vec<usize>, item: usize) -> Option<usize> {
        let cursor = visible.iter().position(|i| *i == item)?;
        self.slots = visible;
        self.cursor = cursor;
        self.active = true;
        Some(item)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(next_index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.step(prev_index)
    }

    fn step(&mut self, advance: fn(usize, usize) -> Option<usize>) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.cursor = advance(self.cursor, self.slots.len())?;
        self.current()
    }

    /// Close. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Apply a command against a freshly computed visible list, which
    /// replaces the one captured earlier.
    ///
    /// When the shown item has since been filtered out, prev/next land on
    /// its nearest visible neighbour in document order. Inert while closed.
    pub fn apply_over(&mut self, visible: Vec<usize>, command: LightboxCommand) -> Option<LightboxUpdate> {
        let forward = match command {
            LightboxCommand::Close => return self.apply(command),
            LightboxCommand::Next => true,
            LightboxCommand::Prev => false,
        };
        let shown = self.current()?;
        let len = visible.len();
        if len == 0 {
            return None;
        }
        let cursor = match visible.iter().position(|i| *i == shown) {
            Some(pos) if forward => next_index(pos, len)?,
            Some(pos) => prev_index(pos, len)?,
            None => {
                let before = visible.iter().take_while(|i| **i < shown).count();
                if forward { before % len } else { prev_index(before, len)? }
            }
        };
        self.slots = visible;
        self.cursor = cursor;
        self.current().map(LightboxUpdate::Show)
    }

    /// Apply a command over the current list. Inert while closed.
    pub fn apply(&mut self, command: LightboxCommand) -> Option<LightboxUpdate> {
        if !self.active {
            return None;
        }
        match command {
            LightboxCommand::Prev => self.prev().map(LightboxUpdate::Show),
            LightboxCommand::Next => self.next().map(LightboxUpdate::Show),
            LightboxCommand::Close => self.close().then_some(LightboxUpdate::Closed),
        }
    }
}
