//! Read-only view of the pager's position for other controllers.
//!
//! The pager owns a [`SectionCursor`] and is the only writer. The carousel is
//! handed a [`SectionWatch`] at construction and can ask whether the page is
//! on the home section, without reaching into the pager.

use std::cell::Cell;
use std::rc::Rc;

/// Writable handle on the active section index, held by the pager.
#[derive(Debug, Default)]
pub struct SectionCursor {
    index: Rc<Cell<usize>>,
}

impl SectionCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.index.get()
    }

    pub fn set(&self, index: usize) {
        self.index.set(index);
    }

    /// Creates a read-only handle observing this cursor.
    #[must_use]
    pub fn watch(&self) -> SectionWatch {
        SectionWatch {
            index: Rc::clone(&self.index),
        }
    }
}

/// Read-only handle on the active section index.
#[derive(Debug, Clone)]
pub struct SectionWatch {
    index: Rc<Cell<usize>>,
}

impl SectionWatch {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Whether the page currently rests on the home section (index 0).
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.index.get() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_follows_cursor_writes() {
        let cursor = SectionCursor::new();
        let watch = cursor.watch();
        assert!(watch.is_home());

        cursor.set(2);
        assert_eq!(watch.index(), 2);
        assert!(!watch.is_home());
    }
}
