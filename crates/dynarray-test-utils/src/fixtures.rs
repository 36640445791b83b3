//! Element fixtures that make copying observable.

use std::cell::Cell;
use std::rc::Rc;

/// Shared clone counter handed out to every [`Tracked`] value it creates.
#[derive(Clone, Debug, Default)]
pub struct CloneCounter {
    clones: Rc<Cell<usize>>,
}

impl CloneCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that cloning it bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            clones: Rc::clone(&self.clones),
        }
    }

    /// Total clones performed by values from this counter.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }
}

/// A value whose clones are counted by its originating [`CloneCounter`].
///
/// Moves are free and uncounted, so a container operation that only
/// relocates elements leaves the counter untouched.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    clones: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            value: self.value.clone(),
            clones: Rc::clone(&self.clones),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
