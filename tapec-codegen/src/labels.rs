//! Label allocation for goto-based targets
//!
//! Labels are unique within one allocator, and each emitter call owns its
//! own allocator, so two compilations never share label state.

use std::fmt;

/// Symbolic jump target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(usize);

impl Label {
    pub fn id(self) -> usize {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Hands out fresh labels
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> Label {
        let label = Label(self.next);
        self.next += 1;
        label
    }

    /// Entry and exit labels for one loop
    pub fn loop_pair(&mut self) -> (Label, Label) {
        (self.fresh(), self.fresh())
    }
}
