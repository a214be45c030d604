//! Cell storage

use crate::error::{Result, RuntimeError};
use tapec_ir::TapeMode;

/// Initial allocation of a dynamic tape
const INITIAL_CELLS: usize = 1024;

/// Tape of wrapping 8-bit cells plus the data pointer
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    mode: TapeMode,
    pointer: usize,
}

impl Tape {
    /// Growable tape starting with zeroed cells
    pub fn dynamic() -> Self {
        Self {
            cells: vec![0; INITIAL_CELLS],
            mode: TapeMode::Dynamic,
            pointer: 0,
        }
    }

    /// Tape of exactly `size` cells
    pub fn fixed(size: usize) -> Self {
        Self {
            cells: vec![0; size],
            mode: TapeMode::Fixed,
            pointer: 0,
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Cells allocated so far
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value of the current cell
    pub fn get(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    pub fn increment(&mut self) {
        self.set(self.get().wrapping_add(1));
    }

    pub fn decrement(&mut self) {
        self.set(self.get().wrapping_sub(1));
    }

    /// Move one cell right, growing a dynamic tape as needed
    pub fn move_right(&mut self) -> Result<()> {
        let next = self.pointer + 1;
        if next >= self.cells.len() {
            match self.mode {
                TapeMode::Dynamic => self.cells.resize(self.cells.len() * 2, 0),
                TapeMode::Fixed => {
                    return Err(RuntimeError::PointerOutOfBounds {
                        position: next,
                        size: self.cells.len(),
                    })
                }
            }
        }
        self.pointer = next;
        Ok(())
    }

    /// Move one cell left; `false` if already at cell 0
    pub fn move_left(&mut self) -> bool {
        match self.pointer.checked_sub(1) {
            Some(prev) => {
                self.pointer = prev;
                true
            }
            None => false,
        }
    }
}
