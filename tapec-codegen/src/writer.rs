//! Indentation-aware line buffer shared by the emitters

/// Deepest indentation written by a free-form writer; deeper blocks are
/// emitted flush at this level so output stays linear in nesting depth
pub const MAX_INDENT: usize = 32;

/// Accumulates generated source one line at a time
#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    unit: &'static str,
    level: usize,
    max_level: usize,
    lines: usize,
}

impl CodeWriter {
    /// New writer indenting by `unit` per level, up to [`MAX_INDENT`] levels
    pub fn new(unit: &'static str) -> Self {
        Self {
            out: String::new(),
            unit,
            level: 0,
            max_level: MAX_INDENT,
            lines: 0,
        }
    }

    /// Writer for targets where indentation is syntax; never capped
    pub fn exact(unit: &'static str) -> Self {
        Self {
            max_level: usize::MAX,
            ..Self::new(unit)
        }
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.level.min(self.max_level) {
                self.out.push_str(self.unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self.lines += 1;
    }

    /// Write a multi-line block, each line at the current indentation
    pub fn lines(&mut self, block: &str) {
        for text in block.lines() {
            self.line(text);
        }
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Number of lines written so far
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn finish(self) -> String {
        self.out
    }
}
