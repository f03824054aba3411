/// Estimated terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl TermSize {
    /// Conventional fallback when the real size cannot be queried.
    pub const FALLBACK: TermSize = TermSize { cols: 80, rows: 24 };

    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}
