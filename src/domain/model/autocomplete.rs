/// Fixed height of the autocomplete viewport, in rows.
pub const VIEWPORT_HEIGHT: usize = 7;

/// Autocomplete candidate list with a fixed-height viewport.
///
/// The visible window is centered on the selected index and clamped so
/// it never runs past either end of the list. A scrollbar thumb of size
/// `max(1, floor(V / ceil(N/V)))` is positioned proportionally to the
/// window's offset within `[0, N-V]`.
#[derive(Debug)]
pub struct Autocomplete {
    list: Vec<String>,
    index: Option<usize>,
    vspace: usize,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new()
    }
}

impl Autocomplete {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            index: None,
            vspace: VIEWPORT_HEIGHT,
        }
    }

    /// Whether a candidate list is currently shown. While active, the
    /// up/down keys move the selection instead of walking history.
    pub fn is_active(&self) -> bool {
        !self.list.is_empty()
    }

    /// Show a new candidate list, clearing the selection.
    pub fn show<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.list = names.into_iter().collect();
        self.index = None;
    }

    /// Drop the candidate list; the viewport renders empty rows.
    pub fn hide(&mut self) {
        self.list.clear();
        self.index = None;
    }

    /// Move the selection up, wrapping at the top.
    pub fn up(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let current = self.index.unwrap_or(0);
        self.index = Some(match current {
            0 => self.list.len() - 1,
            i => i - 1,
        });
    }

    /// Move the selection down, wrapping at the bottom.
    pub fn down(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let next = self.index.unwrap_or(0) + 1;
        self.index = Some(if next >= self.list.len() { 0 } else { next });
    }

    /// Render the viewport: always exactly [`VIEWPORT_HEIGHT`] lines,
    /// padded with empty ones when the list is shorter.
    pub fn lines(&self) -> Vec<String> {
        let n = self.list.len();
        if n == 0 {
            return vec![String::new(); self.vspace];
        }

        let ref_index = self.index.unwrap_or(0);
        let vspace = self.vspace.min(n);
        let nbefore = vspace / 2;
        let nafter = vspace - nbefore - 1;

        // Window first/last, centered on the selection and clamped.
        let highest_first = n - vspace;
        let mut first = ref_index as isize - nbefore as isize;
        let mut last = ref_index as isize + nafter as isize;
        if first < 0 {
            first = 0;
            last = vspace as isize - 1;
        } else if last >= n as isize {
            last = n as isize - 1;
            first = last - vspace as isize + 1;
        }
        let (first, last) = (first as usize, last as usize);

        // Scrollbar thumb: size per contract, positioned 0 at the top,
        // vspace-thumb at the bottom, proportional in between.
        let thumb = (vspace / n.div_ceil(vspace)).max(1);
        let thumb_first = if first == 0 {
            0
        } else if first == highest_first {
            vspace - thumb
        } else {
            let numerator = (vspace - thumb - 1) * first;
            numerator.div_ceil(highest_first)
        };

        let mut lines = Vec::with_capacity(self.vspace);
        for (row, index) in (first..=last).enumerate() {
            let mut line = String::new();
            if row >= thumb_first && row < thumb_first + thumb {
                line.push_str("\x1b[0m█ \x1b[0m");
            } else {
                line.push_str("\x1b[2m█ \x1b[0m");
            }
            line.push_str("\x1b[2m");
            if Some(index) == self.index {
                line.push_str("\x1b[4m");
            }
            line.push_str(&self.list[index]);
            line.push_str("\x1b[0m");
            lines.push(line);
        }
        while lines.len() < self.vspace {
            lines.push(String::new());
        }
        lines
    }
}

// =============================================================================
// Tests
// =============================================================================
