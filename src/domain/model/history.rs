/// Once the list grows past this many entries it is trimmed back.
const TRIM_THRESHOLD: usize = 110;

/// Number of most-recent entries kept when trimming.
const TRIM_TARGET: usize = 100;

/// Previously submitted lines, most recent last.
///
/// Entries are unique (re-adding a line moves it to the end) and the
/// list is bounded: past [`TRIM_THRESHOLD`] entries it is trimmed to the
/// newest [`TRIM_TARGET`].
///
/// A transient search cursor (prefix, preserved suffix, last match
/// index) lives here too; it is activated when the user starts walking
/// history and must be reset as soon as editing resumes.
#[derive(Debug, Default)]
pub struct History {
    list: Vec<String>,
    index: Option<usize>,
    prefix: Option<String>,
    suffix: String,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the search cursor. Called for every key that is not up/down.
    pub fn reset(&mut self) {
        self.index = None;
        self.prefix = None;
        self.suffix.clear();
    }

    /// Begin a search: `prefix` is the text left of the cursor, `suffix`
    /// the text right of it, restored verbatim when the search misses.
    pub fn activate(&mut self, prefix: String, suffix: String) {
        self.prefix = Some(prefix);
        self.suffix = suffix;
    }

    pub fn is_active(&self) -> bool {
        self.prefix.is_some()
    }

    /// Record a submitted line.
    pub fn add(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if let Some(pos) = self.list.iter().position(|l| l == line) {
            self.list.remove(pos);
        }
        self.list.push(line.to_string());
        if self.list.len() > TRIM_THRESHOLD {
            let excess = self.list.len() - TRIM_TARGET;
            self.list.drain(..excess);
        }
    }

    /// Next older entry matching the prefix.
    pub fn up(&mut self) -> String {
        self.search(-1)
    }

    /// Next newer entry matching the prefix.
    pub fn down(&mut self) -> String {
        self.search(1)
    }

    /// Walk the list from the last match (or one past the end) in `step`
    /// direction; the first entry starting with the prefix wins. On
    /// exhaustion the cursor resets to no-match and the original
    /// unmodified input (`prefix + suffix`) is returned.
    fn search(&mut self, step: isize) -> String {
        let needle = self.prefix.clone().unwrap_or_default();
        let len = self.list.len() as isize;

        // An index of `len` is the out-of-scope starting point.
        let mut i = self.index.map(|i| i as isize).unwrap_or(len);
        i = (i + step).min(len);
        if i < 0 {
            i = len;
        }

        let mut found = None;
        while 0 <= i && i < len {
            if self.list[i as usize].starts_with(&needle) {
                found = Some(i as usize);
                break;
            }
            i += step;
        }

        match found {
            Some(idx) => {
                self.index = Some(idx);
                self.list[idx].clone()
            }
            None => {
                self.index = None;
                format!("{}{}", needle, self.suffix)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
