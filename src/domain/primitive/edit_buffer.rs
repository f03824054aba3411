/// The line being edited, split at the cursor.
///
/// `before` holds the text left of the cursor, `after` the text right of
/// it. `before + after` is always the full line and the cursor sits
/// exactly at the boundary.
#[derive(Debug, Default, Clone)]
pub struct EditBuffer {
    before: String,
    after: String,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    /// The full line, cursor position ignored.
    pub fn line(&self) -> String {
        format!("{}{}", self.before, self.after)
    }

    /// Insert one character at the cursor.
    pub fn insert(&mut self, ch: char) {
        self.before.push(ch);
    }

    /// Delete the character left of the cursor. Returns false at the
    /// start of the line.
    pub fn backspace(&mut self) -> bool {
        self.before.pop().is_some()
    }

    /// Move the cursor one character left. Returns false at the start.
    pub fn move_left(&mut self) -> bool {
        match self.before.pop() {
            Some(ch) => {
                self.after.insert(0, ch);
                true
            }
            None => false,
        }
    }

    /// Move the cursor one character right. Returns false at the end.
    pub fn move_right(&mut self) -> bool {
        match self.after.chars().next() {
            Some(ch) => {
                self.after.drain(..ch.len_utf8());
                self.before.push(ch);
                true
            }
            None => false,
        }
    }

    /// Replace the text left of the cursor (history recall).
    pub fn set_before(&mut self, text: String) {
        self.before = text;
    }

    /// Take the text right of the cursor, leaving it empty.
    pub fn take_after(&mut self) -> String {
        std::mem::take(&mut self.after)
    }

    /// Replace the whole line, cursor at the end.
    pub fn set_line(&mut self, text: String) {
        self.before = text;
        self.after.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(before: &str, after: &str) -> EditBuffer {
        let mut buf = EditBuffer::new();
        buf.set_before(before.to_string());
        for ch in after.chars().rev() {
            buf.after.insert(0, ch);
        }
        buf
    }

    #[test]
    fn insert_appends_left_of_cursor() {
        let mut buf = buffer_with("ab", "cd");
        buf.insert('x');
        assert_eq!(buf.before(), "abx");
        assert_eq!(buf.after(), "cd");
        assert_eq!(buf.line(), "abxcd");
    }

    #[test]
    fn backspace_deletes_left_of_cursor() {
        let mut buf = buffer_with("ab", "cd");
        assert!(buf.backspace());
        assert_eq!(buf.line(), "acd");

        let mut empty = buffer_with("", "cd");
        assert!(!empty.backspace());
        assert_eq!(empty.line(), "cd");
    }

    #[test]
    fn cursor_moves_across_boundary() {
        let mut buf = buffer_with("ab", "cd");

        assert!(buf.move_left());
        assert_eq!((buf.before(), buf.after()), ("a", "bcd"));

        assert!(buf.move_right());
        assert!(buf.move_right());
        assert_eq!((buf.before(), buf.after()), ("abc", "d"));

        // Concatenation is preserved throughout.
        assert_eq!(buf.line(), "abcd");
    }

    #[test]
    fn cursor_moves_stop_at_the_ends() {
        let mut buf = buffer_with("", "x");
        assert!(!buf.move_left());
        assert!(buf.move_right());
        assert!(!buf.move_right());
        assert_eq!(buf.before(), "x");
    }

    #[test]
    fn multibyte_characters_move_whole() {
        let mut buf = buffer_with("é", "ü");
        assert!(buf.move_right());
        assert_eq!((buf.before(), buf.after()), ("éü", ""));
        assert!(buf.move_left());
        assert!(buf.move_left());
        assert_eq!((buf.before(), buf.after()), ("", "éü"));
    }

    #[test]
    fn set_line_places_cursor_at_end() {
        let mut buf = buffer_with("ab", "cd");
        buf.set_line("hello".to_string());
        assert_eq!(buf.before(), "hello");
        assert_eq!(buf.after(), "");
    }
}
