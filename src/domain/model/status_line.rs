/// The inverse-video status row rendered below the autocomplete
/// viewport, naming the build and the loop backend currently driving
/// deferred work.
#[derive(Debug)]
pub struct StatusLine {
    build: String,
    loop_name: String,
}

impl StatusLine {
    pub fn new(loop_name: &str) -> Self {
        Self {
            build: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            loop_name: loop_name.to_string(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let text = format!(" {} on {:<10}", self.build, self.loop_name);
        vec![format!("\x1b[0;37;44m{text:<80}\x1b[0m")]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_padded_inverse_line() {
        let status = StatusLine::new("poll-loop");
        let lines = status.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("\x1b[0;37;44m"));
        assert!(lines[0].ends_with("\x1b[0m"));
        assert!(lines[0].contains("termline"));
        assert!(lines[0].contains("poll-loop"));
        // Padded to the conventional 80 columns.
        let body = lines[0]
            .trim_start_matches("\x1b[0;37;44m")
            .trim_end_matches("\x1b[0m");
        assert!(body.chars().count() >= 80);
    }
}
