use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use unicode_width::UnicodeWidthStr;

use crate::domain::model::{Autocomplete, History, StatusLine};
use crate::domain::primitive::EditBuffer;
use crate::interface_adapter::port::{ByteSink, LineConsumer};
use crate::shared::error::AppError;

/// Prompt prefix drawn in bold before the edit line.
const PROMPT_PREFIX: &str = "termline> ";

/// Live-redrawing line-edit prompt with history and autocomplete.
///
/// Consumes key tokens from the input reader, mutates the edit buffer,
/// and redraws through the owned byte sink after every mutation. On
/// `enter` the concatenated line is pushed to history and handed to the
/// line consumer exactly once.
///
/// The handle is cheaply cloneable; all state — including the sink —
/// sits behind a single lock, so `on_key` from the reader thread and
/// `clear`/`write_prompt` from interceptor writers serialize. The code
/// never re-enters the lock.
#[derive(Clone)]
pub struct PromptController {
    state: Arc<Mutex<PromptState>>,
}

struct PromptState {
    sink: Box<dyn ByteSink>,
    buffer: EditBuffer,
    history: History,
    autocomplete: Autocomplete,
    status: StatusLine,
    consumer: Option<LineConsumer>,
    /// Helper lines drawn below the input on the last render.
    lines_below: usize,
}

impl PromptController {
    pub fn new(sink: Box<dyn ByteSink>, consumer: Option<LineConsumer>, loop_name: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(PromptState {
                sink,
                buffer: EditBuffer::new(),
                history: History::new(),
                autocomplete: Autocomplete::new(),
                status: StatusLine::new(loop_name),
                consumer,
                lines_below: 0,
            })),
        }
    }

    /// Draw the initial prompt block.
    pub fn draw(&self) -> Result<(), AppError> {
        self.state.lock().write_prompt().map_err(AppError::PromptIo)
    }

    /// Handle one decoded key token: update the edit state and redraw.
    pub fn on_key(&self, key: &str) -> Result<(), AppError> {
        let mut state = self.state.lock();
        let submitted = state.on_key(key).map_err(AppError::PromptIo)?;
        if let Some(line) = submitted
            && let Some(consumer) = state.consumer.as_mut()
            && let Err(err) = consumer(&line)
        {
            // The collaborator owns its failures; we only log them.
            log::error!("line consumer failed: {err:#}");
        }
        Ok(())
    }

    /// Erase the prompt block, leaving the cursor where program output
    /// should continue.
    pub fn clear(&self) -> Result<(), AppError> {
        self.state.lock().clear().map_err(AppError::PromptIo)
    }

    /// Redraw the prompt block at the current cursor position.
    pub fn write_prompt(&self) -> Result<(), AppError> {
        self.state.lock().write_prompt().map_err(AppError::PromptIo)
    }

    /// Show autocomplete candidates; up/down now move the selection.
    pub fn show_completions<I>(&self, names: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut state = self.state.lock();
        state.autocomplete.show(names);
        state.redraw().map_err(AppError::PromptIo)
    }

    /// Hide the candidate list; up/down fall back to history search.
    pub fn hide_completions(&self) -> Result<(), AppError> {
        let mut state = self.state.lock();
        state.autocomplete.hide();
        state.redraw().map_err(AppError::PromptIo)
    }

    /// Atomically {clear prompt, write external bytes, flush, redraw}.
    ///
    /// This is the interceptor path: holding the lock across the whole
    /// sequence makes the write atomic with respect to prompt redraws.
    pub fn write_through(&self, bufs: &[&[u8]]) -> io::Result<usize> {
        let mut state = self.state.lock();
        state.clear()?;
        let mut written = 0;
        for buf in bufs {
            state.sink.write_all(buf)?;
            written += buf.len();
        }
        // Flush before redrawing; the stream may be stderr.
        state.sink.flush()?;
        state.write_prompt()?;
        Ok(written)
    }

    /// Flush the underlying sink without touching the prompt.
    pub fn flush_sink(&self) -> io::Result<()> {
        self.state.lock().sink.flush()
    }

    /// Whether the underlying sink is attached to a terminal.
    pub fn sink_is_tty(&self) -> bool {
        self.state.lock().sink.is_tty()
    }
}

impl PromptState {
    /// Token state machine. Returns the submitted line on `enter`.
    fn on_key(&mut self, key: &str) -> io::Result<Option<String>> {
        // Any key other than up/down ends a history walk.
        if key != "up" && key != "down" {
            self.history.reset();
        }

        let mut submitted = None;
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.buffer.insert(ch),
            _ => match key {
                "backspace" => {
                    self.buffer.backspace();
                }
                "enter" => {
                    submitted = Some(self.submit()?);
                }
                "left" => {
                    self.buffer.move_left();
                }
                "right" => {
                    self.buffer.move_right();
                }
                "up" => {
                    if self.autocomplete.is_active() {
                        self.autocomplete.up();
                    } else {
                        if !self.history.is_active() {
                            let suffix = self.buffer.take_after();
                            self.history.activate(self.buffer.before().to_string(), suffix);
                        }
                        let line = self.history.up();
                        self.buffer.set_before(line);
                    }
                }
                "down" => {
                    if self.autocomplete.is_active() {
                        self.autocomplete.down();
                    } else if self.history.is_active() {
                        let line = self.history.down();
                        self.buffer.set_before(line);
                    }
                }
                _ => {} // other named keys are ignored
            },
        }

        self.redraw()?;
        Ok(submitted)
    }

    /// Push the line to history, echo it into scrollback, and start a
    /// fresh buffer.
    fn submit(&mut self) -> io::Result<String> {
        let line = self.buffer.line();
        self.history.add(&line);
        self.history.reset();

        // Echo the submitted line above the fresh prompt: redraw with
        // the full line, then newline it into scrollback. The trailing
        // write_prompt re-saves the cursor below the echoed line, so
        // later clears start underneath it.
        self.buffer.set_line(line.clone());
        self.clear()?;
        self.write_prompt()?;
        self.write_str("\n")?;
        self.buffer = EditBuffer::new();
        self.write_prompt()?;
        Ok(line)
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.clear()?;
        self.write_prompt()
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.sink.write_all(text.as_bytes())
    }

    /// Draw the prompt block and reposition the cursor at the edit
    /// boundary.
    fn write_prompt(&mut self) -> io::Result<()> {
        // Save cursor position and style state.
        self.write_str("\x1b7")?;

        // Start on a fresh line; the last program write may not have
        // ended in a newline.
        self.write_str("\n")?;

        // Helper lines below the input: autocomplete viewport, then the
        // status line.
        let mut below = self.autocomplete.lines();
        below.extend(self.status.lines());
        for line in &below {
            self.write_str("\n")?;
            self.write_str(line)?;
        }
        self.lines_below = below.len();
        self.write_str(&format!("\x1b[{}F", below.len()))?;

        // Bold prefix, then the edit line.
        self.write_str("\x1b[1m")?;
        self.write_str(PROMPT_PREFIX)?;
        self.write_str("\x1b[0m")?;

        if !self.buffer.before().is_empty() {
            let before = self.buffer.before().to_string();
            self.write_str(&before)?;
        }
        if !self.buffer.after().is_empty() {
            let after = self.buffer.after().to_string();
            self.write_str(&after)?;
            // Move the cursor back to the edit boundary.
            self.write_str(&format!("\x1b[{}D", after.width()))?;
        }

        self.sink.flush()
    }

    /// Erase the prompt block with a non-destructive retrace: restore
    /// the saved cursor, wipe each drawn line moving down, move back
    /// up, and reset the style. Cheaper on flicker than erasing to the
    /// end of the screen.
    fn clear(&mut self) -> io::Result<()> {
        self.write_str("\x1b8")?;
        let rows = self.lines_below + 1;
        for _ in 0..rows {
            self.write_str("\x1b[1B\x1b[2K")?;
        }
        self.write_str(&format!("\x1b[{rows}A"))?;
        self.write_str("\x1b[0m")?;
        self.sink.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
