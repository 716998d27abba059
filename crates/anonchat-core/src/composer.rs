//! Message composer: owns the draft of one outgoing message.
//!
//! The composer hands finished text to a [`SendHandler`]. A submission is
//! accepted only when the draft is non-blank after trimming; the handler then
//! receives the draft exactly as typed, surrounding whitespace included.

use tracing::trace;

/// Receiver of submitted drafts.
pub trait SendHandler {
    /// Called at most once per successful submission with the untrimmed text.
    fn on_send(&mut self, text: String);
}

impl<F> SendHandler for F
where
    F: FnMut(String),
{
    fn on_send(&mut self, text: String) {
        self(text);
    }
}

/// A key press as seen by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// The confirm key. With `extend` it inserts a line break instead of
    /// submitting.
    Confirm { extend: bool },
    /// A printable character.
    Char(char),
    /// Pasted text.
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Draft state plus cursor for one outgoing message.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    /// Cursor position as a character index into `draft`.
    cursor: usize,
    disabled: bool,
}

impl Composer {
    /// Create an empty, enabled composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the draft is empty.
    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable input. While disabled every editing and submit
    /// operation is inert.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a submit would currently be accepted.
    pub fn can_send(&self) -> bool {
        !self.disabled && !self.draft.trim().is_empty()
    }

    /// Replace the draft unconditionally. The cursor moves to the end.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        if self.disabled {
            return;
        }
        self.draft = text.into();
        self.cursor = self.char_len();
    }

    /// Clear the draft.
    pub fn clear(&mut self) {
        self.update_draft(String::new());
    }

    /// Submit the draft to `handler`.
    ///
    /// Returns `true` when the handler was invoked. A blank draft is left
    /// untouched and the handler is not called.
    pub fn submit<H>(&mut self, handler: &mut H) -> bool
    where
        H: SendHandler + ?Sized,
    {
        if !self.can_send() {
            trace!(disabled = self.disabled, "submit ignored");
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.cursor = 0;
        handler.on_send(text);
        true
    }

    /// Apply a key press. Returns `true` when it caused a submission.
    pub fn press<H>(&mut self, key: Keystroke, handler: &mut H) -> bool
    where
        H: SendHandler + ?Sized,
    {
        if self.disabled {
            return false;
        }

        match key {
            Keystroke::Confirm { extend: false } => return self.submit(handler),
            Keystroke::Confirm { extend: true } => self.insert('\n'),
            Keystroke::Char(c) => self.insert(c),
            Keystroke::Paste(text) => self.insert_str(&text),
            Keystroke::Backspace => self.backspace(),
            Keystroke::Delete => self.delete(),
            Keystroke::Left => self.cursor = self.cursor.saturating_sub(1),
            Keystroke::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            Keystroke::Home => self.cursor = 0,
            Keystroke::End => self.cursor = self.char_len(),
        }
        false
    }

    /// Number of lines the draft occupies.
    pub fn line_count(&self) -> usize {
        self.draft.split('\n').count()
    }

    /// Line and column (both zero based, column in characters) of the cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.draft.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count());
        (line, col)
    }

    fn char_len(&self) -> usize {
        self.draft.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_idx)
            .map_or(self.draft.len(), |(i, _)| i)
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.draft.insert(at, ch);
        self.cursor += 1;
    }

    fn insert_str(&mut self, s: &str) {
        // Terminals deliver pasted line breaks as CR or CRLF.
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index(self.cursor);
        self.draft.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.draft.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.draft.remove(at);
        }
    }
}
