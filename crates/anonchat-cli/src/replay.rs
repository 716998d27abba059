//! Scripted conversations from line-oriented input.
//!
//! Each input line is typed into a [`Composer`] and submitted into one
//! [`Conversation`]. A literal `\n` inside a line becomes a newline in the
//! draft and `\\` stands for one backslash. Blank drafts are rejected by the
//! composer and counted.

use anonchat_core::{Composer, Conversation, Message, SequentialIds};
use serde::Serialize;
use std::io::BufRead;
use tracing::debug;

/// Result of replaying a script.
#[derive(Debug)]
pub struct Replay {
    pub conversation: Conversation,
    /// Input lines that the composer refused to send.
    pub rejected: usize,
}

#[derive(Serialize)]
struct ReplayJson<'a> {
    conversation: String,
    messages: &'a [Message],
    rejected: usize,
}

/// Translate `\n` into a newline and `\\` into a backslash. Any other
/// backslash is kept as is.
fn unescape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Replay every line of `input` into a fresh conversation.
pub fn replay(input: impl BufRead) -> std::io::Result<Replay> {
    let mut conversation = Conversation::with_id_source(SequentialIds::new());
    let mut composer = Composer::new();
    let mut rejected = 0;

    for (lineno, line) in input.lines().enumerate() {
        composer.update_draft(unescape(&line?));
        if !composer.submit(&mut conversation) {
            debug!(line = lineno + 1, "blank line rejected");
            rejected += 1;
            composer.clear();
        }
    }

    Ok(Replay {
        conversation,
        rejected,
    })
}

impl Replay {
    /// Human-readable transcript, one message per block.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for message in &self.conversation {
            let who = if message.sent { "you" } else { "them" };
            out.push_str(&format!("[{}] {who}: {}\n", message.id, message.text));
        }
        if self.rejected > 0 {
            out.push_str(&format!("({} blank line(s) not sent)\n", self.rejected));
        }
        out
    }

    /// JSON transcript.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReplayJson {
            conversation: self.conversation.id().to_string(),
            messages: self.conversation.messages(),
            rejected: self.rejected,
        })
    }
}
