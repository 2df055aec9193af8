//! Prompting capability used by the setup wizard.

use std::io::{BufRead, Write};

use async_trait::async_trait;

use crate::error::{Error, Result};

/// One line-of-text request.
#[derive(Debug, Clone, Default)]
pub struct TextPrompt {
    pub message: String,
    pub placeholder: Option<String>,
    pub initial_value: Option<String>,
    /// Known values offered for completion (e.g. existing account ids).
    pub suggestions: Vec<String>,
}

impl TextPrompt {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial_value = Some(initial.into());
        self
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

/// Interactive I/O seam for the wizard.
///
/// `text` never resolves to blank input: implementations re-ask (with a
/// "Required" notice) until the user submits something or cancels.
/// Cancellation surfaces as [`Error::Cancelled`] and is never handled by
/// callers in this crate.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask for one line of text. Suspends until input arrives.
    async fn text(&self, prompt: TextPrompt) -> Result<String>;

    /// Display a non-blocking notice under the given label.
    async fn note(&self, message: &str, label: &str);
}

/// Blocking stdin/stdout prompter for terminal wizards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn text(&self, prompt: TextPrompt) -> Result<String> {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut stdout = std::io::stdout();
        read_prompt(&mut reader, &mut stdout, &prompt)
    }

    async fn note(&self, message: &str, label: &str) {
        println!("[{label}] {message}");
    }
}

/// Prompt driver, generic over streams so tests can script it.
///
/// Blank submissions fall back to the initial value when one is set and
/// re-ask otherwise; end of input cancels.
fn read_prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &TextPrompt,
) -> Result<String> {
    loop {
        match (&prompt.initial_value, &prompt.placeholder) {
            (Some(initial), _) if !initial.trim().is_empty() => {
                write!(writer, "{} [{initial}]: ", prompt.message)?;
            },
            (_, Some(placeholder)) => write!(writer, "{} ({placeholder}): ", prompt.message)?,
            _ => write!(writer, "{}: ", prompt.message)?,
        }
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        if let Some(initial) = prompt.initial_value.as_deref() {
            let fallback = initial.trim();
            if !fallback.is_empty() {
                return Ok(fallback.to_string());
            }
        }
        writeln!(writer, "Required.")?;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn returns_trimmed_line() {
        let mut input = Cursor::new("  alice  \n");
        let mut output = Vec::new();
        let value = read_prompt(&mut input, &mut output, &TextPrompt::new("Who")).unwrap();
        assert_eq!(value, "alice");
        assert!(String::from_utf8(output).unwrap().starts_with("Who: "));
    }

    #[test]
    fn blank_reasks_until_nonempty() {
        let mut input = Cursor::new("\n\nbob\n");
        let mut output = Vec::new();
        let value = read_prompt(&mut input, &mut output, &TextPrompt::new("Who")).unwrap();
        assert_eq!(value, "bob");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Required.").count(), 2);
    }

    #[test]
    fn blank_falls_back_to_initial() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        let prompt = TextPrompt::new("Who").with_initial("carol");
        let value = read_prompt(&mut input, &mut output, &prompt).unwrap();
        assert_eq!(value, "carol");
        assert!(String::from_utf8(output).unwrap().contains("[carol]"));
    }

    #[test]
    fn eof_cancels() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result = read_prompt(&mut input, &mut output, &TextPrompt::new("Who"));
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn placeholder_shown_without_initial() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        let prompt = TextPrompt::new("Allow").with_placeholder("+1555, @alice");
        read_prompt(&mut input, &mut output, &prompt).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("(+1555, @alice)"));
    }
}
