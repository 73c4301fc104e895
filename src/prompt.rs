//! Numbered program menu on the terminal.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::host::Chooser;

/// [`Chooser`] that prints a numbered menu to stderr and reads the answer
/// from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptChooser;

impl Chooser for PromptChooser {
    fn choose(&self, prompt: &str, labels: &[&str]) -> Result<Option<usize>> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stderr();
        choose_from(&mut input, &mut output, prompt, labels)
    }
}

/// Menu logic behind [`PromptChooser`].
///
/// An empty answer picks the first label, `0`, end of input or anything
/// unparsable dismisses the menu.
pub fn choose_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    labels: &[&str],
) -> Result<Option<usize>> {
    if labels.is_empty() {
        return Ok(None);
    }

    writeln!(output, "\n{prompt}:")?;
    for (i, label) in labels.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, label)?;
    }
    writeln!(output, "  0. Cancel")?;
    write!(output, "Choice [1]: ")?;
    output.flush().ok();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();

    let choice: usize = if trimmed.is_empty() {
        1
    } else {
        trimmed.parse().unwrap_or(0)
    };

    if choice == 0 || choice > labels.len() {
        if !trimmed.is_empty() && trimmed != "0" {
            writeln!(output, "Invalid choice, nothing opened.")?;
        }
        return Ok(None);
    }
    Ok(Some(choice - 1))
}
