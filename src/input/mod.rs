//! Interactive input source.
//!
//! Production code uses [`Input::real()`] which reads lines from stdin.
//! Tests (and any scripted use) construct [`Input::scripted()`] backed by a
//! fixed list of answers, so the key flows can be driven without a terminal.
//!
//! Every answer is returned with surrounding whitespace trimmed; no further
//! validation happens here.

use std::collections::VecDeque;
use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// A source of one-line text answers to interactive prompts.
pub struct Input {
    source: Source,
}

enum Source {
    Stdin(Lines<BufReader<Stdin>>),
    Scripted(VecDeque<String>),
}

impl Input {
    /// Create an `Input` that reads from the process's stdin.
    pub fn real() -> Self {
        Self {
            source: Source::Stdin(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Create an `Input` that replays a fixed sequence of answers.
    pub fn scripted(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            source: Source::Scripted(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Print `label` and read one trimmed line.
    ///
    /// A closed stdin or an exhausted script yields [`io::ErrorKind::UnexpectedEof`].
    pub async fn prompt(&mut self, label: &str) -> io::Result<String> {
        print!("{label}: ");
        io::stdout().flush()?;

        let line = match &mut self.source {
            Source::Stdin(lines) => lines
                .next_line()
                .await?
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))?,
            Source::Scripted(answers) => answers.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
            })?,
        };

        Ok(line.trim().to_string())
    }

    /// Prompt, substituting `default` when the answer is blank.
    pub async fn prompt_or(&mut self, label: &str, default: &str) -> io::Result<String> {
        let answer = self.prompt(label).await?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Prompt for a yes/no answer. Only a case-insensitive `y` counts as yes.
    pub async fn confirm(&mut self, label: &str) -> io::Result<bool> {
        Ok(self.prompt(label).await?.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_returns_trimmed_lines() {
        let mut input = Input::scripted(["  alpha  ", "\tbeta"]);
        assert_eq!(input.prompt("first").await.unwrap(), "alpha");
        assert_eq!(input.prompt("second").await.unwrap(), "beta");
    }

    #[tokio::test]
    async fn exhausted_script_is_unexpected_eof() {
        let mut input = Input::scripted(Vec::<String>::new());
        let err = input.prompt("anything").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn prompt_or_uses_default_for_blank() {
        let mut input = Input::scripted(["", "4096"]);
        assert_eq!(input.prompt_or("length", "2048").await.unwrap(), "2048");
        assert_eq!(input.prompt_or("length", "2048").await.unwrap(), "4096");
    }

    #[tokio::test]
    async fn prompt_or_treats_whitespace_as_blank() {
        let mut input = Input::scripted(["   "]);
        assert_eq!(input.prompt_or("length", "2048").await.unwrap(), "2048");
    }

    #[tokio::test]
    async fn confirm_accepts_only_y() {
        let mut input = Input::scripted(["y", "Y", " y ", "n", "yes", ""]);
        assert!(input.confirm("armored?").await.unwrap());
        assert!(input.confirm("armored?").await.unwrap());
        assert!(input.confirm("armored?").await.unwrap());
        assert!(!input.confirm("armored?").await.unwrap());
        assert!(!input.confirm("armored?").await.unwrap());
        assert!(!input.confirm("armored?").await.unwrap());
    }
}
