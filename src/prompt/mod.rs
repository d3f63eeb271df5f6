//! Interactive questions, injectable so command logic runs without a terminal.

use std::io::{self, BufRead, Result, Write};

pub trait Prompter {
    /// Yes/no question; anything but an explicit yes declines.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Free-form answer, trimmed.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from stdin.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = read_answer(&format!("{question} [y/N]: "))?;
        Ok(is_yes(&answer))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        read_answer(&format!("{question}: "))
    }
}

fn read_answer(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Replays canned answers and records every question asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Scripted {
    pub confirms: std::collections::VecDeque<bool>,
    pub answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl Scripted {
    pub fn confirming(answers: &[bool]) -> Self {
        Self { confirms: answers.iter().copied().collect(), ..Default::default() }
    }

    pub fn answering(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), ..Default::default() }
    }
}

#[cfg(test)]
impl Prompter for Scripted {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
