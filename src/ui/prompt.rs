//! Interactive prompts for missing connection parameters

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::{AviError, Result};

/// Trait for interactive input, allowing canned sequences in tests
///
/// Callers own the retry semantics (empty answers are returned as-is), so a
/// test can verify exactly how many prompts a resolution step issues.
pub trait Prompter {
    /// Plain text prompt
    fn text(&self, prompt: &str) -> Result<String>;

    /// Masked prompt for secrets
    fn password(&self, prompt: &str) -> Result<String>;
}

/// Real prompter backed by the terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AviError::Prompt(e.to_string()))
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| AviError::Prompt(e.to_string()))
    }
}

/// Prompter replaying a fixed sequence of answers
#[cfg(test)]
pub struct ScriptedPrompter {
    responses: std::cell::RefCell<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: std::cell::RefCell::new(
                responses.iter().map(|r| r.to_string()).collect(),
            ),
        }
    }

    fn next_response(&self) -> Result<String> {
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AviError::Prompt("no scripted response left".to_string()))
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn text(&self, _prompt: &str) -> Result<String> {
        self.next_response()
    }

    fn password(&self, _prompt: &str) -> Result<String> {
        self.next_response()
    }
}
