//! Input resolution for add/delete commands.
//!
//! A flag value always wins. A missing flag is prompted for only when the
//! session is interactive; otherwise it is reported as a missing field and
//! nothing is written.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::IsTerminal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required flag --{0}")]
    MissingFlag(&'static str),
    #[error("failed to read --{flag}: {source}")]
    Prompt {
        flag: &'static str,
        #[source]
        source: dialoguer::Error,
    },
}

pub struct Prompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl Prompter {
    /// Prompts only when `--no-input` is unset and stdin is a terminal.
    pub fn new(no_input: bool) -> Self {
        Self {
            interactive: !no_input && std::io::stdin().is_terminal(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Free-text field; an interactive answer may be empty.
    pub fn text(
        &self,
        value: Option<String>,
        flag: &'static str,
        prompt: &str,
    ) -> Result<String, InputError> {
        if let Some(value) = value {
            return Ok(value);
        }
        if !self.interactive {
            return Err(InputError::MissingFlag(flag));
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|source| InputError::Prompt { flag, source })
    }

    /// Typed field; the prompt repeats until the answer parses.
    pub fn value<T>(
        &self,
        value: Option<T>,
        flag: &'static str,
        prompt: &str,
    ) -> Result<T, InputError>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString,
    {
        if let Some(value) = value {
            return Ok(value);
        }
        if !self.interactive {
            return Err(InputError::MissingFlag(flag));
        }
        Input::<T>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(|source| InputError::Prompt { flag, source })
    }
}
