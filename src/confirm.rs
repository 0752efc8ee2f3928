//! Confirmation before delete actions.
//!
//! Asking the user is a synchronous capability: anything that can answer a
//! yes/no question implements [`Confirm`]. Closures implement it directly,
//! which keeps tests deterministic, and [`TerminalConfirm`] asks on a
//! line-oriented terminal.
//!
//! ```rust
//! use product_table::confirm::{Activation, DeleteAction, DeleteGuard};
//!
//! let guard = DeleteGuard::new();
//! let action = DeleteAction { row: 0, key: Some("7".into()), name: "Apple".into() };
//!
//! let mut decline = |_: &str| false;
//! assert_eq!(guard.activate(&mut decline, action.clone()), Activation::Cancelled);
//!
//! let mut accept = |_: &str| true;
//! assert_eq!(guard.activate(&mut accept, action.clone()), Activation::Proceed(action));
//! ```

use crate::config::DELETE_PROMPT;
use std::io::{BufRead, Write};
use tracing::info;

/// Answers a yes/no question, blocking until it has an answer.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// A pending delete on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAction {
    /// Index of the row in the full row set.
    pub row: usize,
    /// Record identifier, when the row carries one.
    pub key: Option<String>,
    /// Product name shown in the row.
    pub name: String,
}

/// Outcome of activating a delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Confirmed; the action goes ahead unmodified.
    Proceed(DeleteAction),
    /// Declined; the default behavior is prevented.
    Cancelled,
}

/// Puts a confirmation prompt in front of delete actions.
#[derive(Debug, Clone)]
pub struct DeleteGuard {
    prompt: String,
}

impl Default for DeleteGuard {
    fn default() -> Self {
        Self {
            prompt: DELETE_PROMPT.to_string(),
        }
    }
}

impl DeleteGuard {
    /// A guard asking the default delete question.
    pub fn new() -> Self {
        Self::default()
    }

    /// A guard asking `prompt` instead.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// The question asked before a delete.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Asks `confirm` and lets the action through only on a yes.
    pub fn activate<C: Confirm + ?Sized>(&self, confirm: &mut C, action: DeleteAction) -> Activation {
        if confirm.confirm(&self.prompt) {
            info!(row = action.row, key = ?action.key, "delete confirmed");
            Activation::Proceed(action)
        } else {
            info!(row = action.row, key = ?action.key, "delete cancelled");
            Activation::Cancelled
        }
    }
}

/// Prompts on `output` and reads the answer from `input`.
///
/// `y` or `yes` (any case) accepts; anything else, including end of input or
/// a read error, declines.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{message} [y/N] ")
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}
