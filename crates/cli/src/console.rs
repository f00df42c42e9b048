//! Blocking console prompts and notification rendering.
//!
//! This is the CLI's implementation of the prompt surface the stores
//! expect: `confirm` blocks on stdin, `alert` and notifications print to
//! stdout.

use std::io::{self, BufRead, Write};

use stumarcot_storefront::{Notification, UserPrompt};

/// Interactive prompt reading confirmations from stdin.
pub struct ConsolePrompt;

impl UserPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }
}

/// Prompt that answers yes to everything, for `--yes` runs.
pub struct AutoConfirm;

impl UserPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }
}

/// Print a transient notification.
pub fn show_notification(notification: &Notification) {
    println!("[{}] {}", notification.level, notification.message);
}
