//! Integration tests for Stumarcot.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stumarcot-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full shopping flows through catalog, cart, and views
//! - `persistence` - Snapshot round-trips and failure-recovery behavior
//!
//! The crate root only carries shared test support: a scripted prompt
//! standing in for the blocking confirm/alert surface.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::{Cell, RefCell};

use stumarcot_storefront::UserPrompt;

/// Prompt fake with a preset confirmation answer and recorded alerts.
pub struct ScriptedPrompt {
    answer: bool,
    confirms: Cell<u32>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// A prompt that answers every confirmation with `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: Cell::new(0),
            alerts: RefCell::new(Vec::new()),
        }
    }

    /// How many confirmations were requested.
    #[must_use]
    pub fn confirms(&self) -> u32 {
        self.confirms.get()
    }

    /// Every alert shown so far, in order.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}
