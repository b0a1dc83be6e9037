//! Synchronous user confirmation for destructive actions.

/// Asks the user to confirm an irreversible action.
pub trait Confirm {
    /// Returns `true` when the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
