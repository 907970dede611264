//! Decides which unique field a storage constraint violation concerns.

/// Outcome of inspecting a constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The email uniqueness rule fired.
    DuplicateEmail,
    /// The phone uniqueness rule fired.
    DuplicatePhone,
    /// Some other integrity rule.
    Other,
}

/// Maps a storage engine's violation message to a [`ConstraintKind`].
pub trait ConstraintClassifier: Send + Sync + 'static {
    /// Classify the engine's raw message.
    fn classify(&self, message: &str) -> ConstraintKind;
}

/// Looks for the words `email` and `phone` in the engine message.
///
/// Relies on constraint names embedding the column name
/// (`customer_email_key`). Email is checked first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageSniffingClassifier;

impl ConstraintClassifier for MessageSniffingClassifier {
    fn classify(&self, message: &str) -> ConstraintKind {
        let message = message.to_lowercase();
        if message.contains("email") {
            ConstraintKind::DuplicateEmail
        } else if message.contains("phone") {
            ConstraintKind::DuplicatePhone
        } else {
            ConstraintKind::Other
        }
    }
}
