use thiserror::Error;

/// Reasons a form submission is rejected. The display text is shown to the
/// user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Please enter an item name.")]
    EmptyName,
}
