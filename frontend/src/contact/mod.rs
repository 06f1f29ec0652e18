//! Application form state and its two delivery paths.

pub mod client;
pub mod controller;
pub mod error;
pub mod mail_draft;
pub mod models;

pub use controller::{ContactController, StatusTone};
pub use error::{SubmitError, ValidationError};
pub use models::{ExperienceBracket, Field, InputKind, Position, LICENSES};

/// Where a submitted application goes. Exactly one path runs per submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// JSON POST to the contact endpoint, with status feedback.
    Network,
    /// Hand a pre-filled draft to the local mail client. Reports nothing back.
    MailDraft,
}
