pub mod config;
pub mod core;
pub mod editor;
pub mod form;
pub mod presentation;

pub use config::{AppConfig, Variant};
pub use editor::Editor;
pub use form::{FormController, FormMode, SubmitOutcome, Submitted};
pub use presentation::{ListView, Notice, Row};

#[cfg(feature = "gui")]
pub mod gui;
