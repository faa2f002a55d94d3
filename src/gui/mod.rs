mod app;
mod dialog;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{RecordsApp, run};
pub use message::Message;
pub use state::AppState;
