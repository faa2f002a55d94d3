use std::path::PathBuf;

use clap::ValueEnum;

pub const DEFAULT_DATABASE: &str = "recordbook.db";

/// Which record variant an app instance manages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    #[default]
    Users,
    Items,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub variant: Variant,
    pub database: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            database: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}
