use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recordbook::{
    AppConfig, Editor, Variant,
    config::DEFAULT_DATABASE,
    core::{Item, Record, SqliteStore, User},
    presentation::render_table,
};

#[derive(Parser)]
#[command(name = "recordbook")]
#[command(about = "Keep a small list of users or items on this device")]
struct Cli {
    /// Kind of record to manage
    #[arg(long, value_enum, default_value_t = Variant::Users)]
    variant: Variant,

    /// SQLite database holding the records
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// Print the stored records and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn print_records<R: Record>(config: &AppConfig) -> anyhow::Result<()> {
    let store = SqliteStore::open(&config.database).await?;
    let editor: Editor<R, SqliteStore> = Editor::load(Arc::new(store.clone())).await;
    print!("{}", render_table(&editor.list_view()));
    drop(editor);
    close_store(store).await
}

async fn close_store(store: SqliteStore) -> anyhow::Result<()> {
    let path = store.database_file().to_path_buf();
    store.close().await?;
    tracing::debug!(?path, "closed key-value store");
    Ok(())
}

/// Folds whatever the GUI session left in the WAL back into the database file.
#[cfg(feature = "gui")]
fn checkpoint(config: &AppConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = SqliteStore::open(&config.database).await?;
        close_store(store).await
    })
}

fn list(config: &AppConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match config.variant {
            Variant::Users => print_records::<User>(config).await,
            Variant::Items => print_records::<Item>(config).await,
        }
    })
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = AppConfig {
        variant: args.variant,
        database: args.database,
    };
    tracing::debug!(?config, "starting");

    if args.list {
        return list(&config);
    }

    #[cfg(feature = "gui")]
    {
        recordbook::gui::run(config.clone()).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))?;
        checkpoint(&config)?;
    }

    #[cfg(not(feature = "gui"))]
    list(&config)?;

    Ok(())
}
