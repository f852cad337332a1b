//! # Canteen CLI Library
//!
//! Everything behind the `canteen` binary: argument definitions, startup,
//! and command dispatch.
//!
//! ## Module Organization
//! ```text
//! canteen_cli/
//! ├── lib.rs          ◄─── You are here (Cli, startup & dispatch)
//! ├── state/
//! │   └── config.rs   ◄─── ConfigState (data path, currency, precision)
//! ├── commands/
//! │   ├── setup.rs    ◄─── seed, menu, people
//! │   ├── ordering.rs ◄─── order, share, reset
//! │   └── bill.rs     ◄─── status, bill
//! └── error.rs        ◄─── CliError for every command
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: warn,canteen=info (override with RUST_LOG)               │
//! │                                                                         │
//! │  2. Resolve Configuration                                               │
//! │     • --data  >  CANTEEN_DATA_PATH  >  platform data dir                │
//! │                                                                         │
//! │  3. Open BillSession<JsonFileStore>                                     │
//! │     • Saved snapshot if readable, canteen defaults otherwise            │
//! │                                                                         │
//! │  4. Run One Command                                                     │
//! │     • Mutations are saved before the command returns                    │
//! │     • Output: text, or JSON with --json                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use canteen_core::Snapshot;
use canteen_store::{BillSession, JsonFileStore, SnapshotStore};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{bill, emit, ordering, setup};
use error::CliResult;
use state::ConfigState;

/// Split a canteen bill between individual orders and shared items.
#[derive(Debug, Parser)]
#[command(name = "canteen")]
#[command(author, version, about)]
pub struct Cli {
    /// Snapshot file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print results (and errors) as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace everything with the canteen's usual menu and people
    Seed,
    /// Manage the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Manage the roster
    People {
        #[command(subcommand)]
        action: PeopleAction,
    },
    /// Change how many of an item a person ordered
    Order {
        /// Person id or name
        person: String,

        /// Menu item id or name
        item: String,

        /// Amount to add (negative to remove)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Change how many of an item are shared by everyone ordering
    Share {
        /// Menu item id or name
        item: String,

        /// Amount to add (negative to remove)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Show the running tally
    Status,
    /// Show the final bill
    Bill,
    /// Clear all quantities, keeping menu and people
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum MenuAction {
    /// Add a menu item
    Add {
        /// Item name
        name: String,

        /// Unit price, e.g. 8 or 12.50
        price: String,
    },
    /// List the menu
    List,
}

#[derive(Debug, Subcommand)]
pub enum PeopleAction {
    /// Add a person
    Add {
        /// Person name
        name: String,
    },
    /// List the roster
    List,
}

/// Runs one parsed command line end to end and returns what to print.
pub async fn run(cli: Cli) -> CliResult<String> {
    let config = ConfigState::from_env().with_data_path(cli.data);
    info!(path = %config.data_path.display(), "Using snapshot file");

    let store = JsonFileStore::new(&config.data_path);
    let mut session = BillSession::open(store, Snapshot::canteen_defaults).await?;

    execute(&mut session, cli.command, &config, cli.json).await
}

/// Dispatches a command against any session.
pub async fn execute<S: SnapshotStore>(
    session: &mut BillSession<S>,
    command: Command,
    config: &ConfigState,
    json: bool,
) -> CliResult<String> {
    match command {
        Command::Seed => emit(&setup::seed(session).await?, config, json),
        Command::Menu { action } => match action {
            MenuAction::Add { name, price } => emit(
                &setup::add_menu_item(session, &name, &price).await?,
                config,
                json,
            ),
            MenuAction::List => emit(&setup::list_menu(session), config, json),
        },
        Command::People { action } => match action {
            PeopleAction::Add { name } => {
                emit(&setup::add_person(session, &name).await?, config, json)
            }
            PeopleAction::List => emit(&setup::list_people(session), config, json),
        },
        Command::Order {
            person,
            item,
            delta,
        } => emit(
            &ordering::order(session, &person, &item, delta).await?,
            config,
            json,
        ),
        Command::Share { item, delta } => {
            emit(&ordering::share(session, &item, delta).await?, config, json)
        }
        Command::Status => emit(&bill::status(session), config, json),
        Command::Bill => emit(&bill::bill(session), config, json),
        Command::Reset => emit(&ordering::reset(session).await?, config, json),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and mutation
/// - `RUST_LOG=canteen_store=trace` - Trace the store only
/// - Default: warnings, plus info from the canteen crates
///
/// Logs go to stderr so command output can be piped.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,canteen=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
