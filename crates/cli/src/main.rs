//! Wishlist CLI - Database migrations and lifecycle tools.
//!
//! # Usage
//!
//! ```bash
//! # Run wishlist database migrations
//! wl-cli migrate
//!
//! # Replay a customer lifecycle event (e.g. after a missed webhook)
//! wl-cli customer created --id 706405506930370084
//! wl-cli customer deleted --id 706405506930370084
//!
//! # Print a customer's wishlists as JSON
//! wl-cli list --customer 706405506930370084
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `customer` - Replay customer lifecycle events
//! - `list` - Show a customer's wishlists

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use wishlist_core::CustomerId;

mod commands;

#[derive(Parser)]
#[command(name = "wl-cli")]
#[command(author, version, about = "Wishlist CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Replay customer lifecycle events
    Customer {
        #[command(subcommand)]
        event: CustomerAction,
    },
    /// Print a customer's wishlists as JSON
    List {
        /// Customer ID
        #[arg(short, long)]
        customer: CustomerId,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// A customer was created: give them a default wishlist
    Created {
        /// Customer ID
        #[arg(short, long)]
        id: CustomerId,
    },
    /// A customer was deleted: remove all of their wishlists
    Deleted {
        /// Customer ID
        #[arg(short, long)]
        id: CustomerId,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Customer { event } => match event {
            CustomerAction::Created { id } => commands::customer::created(id).await?,
            CustomerAction::Deleted { id } => commands::customer::deleted(id).await?,
        },
        Commands::List { customer } => commands::customer::list(customer).await?,
    }
    Ok(())
}
