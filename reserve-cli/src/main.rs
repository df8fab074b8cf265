mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reserve_core::constants::TAG_BITCOIN_TRANSACTION;
use reserve_core::merkle::scheme::HashScheme;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reserve", about = "Tagged-hash Merkle roots and inclusion proofs")]
struct Cli {
    /// Tag used to hash each item into a leaf
    #[arg(long, global = true, default_value = TAG_BITCOIN_TRANSACTION)]
    leaf_tag: String,

    /// Tag used to hash each pair of child digests into a branch
    #[arg(long, global = true, default_value = TAG_BITCOIN_TRANSACTION)]
    branch_tag: String,

    #[command(subcommand)]
    command: Commands,
}

/// The ordered items a tree is built from.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ItemArgs {
    /// Items in leaf order
    items: Vec<String>,

    /// Read items from a file, one per line, instead of (or after) the positional list
    #[arg(long)]
    items_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Merkle root of the given items
    Root {
        #[command(flatten)]
        items: ItemArgs,
    },

    /// Generate an inclusion proof for one item
    Prove {
        /// The item to prove
        #[arg(long)]
        item: String,

        #[command(flatten)]
        items: ItemArgs,

        /// Write the proof JSON to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Verify a proof JSON file against an expected root
    Verify {
        /// Path to a proof written by `reserve prove`
        #[arg(long)]
        proof: PathBuf,

        /// Expected root as hex
        #[arg(long)]
        root: String,
    },

    /// Walk through a root, proof, and verification for aaa..eee
    Demo,
}

fn main() {
    // Initialize tracing (controlled by RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scheme = HashScheme::new(cli.leaf_tag, cli.branch_tag);

    let result = match cli.command {
        Commands::Root { items } => commands::root::run_root(&items, &scheme),
        Commands::Prove { item, items, out } => {
            commands::prove::run_prove(&item, &items, out.as_deref(), &scheme)
        }
        Commands::Verify { proof, root } => commands::verify::run_verify(&proof, &root, &scheme),
        Commands::Demo => commands::demo::run_demo(&scheme),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
