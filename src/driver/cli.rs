//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// FreeCell のディールを解くCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "freecell-solver")]
#[command(about = "Solve FreeCell deals with a best-first search", long_about = None)]
pub struct Args {
    /// Solve a single deal file
    #[arg(long, value_name = "FILE", conflicts_with = "deal_dir")]
    pub deal: Option<String>,

    /// Solve every deal file (*.txt, *.deal) under a directory
    #[arg(long, value_name = "DIR")]
    pub deal_dir: Option<String>,

    /// Seed for the random deal (used when no deal file is given)
    #[arg(long, value_name = "N", conflicts_with_all = ["deal", "deal_dir"])]
    pub seed: Option<u64>,

    /// Start the random deal with every foundation built up to this rank
    #[arg(
        long,
        value_name = "K",
        value_parser = clap::value_parser!(u8).range(0..=13),
        conflicts_with_all = ["deal", "deal_dir"]
    )]
    pub prefilled: Option<u8>,

    /// Maximum number of search nodes (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_nodes: Option<u64>,

    /// Config file path
    #[arg(short, long, default_value = "./freecell-solver.json")]
    pub config: String,

    /// Directory for solution records (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub output: Option<String>,

    /// Dry run mode - don't save solution records
    #[arg(long)]
    pub dry_run: bool,

    /// Skip replaying the solution against the initial position
    #[arg(long)]
    pub no_verify: bool,
}
