//! FreeCell Solver
//!
//! ディールファイルまたは乱数ディールを解いて手順を表示・保存する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use freecell_solver::adapter::config::Config;
use freecell_solver::driver::{Args, SolveWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG などを .env から読み込む（ファイルがなくてもよい）
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = SolveWorkflow::new(config);

    workflow.execute(args).await?;
    Ok(())
}
