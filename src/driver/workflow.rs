//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_solution_repository::JsonSolutionRepository;
use crate::adapter::repositories::text_deal_repository::TextDealRepository;
use crate::application::dto::solve_config::SolveConfig;
use crate::application::use_cases::discover_deals::DiscoverDealsUseCase;
use crate::application::use_cases::load_deal::LoadDealUseCase;
use crate::application::use_cases::save_solution::SaveSolutionUseCase;
use crate::application::use_cases::solve_deal::SolveDealUseCase;
use crate::domain::entities::action::Action;
use crate::domain::entities::game::Game;
use crate::domain::services::dealer;
use crate::domain::services::solver::{SolveOutcome, SolveStatus};

use super::cli::Args;

/// 1回の実行の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub attempted: usize,
    pub solved: usize,
    /// 保存した求解記録のパス（dry-run では空）
    pub saved: Vec<PathBuf>,
}

/// 乱数ディールの出所を表す文字列
pub fn random_deal_source(seed: u64, prefilled: Option<u8>) -> String {
    match prefilled {
        Some(k) => format!("seed:{},prefilled:{}", seed, k),
        None => format!("seed:{}", seed),
    }
}

/// 解を番号付きの行に整形
pub fn format_moves(actions: &[Action]) -> Vec<String> {
    let width = actions.len().to_string().len();
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{:>width$}. {}", i + 1, action, width = width))
        .collect()
}

/// CLI引数の上書きを反映した求解設定
pub fn effective_solve_config(config: &Config, args: &Args) -> SolveConfig {
    let mut solve_config = config.solve_config();
    if let Some(max_nodes) = args.max_nodes {
        solve_config.max_nodes = max_nodes;
    }
    if args.no_verify {
        solve_config.verify = false;
    }
    solve_config
}

/// Solve Workflow
pub struct SolveWorkflow {
    config: Config,
    discover_use_case: Arc<DiscoverDealsUseCase<TextDealRepository>>,
    load_use_case: Arc<LoadDealUseCase<TextDealRepository>>,
    save_use_case: Arc<SaveSolutionUseCase<JsonSolutionRepository>>,
}

impl SolveWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let deal_repo = Arc::new(TextDealRepository::new());
        let solution_repo = Arc::new(JsonSolutionRepository::new());

        Self {
            config,
            discover_use_case: Arc::new(DiscoverDealsUseCase::new(deal_repo.clone())),
            load_use_case: Arc::new(LoadDealUseCase::new(deal_repo)),
            save_use_case: Arc::new(SaveSolutionUseCase::new(solution_repo)),
        }
    }

    /// Execute the solve workflow
    pub async fn execute(&self, args: Args) -> Result<WorkflowSummary> {
        info!("Starting FreeCell solver...");
        info!("Dry run: {}", args.dry_run);

        let solve_config = effective_solve_config(&self.config, &args);
        let output_dir = match &args.output {
            Some(dir) => shellexpand::tilde(dir).into_owned(),
            None => self.config.solutions_dir(),
        };

        println!("✓ Using configuration:");
        println!("  Max nodes: {}", solve_config.max_nodes);
        println!("  Verify solutions: {}", solve_config.verify);
        if !args.dry_run {
            println!("  Solutions dir: {}", output_dir);
        }

        let deals = self.resolve_deals(&args).await?;
        let mut summary = WorkflowSummary::default();
        if deals.is_empty() {
            println!("No deals to solve. Exiting.");
            return Ok(summary);
        }

        let solve_use_case = SolveDealUseCase::new(solve_config);

        for (source, game) in deals {
            println!();
            println!("Deal: {}", source);
            println!("{}", game);

            let outcome = solve_use_case.execute(game.clone()).await?;
            summary.attempted += 1;
            if outcome.is_solved() {
                summary.solved += 1;
            }
            print_outcome(&outcome);

            if args.dry_run {
                println!("✓ Dry-run mode (not saving solution record)");
                continue;
            }

            let path = self
                .save_use_case
                .execute(&output_dir, &source, &game, &outcome)
                .await
                .with_context(|| format!("Failed to save solution for {}", source))?;
            println!("✓ Saved solution record: {}", path.display());
            summary.saved.push(path);
        }

        println!();
        println!(
            "✓ Solved {} of {} deals",
            summary.solved, summary.attempted
        );

        Ok(summary)
    }

    /// 引数から解くべきディールを決める
    ///
    /// ディレクトリ指定時は読めないファイルを警告して飛ばす。単一ファイル指定時はエラーにする
    async fn resolve_deals(&self, args: &Args) -> Result<Vec<(String, Game)>> {
        if let Some(deal_dir) = &args.deal_dir {
            let files = self.discover_use_case.execute(deal_dir).await?;
            println!("✓ Found {} deal files in {}", files.len(), deal_dir);

            let mut deals = Vec::with_capacity(files.len());
            for path in files {
                match self.load_use_case.execute(&path).await {
                    Ok(game) => deals.push((path.display().to_string(), game)),
                    Err(e) => {
                        warn!("Skipping {}: {:#}", path.display(), e);
                        println!("⚠ Skipping {}: {:#}", path.display(), e);
                    }
                }
            }
            return Ok(deals);
        }

        if let Some(deal) = &args.deal {
            let game = self.load_use_case.execute(Path::new(deal)).await?;
            println!("✓ Loaded deal {}", deal);
            return Ok(vec![(deal.clone(), game)]);
        }

        let seed = args.seed.unwrap_or_else(dealer::random_seed);
        let mut rng = dealer::seeded_rng(seed);
        let game = match args.prefilled {
            Some(prefilled) => dealer::partial_deal(prefilled, &mut rng)?,
            None => dealer::random_deal(&mut rng)?,
        };
        let source = random_deal_source(seed, args.prefilled);
        println!("✓ Generated random deal ({})", source);

        Ok(vec![(source, game)])
    }
}

fn print_outcome(outcome: &SolveOutcome) {
    match &outcome.status {
        SolveStatus::Solved(actions) => {
            println!(
                "✓ Solved in {} moves ({} nodes, {:.2?})",
                actions.len(),
                outcome.nodes_explored,
                outcome.elapsed
            );
            for line in format_moves(actions) {
                println!("  {}", line);
            }
        }
        SolveStatus::Exhausted => {
            println!(
                "✗ No solution exists ({} nodes explored)",
                outcome.nodes_explored
            );
        }
        SolveStatus::BudgetExceeded => {
            println!(
                "✗ Gave up after {} nodes without finding a solution",
                outcome.nodes_explored
            );
        }
    }
}
