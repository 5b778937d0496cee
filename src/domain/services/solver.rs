//! # Solver
//!
//! ヒューリスティック最良優先探索（A* 形式）による FreeCell ソルバー
//!
//! `f = 手数 + heuristic` が最小の局面から展開する。展開済み・生成済みの局面は
//! 正規化ハッシュで記録し、同じ局面を二度キューに積まない。

use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

use log::{debug, info};

use super::heuristic::{self, HeuristicWeights};
use super::move_generator::legal_moves;
use super::search_node::SearchNode;
use crate::domain::entities::action::Action;
use crate::domain::entities::game::Game;

pub const DEFAULT_MAX_NODES: u64 = 1_000_000;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000;

/// ソルバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOptions {
    /// 展開するノード数の上限
    pub max_nodes: u64,
    /// 進捗ログの間隔（0 で出力しない）
    pub progress_interval: u64,
    pub weights: HeuristicWeights,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            weights: HeuristicWeights::default(),
        }
    }
}

/// 探索の終了状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// 解が見つかった（手順）
    Solved(Vec<Action>),
    /// 到達可能な局面を全て調べたが解がない
    Exhausted,
    /// ノード数の上限に達した
    BudgetExceeded,
}

/// 探索結果
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub nodes_explored: u64,
    pub elapsed: Duration,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self.status, SolveStatus::Solved(_))
    }

    pub fn solution(&self) -> Option<&[Action]> {
        match &self.status {
            SolveStatus::Solved(actions) => Some(actions),
            _ => None,
        }
    }
}

pub struct Solver {
    initial_game: Game,
    options: SolverOptions,
}

impl Solver {
    pub fn new(initial_game: Game, options: SolverOptions) -> Self {
        Self {
            initial_game,
            options,
        }
    }

    pub fn initial_game(&self) -> &Game {
        &self.initial_game
    }

    pub fn solve(&self) -> SolveOutcome {
        let started = Instant::now();
        let finish = |status, nodes_explored| SolveOutcome {
            status,
            nodes_explored,
            elapsed: started.elapsed(),
        };

        if self.initial_game.is_won() {
            return finish(SolveStatus::Solved(Vec::new()), 0);
        }

        let weights = &self.options.weights;

        // (親の手のインデックス, 手)
        let mut trails: Vec<(Option<usize>, Action)> = Vec::new();
        let mut visited: HashSet<u64> = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut order: u64 = 0;

        visited.insert(self.initial_game.hash_key());
        heap.push(SearchNode {
            f_score: heuristic::score(&self.initial_game, weights),
            order,
            depth: 0,
            state: self.initial_game.clone(),
            trail: None,
        });

        let mut nodes_explored: u64 = 0;

        while let Some(node) = heap.pop() {
            if nodes_explored >= self.options.max_nodes {
                info!("Node budget exhausted after {} nodes", nodes_explored);
                return finish(SolveStatus::BudgetExceeded, nodes_explored);
            }
            nodes_explored += 1;

            if self.options.progress_interval > 0
                && nodes_explored % self.options.progress_interval == 0
            {
                debug!(
                    "Explored: {}, Queue: {}, Depth: {}, H: {}",
                    nodes_explored,
                    heap.len(),
                    node.depth,
                    node.f_score.saturating_sub(node.depth as i32)
                );
            }

            if node.state.is_won() {
                let path = rebuild_path(&trails, node.trail);
                info!(
                    "Solution found: {} moves, {} nodes explored",
                    path.len(),
                    nodes_explored
                );
                return finish(SolveStatus::Solved(path), nodes_explored);
            }

            for action in legal_moves(&node.state) {
                let Ok(next) = node.state.apply(&action) else {
                    continue;
                };
                if !visited.insert(next.hash_key()) {
                    continue;
                }

                let depth = node.depth + 1;
                let f_score = (depth as i32).saturating_add(heuristic::score(&next, weights));

                trails.push((node.trail, action));
                order += 1;

                heap.push(SearchNode {
                    f_score,
                    order,
                    depth,
                    state: next,
                    trail: Some(trails.len() - 1),
                });
            }
        }

        info!("Search space exhausted after {} nodes", nodes_explored);
        finish(SolveStatus::Exhausted, nodes_explored)
    }
}

fn rebuild_path(trails: &[(Option<usize>, Action)], mut link: Option<usize>) -> Vec<Action> {
    let mut path = Vec::new();
    while let Some(index) = link {
        let (parent, action) = &trails[index];
        path.push(action.clone());
        link = *parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::card::{Card, Suit};
    use crate::domain::services::verifier::SolutionVerifier;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    /// エースが上、キングが下に並んだ、ファウンデーションへ送るだけで解けるディール
    fn descending_deck() -> Vec<Card> {
        (1..=13u8)
            .rev()
            .flat_map(|rank| Suit::ALL.map(|suit| Card::new(rank, suit).unwrap()))
            .collect()
    }

    #[test]
    fn test_already_won() {
        let game = Game::with_foundations(&[], [13; 4]).unwrap();
        let outcome = Solver::new(game, SolverOptions::default()).solve();

        assert_eq!(outcome.status, SolveStatus::Solved(vec![]));
        assert_eq!(outcome.nodes_explored, 0);
    }

    #[test]
    fn test_solves_position_needing_a_freecell() {
        let mut game = Game {
            foundations: [13, 13, 11, 13],
            ..Game::default()
        };
        game.columns[0] = cards("QH KH");
        game.validate().unwrap();

        let outcome = Solver::new(game.clone(), SolverOptions::default()).solve();

        // K♥ を退避 → Q♥ → K♥
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.len(), 3);
        assert!(!solution[0].is_foundation_move());
        assert!(solution[1].is_foundation_move());
        assert!(solution[2].is_foundation_move());
        assert!(SolutionVerifier::verify(&game, solution).is_ok());
    }

    #[test]
    fn test_solves_full_descending_deal() {
        let game = Game::deal(&descending_deck()).unwrap();
        let outcome = Solver::new(game.clone(), SolverOptions::default()).solve();

        let solution = outcome.solution().unwrap();
        assert_eq!(solution.len(), 52);
        assert!(solution.iter().all(Action::is_foundation_move));
        assert!(SolutionVerifier::verify(&game, solution).unwrap().is_won());
    }

    #[test]
    fn test_exhausted_when_no_progress_possible() {
        // 検証を通らない局面（♥5 だけが残っていてエースがない）
        let mut game = Game::default();
        game.foundations = [13, 13, 0, 13];
        game.columns[0] = cards("5H");

        let outcome = Solver::new(game, SolverOptions::default()).solve();

        assert_eq!(outcome.status, SolveStatus::Exhausted);
        assert_eq!(outcome.nodes_explored, 2);
        assert!(outcome.solution().is_none());
    }

    #[test]
    fn test_budget_exceeded() {
        let game = Game::deal(&descending_deck()).unwrap();
        let options = SolverOptions {
            max_nodes: 5,
            ..SolverOptions::default()
        };

        let outcome = Solver::new(game, options).solve();

        assert_eq!(outcome.status, SolveStatus::BudgetExceeded);
        assert_eq!(outcome.nodes_explored, 5);
        assert!(!outcome.is_solved());
    }

    #[test]
    fn test_zero_progress_interval() {
        let game = Game::deal(&descending_deck()).unwrap();
        let options = SolverOptions {
            max_nodes: 3,
            progress_interval: 0,
            ..SolverOptions::default()
        };

        let outcome = Solver::new(game, options).solve();

        assert_eq!(outcome.status, SolveStatus::BudgetExceeded);
        assert_eq!(outcome.nodes_explored, 3);
    }

    #[test]
    fn test_solves_with_saturating_weights() {
        let game = Game::with_foundations(&cards("KC KD KH KS"), [12; 4]).unwrap();
        let options = SolverOptions {
            weights: HeuristicWeights {
                remaining_card: i32::MAX,
                ..HeuristicWeights::default()
            },
            ..SolverOptions::default()
        };

        let outcome = Solver::new(game, options).solve();

        assert_eq!(outcome.solution().map(<[Action]>::len), Some(4));
    }

    #[test]
    fn test_rebuild_path_follows_parent_links() {
        let a = Action::column_to_freecell(0, 0);
        let b = Action::column_to_freecell(1, 1);
        let c = Action::column_to_freecell(2, 2);
        let trails = vec![(None, a.clone()), (Some(0), b.clone()), (None, c), (Some(1), a.clone())];

        assert_eq!(rebuild_path(&trails, Some(3)), vec![a.clone(), b, a]);
        assert!(rebuild_path(&trails, None).is_empty());
    }
}
