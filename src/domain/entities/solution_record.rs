//! # SolutionRecord Entity
//!
//! 1回の求解の結果（永続化用）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::domain::services::solver::{SolveOutcome, SolveStatus};

/// 求解結果の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Solved,
    Exhausted,
    BudgetExceeded,
}

impl From<&SolveStatus> for RecordStatus {
    fn from(status: &SolveStatus) -> Self {
        match status {
            SolveStatus::Solved(_) => RecordStatus::Solved,
            SolveStatus::Exhausted => RecordStatus::Exhausted,
            SolveStatus::BudgetExceeded => RecordStatus::BudgetExceeded,
        }
    }
}

/// 記録される1手（機械可読な手と表示用の文字列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    #[serde(flatten)]
    pub action: Action,
    pub notation: String,
}

impl From<&Action> for RecordedMove {
    fn from(action: &Action) -> Self {
        Self {
            action: action.clone(),
            notation: action.to_string(),
        }
    }
}

/// 求解記録
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub run_id: String,
    /// ディールの出所（ファイルパスまたは `seed:<n>`）
    pub deal_source: String,
    pub hostname: String,
    pub solved_at: DateTime<Utc>,
    pub status: RecordStatus,
    pub move_count: usize,
    pub moves: Vec<RecordedMove>,
    pub nodes_explored: u64,
    pub elapsed_ms: u64,
    /// 初期局面のテキスト表現
    pub initial_position: String,
}

impl SolutionRecord {
    /// 探索結果から記録を作成
    pub fn from_outcome(
        run_id: String,
        deal_source: String,
        hostname: String,
        initial_position: String,
        outcome: &SolveOutcome,
    ) -> Self {
        let moves: Vec<RecordedMove> = outcome
            .solution()
            .unwrap_or_default()
            .iter()
            .map(RecordedMove::from)
            .collect();

        Self {
            run_id,
            deal_source,
            hostname,
            solved_at: Utc::now(),
            status: RecordStatus::from(&outcome.status),
            move_count: moves.len(),
            moves,
            nodes_explored: outcome.nodes_explored,
            elapsed_ms: outcome.elapsed.as_millis() as u64,
            initial_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::card::Suit;
    use std::time::Duration;

    fn outcome(status: SolveStatus) -> SolveOutcome {
        SolveOutcome {
            status,
            nodes_explored: 12,
            elapsed: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_from_solved_outcome() {
        let actions = vec![
            Action::column_to_freecell(0, 0),
            Action::freecell_to_foundation(0, Suit::Spades),
        ];
        let record = SolutionRecord::from_outcome(
            "run-001".to_string(),
            "deals/one.txt".to_string(),
            "test-host".to_string(),
            "board".to_string(),
            &outcome(SolveStatus::Solved(actions)),
        );

        assert_eq!(record.status, RecordStatus::Solved);
        assert_eq!(record.move_count, 2);
        assert_eq!(record.moves[1].notation, "freecell 1 -> foundation ♠");
        assert_eq!(record.nodes_explored, 12);
        assert_eq!(record.elapsed_ms, 1500);
    }

    #[test]
    fn test_from_unsolved_outcome() {
        let record = SolutionRecord::from_outcome(
            "run-002".to_string(),
            "seed:9".to_string(),
            "test-host".to_string(),
            String::new(),
            &outcome(SolveStatus::BudgetExceeded),
        );

        assert_eq!(record.status, RecordStatus::BudgetExceeded);
        assert_eq!(record.move_count, 0);
        assert!(record.moves.is_empty());
    }

    #[test]
    fn test_serialize_flattens_moves() {
        let record = SolutionRecord::from_outcome(
            "run-003".to_string(),
            "seed:1".to_string(),
            "test-host".to_string(),
            String::new(),
            &outcome(SolveStatus::Solved(vec![Action::column_to_column(0, 1, 2)])),
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["status"], "solved");
        assert_eq!(json["moves"][0]["action_type"], "column_to_column");
        assert_eq!(json["moves"][0]["count"], 2);
        assert_eq!(json["moves"][0]["notation"], "column 1 -> column 2 (2 cards)");
    }
}
