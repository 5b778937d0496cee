//! # Search Node
//!
//! 優先度付きキューに積む探索ノード

use std::cmp::Ordering;

use crate::domain::entities::game::Game;

/// 探索ノード
///
/// `trail` は手順アリーナ上の最後の手のインデックス（初期局面は `None`）
pub(crate) struct SearchNode {
    pub f_score: i32,
    /// 挿入順（同じ f_score では先に積まれたものを優先）
    pub order: u64,
    pub depth: u32,
    pub state: Game,
    pub trail: Option<usize>,
}

// BinaryHeap は最大ヒープなので比較を反転して最小ヒープにする
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.order == other.order
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn node(f_score: i32, order: u64) -> SearchNode {
        SearchNode {
            f_score,
            order,
            depth: 0,
            state: Game::default(),
            trail: None,
        }
    }

    #[test]
    fn test_heap_pops_lowest_f_score_first() {
        let mut heap = BinaryHeap::new();
        heap.push(node(30, 0));
        heap.push(node(10, 1));
        heap.push(node(20, 2));

        let popped: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|n| n.f_score)).collect();
        assert_eq!(popped, vec![10, 20, 30]);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(node(5, 3));
        heap.push(node(5, 1));
        heap.push(node(5, 2));

        let popped: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.order)).collect();
        assert_eq!(popped, vec![1, 2, 3]);
    }
}
