use std::collections::HashMap;

use log::debug;

use crate::engine::{Board, Direction, Row};

use super::common::{evaluate_state, is_terminal, next_actions, next_state, random_additions};
use super::SearchStats;

enum Node {
    Player,
    Spawn,
}

/// Configurable knobs for the alpha-beta player.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaConfig {
    /// Plies searched below each root move (player moves and spawns both count).
    pub depth: u32,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

/// Minimax with alpha-beta pruning, treating tile spawns as an adversary.
///
/// Leaf evaluations are memoized per decision in a cache owned by this
/// instance, keyed on tile layout only. Nothing is shared between instances
/// and the cache is emptied at the start of every [`AlphaBeta::best_move`].
///
/// ```
/// use lib2048::ai::AlphaBeta;
/// use lib2048::engine::Board;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let mut b = Board::new_empty();
/// b.reset(&mut rng);
/// let mut ab = AlphaBeta::new();
/// assert!(ab.best_move(&b).is_some());
/// ```
pub struct AlphaBeta {
    cfg: AlphaBetaConfig,
    cache: HashMap<Vec<Row>, f64>,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::with_config(AlphaBetaConfig::default())
    }

    pub fn with_config(cfg: AlphaBetaConfig) -> Self {
        Self { cfg, cache: HashMap::new(), stats: SearchStats::default() }
    }

    /// Pick the move with the best worst-case value, or `None` when no move
    /// changes the board. Ties go to the earlier move in the action order.
    pub fn best_move(&mut self, board: &Board) -> Option<Direction> {
        self.cache.clear();
        let mut nodes = 0u64;
        let mut best: Option<(Direction, f64)> = None;
        for dir in next_actions(board) {
            let next = next_state(board, dir);
            let v = self.alpha_beta(
                &next,
                self.cfg.depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                Node::Spawn,
                &mut nodes,
            );
            if best.map_or(true, |(_, b)| v > b) {
                best = Some((dir, v));
            }
        }
        self.stats.nodes = nodes;
        self.stats.peak_nodes = self.stats.peak_nodes.max(nodes);
        self.stats.cache_entries = self.cache.len();
        debug!(
            "alpha-beta chose {:?} after {} nodes (cache {})",
            best,
            nodes,
            self.cache.len()
        );
        best.map(|(dir, _)| dir)
    }

    /// Statistics collected from the last call to [`AlphaBeta::best_move`].
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Drop all memoized evaluations.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats.cache_entries = 0;
    }

    fn evaluate(&mut self, board: &Board) -> f64 {
        if let Some(&v) = self.cache.get(board.rows()) {
            return v;
        }
        let v = evaluate_state(board);
        self.cache.insert(board.rows().to_vec(), v);
        v
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        node: Node,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;
        if depth == 0 || is_terminal(board) {
            return self.evaluate(board);
        }
        match node {
            Node::Player => {
                let actions = next_actions(board);
                if actions.is_empty() {
                    return self.evaluate(board);
                }
                let mut v = f64::NEG_INFINITY;
                for dir in actions {
                    let child = next_state(board, dir);
                    let child_v =
                        self.alpha_beta(&child, depth - 1, alpha, beta, Node::Spawn, nodes);
                    v = v.max(child_v);
                    alpha = alpha.max(v);
                    if beta <= alpha {
                        break;
                    }
                }
                v
            }
            Node::Spawn => {
                let children = random_additions(board);
                if children.is_empty() {
                    return self.evaluate(board);
                }
                let mut v = f64::INFINITY;
                for child in &children {
                    let child_v =
                        self.alpha_beta(child, depth - 1, alpha, beta, Node::Player, nodes);
                    v = v.min(child_v);
                    beta = beta.min(v);
                    if beta <= alpha {
                        break;
                    }
                }
                v
            }
        }
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}
