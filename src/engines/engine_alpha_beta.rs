use log::{error, info, trace};
use std::time::Instant;

use crate::boards::board::{Board, Color, Move};
use crate::engines::evaluation::rate_board;
use crate::engines::Engine;

/// Outcome of a search: the move to play, its minimax value and the number of
/// leaf positions visited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub value: f64,
    pub searched: u64,
}

impl SearchResult {
    fn leaf(value: f64) -> Self {
        Self {
            best_move: None,
            value,
            searched: 1,
        }
    }
}

/// Value of a position where the side to move has no move: just short of a loss.
fn stalemate_value(stuck: Color) -> f64 {
    match stuck {
        Color::Red => f64::MIN,
        Color::Black => f64::MAX,
    }
}

/// Searches `depth` plies with minimax and alpha-beta pruning. Red maximizes,
/// black minimizes.
///
/// Ties keep the first move in generation order, so the result is fully
/// reproducible for a given board and depth.
pub fn get_best_move(board: &Board, depth: u32) -> SearchResult {
    let start_time = Instant::now();
    let result = alpha_beta(board, depth, f64::NEG_INFINITY, f64::INFINITY, 0);
    info!(
        "depth {} best move {} value {} searched {} in {:?}",
        depth,
        result.best_move.map_or("none".to_string(), |mv| mv.as_algebraic()),
        result.value,
        result.searched,
        start_time.elapsed()
    );
    result
}

fn alpha_beta(board: &Board, depth: u32, mut alpha: f64, mut beta: f64, ply: usize) -> SearchResult {
    if depth == 0 || board.state.winner.is_some() {
        return SearchResult::leaf(rate_board(board));
    }

    let moves = board.playable_moves();
    if moves.is_empty() {
        return SearchResult::leaf(stalemate_value(board.state.turn));
    }

    // The side to move keeps the turn during a capture chain, so this is
    // decided per position rather than by alternating plies.
    let maximizing = board.state.turn == Color::Red;
    let mut best_move = None;
    let mut best_value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    let mut searched = 0u64;

    for mv in moves {
        let new_board = match board.perform_move(mv) {
            Ok(new_board) => new_board,
            Err(e) => {
                error!("generated move {} was rejected: {}", mv, e);
                continue;
            }
        };
        let child = alpha_beta(&new_board, depth - 1, alpha, beta, ply + 1);
        searched += child.searched;
        if ply == 0 {
            trace!("{}: {} ({} searched)", mv, child.value, child.searched);
        }

        let improves = if maximizing {
            child.value > best_value
        } else {
            child.value < best_value
        };
        if best_move.is_none() || improves {
            best_move = Some(mv);
            best_value = child.value;
        }

        if maximizing {
            alpha = alpha.max(best_value);
        } else {
            beta = beta.min(best_value);
        }
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        best_move,
        value: best_value,
        searched: searched.max(1),
    }
}

/// Engine that plays the alpha-beta choice at a fixed depth.
pub struct AlphaBetaEngine {
    depth: u32,
    last_result: Option<SearchResult>,
}

impl AlphaBetaEngine {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            last_result: None,
        }
    }

    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Alpha Beta"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let result = get_best_move(board, self.depth);
        self.last_result = Some(result);
        result.best_move
    }
}
