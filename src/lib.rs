// Isolation agents: fixed-depth minimax and iterative-deepening alpha-beta
pub mod agents;
pub mod board;
pub mod config;
pub mod game;
pub mod perft;
pub mod search;

pub use board::{Board, BoardError, GameState, Move, Player};
