pub mod engine;
pub mod error;
pub mod goban;
pub mod stone;
pub mod territory;
pub mod turn;

pub type Point = (u8, u8);

pub use engine::{Engine, GameState, PassOutcome, Stage};
pub use error::GoError;
pub use goban::{Captures, Goban};
pub use stone::Stone;
pub use territory::{AreaScore, PlayerScore};
pub use turn::{Move, Turn};
