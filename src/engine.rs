use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::goban::{Captures, Goban};
use crate::stone::Stone;
use crate::territory::{self, AreaScore};
use crate::turn::{Move, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Unstarted,
    BlackToPlay,
    WhiteToPlay,
    Done,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::Unstarted | Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

/// Serializable snapshot of the board portion of an engine. Together with
/// the move history this restores a full game.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub cols: u8,
    pub rows: u8,
    pub captures: Captures,
}

/// Outcome of a pass: either the game continues with the other color to
/// play, or the second consecutive pass ended it and the final area score
/// is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassOutcome {
    InProgress(Stone),
    Ended(AreaScore),
}

/// The authoritative game state: board, move history, turn order, and end
/// detection. Collaborators (UI, AI search) read snapshots and submit
/// intents through `try_play` / `try_pass` / `try_resign`; they never touch
/// stone storage directly.
///
/// Every accepted action is atomic: legality, commit, capture resolution,
/// and the turn flip happen as one unit. A rejected action leaves the
/// engine untouched.
#[derive(Debug, Clone)]
pub struct Engine {
    cols: u8,
    rows: u8,
    moves: Vec<Turn>,
    goban: Goban,
    result: Option<String>,
    score: Option<AreaScore>,
}

impl Engine {
    /// Start a game on an empty square board. Black plays first.
    pub fn new(size: u8) -> Self {
        Self::create(size, size, Vec::new())
    }

    pub fn with_dimensions(cols: u8, rows: u8) -> Self {
        Self::create(cols, rows, Vec::new())
    }

    /// Rebuild a game by replaying a legal history onto an empty board.
    /// This is the reconstruction path lookahead search uses for private
    /// copies. Panics if the history contains an illegal move.
    pub fn with_moves(cols: u8, rows: u8, moves: Vec<Turn>) -> Self {
        Self::create(cols, rows, moves)
    }

    fn create(cols: u8, rows: u8, moves: Vec<Turn>) -> Self {
        let mut goban = Goban::with_dimensions(cols, rows);
        for m in &moves {
            if m.kind == Move::Play {
                let point = m.pos.expect("play move must have a point");
                goban = goban.play(point, m.stone).expect("invalid move in replay").0;
            }
        }
        let (result, score) = Self::ending_from_moves(&moves, &goban);
        Engine {
            cols,
            rows,
            moves,
            goban,
            result,
            score,
        }
    }

    /// Derive the end state a history implies: a trailing resignation, or a
    /// trailing double pass (scored from the final board).
    fn ending_from_moves(moves: &[Turn], goban: &Goban) -> (Option<String>, Option<AreaScore>) {
        match moves {
            [.., t] if t.is_resign() => {
                (Some(format!("{}+R", t.stone.opp().letter())), None)
            }
            [.., a, b] if a.is_pass() && b.is_pass() => {
                let score = territory::area_score(goban);
                (Some(score.result()), Some(score))
            }
            _ => (None, None),
        }
    }

    // -- Accessors --

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.goban.captures().get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn current_turn_stone(&self) -> Stone {
        match self.moves.last() {
            None => Stone::Black,
            Some(m) => m.stone.opp(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Result string once the game has ended ("B+12", "W+R", "Draw").
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Final area score. Present after a double-pass end; a resignation has
    /// a result but no score breakdown.
    pub fn score(&self) -> Option<&AreaScore> {
        self.score.as_ref()
    }

    pub fn stage(&self) -> Stage {
        if self.moves.is_empty() {
            Stage::Unstarted
        } else if self.result.is_some() {
            Stage::Done
        } else {
            match self.current_turn_stone() {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        !self.is_over() && stone == self.current_turn_stone()
            && self.goban.is_legal_move(point, stone)
    }

    // -- Game actions --

    /// Attempt a move. On acceptance the stone is committed, captures are
    /// resolved, and the turn flips; the captured points are returned.
    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<Vec<Point>, GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }
        if stone != self.current_turn_stone() {
            return Err(GoError::OutOfTurn);
        }

        let (goban, captured) = self.goban.play(point, stone)?;
        self.goban = goban;
        self.moves.push(Turn::play(stone, point));
        Ok(captured)
    }

    /// Pass the turn. The second consecutive pass ends the game and scores
    /// the final position by area.
    pub fn try_pass(&mut self, stone: Stone) -> Result<PassOutcome, GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }
        if stone != self.current_turn_stone() {
            return Err(GoError::OutOfTurn);
        }

        let ends_game = self.moves.last().is_some_and(Turn::is_pass);
        self.moves.push(Turn::pass(stone));

        if ends_game {
            let score = territory::area_score(&self.goban);
            self.result = Some(score.result());
            self.score = Some(score);
            Ok(PassOutcome::Ended(score))
        } else {
            Ok(PassOutcome::InProgress(self.current_turn_stone()))
        }
    }

    /// Concede the game. Either color may resign regardless of whose turn
    /// it is; the result carries no score breakdown.
    pub fn try_resign(&mut self, stone: Stone) -> Result<Stage, GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }

        self.result = Some(format!("{}+R", stone.opp().letter()));
        self.moves.push(Turn::resign(stone));
        Ok(self.stage())
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.goban.board().to_vec(),
            cols: self.cols,
            rows: self.rows,
            captures: self.goban.captures().clone(),
        }
    }

    /// Restore an engine from a snapshot and the history that produced it.
    /// End state is re-derived from the history, re-scoring the restored
    /// board if the game had ended by double pass.
    pub fn from_game_state(moves: Vec<Turn>, state: GameState) -> Self {
        let cols = state.cols;
        let rows = state.rows;
        let goban = Goban::from_state(state);
        let (result, score) = Self::ending_from_moves(&moves, &goban);

        Engine {
            cols,
            rows,
            moves,
            goban,
            result,
            score,
        }
    }
}
