use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
    Resign,
}

/// One accepted action in a game's history. The history is the engine's
/// source of truth for turn order and end-of-game detection, and a legal
/// history replayed onto an empty board reconstructs the full game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
        }
    }

    pub fn resign(stone: Stone) -> Self {
        Turn {
            kind: Move::Resign,
            stone,
            pos: None,
        }
    }

    pub fn is_play(&self) -> bool {
        self.kind == Move::Play
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }

    pub fn is_resign(&self) -> bool {
        self.kind == Move::Resign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_carries_point() {
        let t = Turn::play(Stone::Black, (2, 3));
        assert_eq!(t.kind, Move::Play);
        assert_eq!(t.pos, Some((2, 3)));
        assert!(t.is_play() && !t.is_pass() && !t.is_resign());
    }

    #[test]
    fn pass_and_resign_have_no_point() {
        assert_eq!(Turn::pass(Stone::White).pos, None);
        assert_eq!(Turn::resign(Stone::Black).pos, None);
        assert!(Turn::pass(Stone::White).is_pass());
        assert!(Turn::resign(Stone::Black).is_resign());
    }

    #[test]
    fn equality() {
        assert_eq!(Turn::play(Stone::Black, (0, 0)), Turn::play(Stone::Black, (0, 0)));
        assert_ne!(Turn::play(Stone::Black, (0, 0)), Turn::play(Stone::White, (0, 0)));
        assert_ne!(Turn::pass(Stone::Black), Turn::resign(Stone::Black));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(Turn::play(Stone::Black, (1, 2))).unwrap();
        assert_eq!(json["kind"], "play");
        assert_eq!(json["stone"], 1);
        assert_eq!(json["pos"], serde_json::json!([1, 2]));
    }
}
