use serde::Serialize;

use crate::goban::Goban;
use crate::stone::Stone;

/// Classify every empty point on the board.
///
/// Returns a flat array (same layout as `goban.board()`) where:
/// - `1` = Black territory
/// - `-1` = White territory
/// - `0` = neutral (dame) or occupied
///
/// Each maximal empty region is flood-filled once; a region bordered by
/// stones of exactly one color belongs to that color, anything else
/// (both colors, or no stones at all) is neutral.
pub fn ownership(goban: &Goban) -> Vec<i8> {
    let cols = goban.cols();
    let rows = goban.rows();
    let size = cols as usize * rows as usize;

    let mut result = vec![0i8; size];
    let mut visited = vec![false; size];

    for y in 0..rows {
        for x in 0..cols {
            let idx = y as usize * cols as usize + x as usize;
            if visited[idx] || goban.stone_at((x, y)).is_some() {
                continue;
            }

            let mut region = Vec::new();
            let mut border: u8 = 0; // bit 0 = Black seen, bit 1 = White seen
            let mut stack = vec![(x, y)];

            while let Some(p) = stack.pop() {
                let pi = p.1 as usize * cols as usize + p.0 as usize;
                if visited[pi] {
                    continue;
                }
                visited[pi] = true;
                region.push(pi);

                for n in goban.neighbors(p) {
                    match goban.stone_at(n) {
                        Some(Stone::Black) => border |= 1,
                        Some(Stone::White) => border |= 2,
                        None => {
                            if !visited[n.1 as usize * cols as usize + n.0 as usize] {
                                stack.push(n);
                            }
                        }
                    }
                }
            }

            let owner = match border {
                1 => 1i8,
                2 => -1i8,
                _ => 0i8,
            };

            for &pi in &region {
                result[pi] = owner;
            }
        }
    }

    result
}

/// One color's area-scoring breakdown: stones on the board plus surrounded
/// empty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub stones: u32,
    pub territory: u32,
}

impl PlayerScore {
    pub fn total(&self) -> u32 {
        self.stones + self.territory
    }
}

/// Final area (Chinese) score for both players. Occupied points count
/// directly toward their color; no komi is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaScore {
    pub black: PlayerScore,
    pub white: PlayerScore,
}

impl AreaScore {
    /// Format the outcome as "B+{margin}", "W+{margin}", or "Draw".
    pub fn result(&self) -> String {
        let black = i64::from(self.black.total());
        let white = i64::from(self.white.total());
        if black > white {
            format!("B+{}", black - white)
        } else if white > black {
            format!("W+{}", white - black)
        } else {
            "Draw".to_string()
        }
    }
}

/// Score the board by area: per color, stones on the board plus territory
/// per [`ownership`]. Full-board scan, intended for game end rather than
/// per-move use.
pub fn area_score(goban: &Goban) -> AreaScore {
    let mut black = PlayerScore {
        stones: 0,
        territory: 0,
    };
    let mut white = PlayerScore {
        stones: 0,
        territory: 0,
    };

    for &cell in goban.board() {
        match Stone::from_int(cell) {
            Some(Stone::Black) => black.stones += 1,
            Some(Stone::White) => white.stones += 1,
            None => {}
        }
    }

    for &o in &ownership(goban) {
        match o {
            1 => black.territory += 1,
            -1 => white.territory += 1,
            _ => {}
        }
    }

    AreaScore { black, white }
}
