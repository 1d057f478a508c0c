//! Scoring of the words formed by a move.
//!
//! Premium squares count only once: a square's multipliers are reset to 1 as soon as they are
//! read. A square shared by two words of the same move adds its premium to the first word only,
//! and a square scored again in a later move contributes its face value.
use crate::geometry::WordLocations;
use crate::rack::RACK_SIZE;
use crate::Board;
use std::fmt;

/// Bonus for placing all tiles of a full rack in one move.
pub const BINGO_BONUS: u32 = 50;

/// Score of a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    /// The letters of the word
    pub word: String,
    /// The squares of the word
    pub locations: WordLocations,
    /// Points for the word, multipliers applied
    pub score: u32,
}

/// Score of a move: every word it formed, and the bingo bonus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveScore {
    pub words: Vec<WordScore>,
    pub bingo: bool,
    pub total: u32,
}

impl fmt::Display for MoveScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words = self
            .words
            .iter()
            .map(|w| format!("{} {}", w.word, w.score))
            .collect::<Vec<_>>();
        write!(f, "{}", words.join(", "))?;
        if self.bingo {
            write!(f, ", bingo {}", BINGO_BONUS)?;
        }
        write!(f, " = {}", self.total)
    }
}

/// Score `words` on `board` for a move that placed `tiles_placed` tiles,
/// and consume the multipliers of every square in the words.
///
/// Words are scored in the given order, as returned by [`word_set`](crate::word_set).
///
/// Squares without a tile contribute nothing; the words come from
/// [`word_set`](crate::word_set) so every square in them holds a tile.
/// ## Examples
/// ```
/// # use scrabble_engine::{score_words, word_set, Board, Location, Tile, Error};
/// let mut board = Board::default();
/// let locations = [Location::new('a', 1), Location::new('b', 1)];
/// board.place(locations[0], Tile::new('a', 1))?;
/// board.place(locations[1], Tile::new('x', 8))?;
/// let words = word_set(&board, &locations);
/// // a1 is a triple word square
/// assert_eq!(score_words(&mut board, &words, 2).total, 27);
/// // and it is used up now
/// assert_eq!(score_words(&mut board, &words, 2).total, 9);
/// # Ok::<(), Error>(())
/// ```
pub fn score_words(board: &mut Board, words: &[WordLocations], tiles_placed: usize) -> MoveScore {
    let mut scores = Vec::with_capacity(words.len());
    for word in words {
        let mut letter_score = 0;
        let mut word_multiplier = 1;
        for location in word.iter() {
            let square = match board.square_mut(*location) {
                Some(square) => square,
                None => continue,
            };
            if let Some(tile) = square.tile {
                letter_score += square.letter_multiplier * tile.points();
                word_multiplier *= square.word_multiplier;
            }
            square.consume_multipliers();
        }
        scores.push(WordScore {
            word: word.text(board),
            locations: word.clone(),
            score: letter_score * word_multiplier,
        });
    }

    let bingo = tiles_placed == RACK_SIZE;
    let mut total: u32 = scores.iter().map(|w| w.score).sum();
    if bingo {
        total += BINGO_BONUS;
    }
    MoveScore {
        words: scores,
        bingo,
        total,
    }
}
