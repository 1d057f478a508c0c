//! A scrabble move engine for Rust.
//! <br>
//! This crate decides whether a proposed placement of tiles is legal, finds the words it forms,
//! scores them on a board with premium squares, and keeps track of racks, the tile bag and
//! the turns of a game between two or more players.
//! Words are not checked against a dictionary: every run of two or more tiles counts as a word.
//!
//! # How to use `scrabble_engine`
//! Start by creating a [`GameConfig`](crate::GameConfig), then a [`Game`](crate::Game) for the number of players.
//! By default the english tile distribution and the standard grid are used, with the first move
//! anchored on the centre square `h8`.
//! Tiles are drawn with an injected random source; [`Game::seeded`](crate::Game::seeded)
//! gives a reproducible game.
//!
//! # Basic usage
//!  ```
//! # use scrabble_engine::{Axis, Game, GameConfig, Location, Move, Error};
//! let mut game = Game::seeded(2, GameConfig::default(), 7)?;
//! game.set_rack(0, "quietly")?;
//! let mv = Move::along("quiet", Location::new('h', 8), Axis::Vertical);
//! let turn = game.propose_move(&mv)?;
//! println!("{}", turn.score);
//! if game.propose_exchange(&['z']).is_err() {
//!     println!("player 2 has no Z");
//! }
//! println!("{}", game);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod config;
mod error;
mod game;
mod geometry;
mod grid;
mod location;
mod moves;
mod rack;
mod scoring;
mod tilebag;
mod tiles;
mod tilesets;

pub use crate::board::{Board, Square};
pub use crate::config::GameConfig;
pub use crate::error::Error;
pub use crate::game::{Game, Outcome, Status, Turn, EXCHANGE_RESERVE};
pub use crate::geometry::{
    adjacent_locations, word_location_set, word_set, Axis, Direction, WordLocations,
};
pub use crate::grid::{Bonus, Grid};
pub use crate::location::{Location, N};
pub use crate::moves::{check_move, move_is_legal, IllegalMove, Move};
pub use crate::rack::{Rack, RACK_SIZE};
pub use crate::scoring::{score_words, MoveScore, WordScore, BINGO_BONUS};
pub use crate::tilebag::TileBag;
pub use crate::tiles::Tile;
pub use crate::tilesets::{Language, TileInfo, TileSet};
