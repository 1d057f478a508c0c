use crate::geometry::{word_set, Axis};
use crate::moves::{check_move, Move};
use crate::rack::{Rack, RACK_SIZE};
use crate::scoring::{score_words, MoveScore};
use crate::tilebag::TileBag;
use crate::{Board, Error, GameConfig, Location, Tile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// Exchanges are only allowed while the bag holds at least this many tiles.
pub const EXCHANGE_RESERVE: usize = 7;

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Index of the winning player. Ties go to the lowest index.
    pub winner: usize,
    /// Final score of the winner
    pub score: i32,
    /// Final score of every player
    pub totals: Vec<i32>,
    /// The player that ended the game by playing out, if any
    pub emptied_by: Option<usize>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Game over! Player {} wins with a score of {}",
            self.winner + 1,
            self.score
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Concluded(Outcome),
}

/// Result of an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Index of the player that moved
    pub player: usize,
    /// The words formed and their points
    pub score: MoveScore,
    /// Number of tiles drawn to refill the rack
    pub drawn: usize,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// A game of scrabble: the board, a rack per player, the tile bag, and the score history.
///
/// Tiles are drawn with the random source `R`; use [`Game::seeded`] for a reproducible game.
/// ## Examples
/// ```
/// # use scrabble_engine::{Axis, Game, GameConfig, Location, Error};
/// let mut game = Game::seeded(2, GameConfig::default(), 42)?;
/// game.set_rack(0, "catsdog")?;
/// let turn = game.play_word("cat", Location::new('g', 8), Axis::Horizontal)?;
/// assert_eq!(turn.score.total, 5);
/// assert_eq!(game.move_number(), 1);
/// assert_eq!(game.player_to_move(), 1);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    board: Board,
    racks: Vec<Rack>,
    bag: TileBag,
    move_number: usize,
    scores: Vec<Vec<i32>>,
    status: Status,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game that draws tiles with a `StdRng` seeded with `seed`.
    /// ## Errors
    /// See [`Game::new`].
    pub fn seeded(num_players: usize, config: GameConfig, seed: u64) -> Result<Self, Error> {
        Game::new(num_players, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with an empty board, a full bag, and deal 7 tiles to every player.
    /// ## Errors
    /// - If there are fewer than 2 players.
    /// - If the tile set has too few tiles to fill every rack.
    pub fn new(num_players: usize, config: GameConfig, mut rng: R) -> Result<Self, Error> {
        if num_players < 2 {
            return Err(Error::InvalidPlayerCount(num_players));
        }
        let needed = num_players * RACK_SIZE;
        let available = config.tileset().total();
        if available < needed {
            return Err(Error::NotEnoughTiles { available, needed });
        }
        let mut bag = TileBag::from(config.tileset());
        let mut racks = vec![Rack::new(); num_players];
        for rack in racks.iter_mut() {
            refill(rack, &mut bag, &mut rng);
        }
        Ok(Game {
            board: Board::new(config.grid()),
            config,
            racks,
            bag,
            move_number: 0,
            scores: vec![Vec::new(); num_players],
            status: Status::InProgress,
            rng,
        })
    }

    pub fn num_players(&self) -> usize {
        self.racks.len()
    }

    /// Number of accepted moves and exchanges so far
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Index of the player whose turn it is
    pub fn player_to_move(&self) -> usize {
        self.move_number % self.num_players()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Rack of `player`.
    /// ## Panics
    /// If `player` is not a valid player index.
    pub fn rack(&self, player: usize) -> &Rack {
        &self.racks[player]
    }

    /// Score history of `player`: one entry per move, plus the end of game adjustments.
    pub fn scores(&self, player: usize) -> &[i32] {
        &self.scores[player]
    }

    /// Sum of the score history of `player`
    pub fn total_score(&self, player: usize) -> i32 {
        self.scores[player].iter().sum()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.status, Status::Concluded(_))
    }

    /// The outcome once the game has concluded
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.status {
            Status::Concluded(outcome) => Some(outcome),
            Status::InProgress => None,
        }
    }

    fn ensure_in_progress(&self) -> Result<(), Error> {
        if self.is_concluded() {
            return Err(Error::GameOver);
        }
        Ok(())
    }

    /// Check if `mv` would be accepted for the player to move.
    pub fn move_is_legal(&self, mv: &Move) -> bool {
        !self.is_concluded()
            && check_move(
                &self.board,
                mv,
                &self.racks[self.player_to_move()],
                self.move_number,
                self.config.start(),
            )
            .is_ok()
    }

    /// Play `mv` for the player to move.
    ///
    /// The tiles go from the rack to the board, the words formed are scored, and the
    /// rack is refilled from the bag. When the rack and the bag are both empty
    /// afterwards, the game concludes.
    /// ## Errors
    /// - [`Error::IllegalMove`] if the move breaks a rule; nothing changes.
    /// - [`Error::GameOver`] if the game has concluded.
    pub fn propose_move(&mut self, mv: &Move) -> Result<Turn, Error> {
        self.ensure_in_progress()?;
        let player = self.player_to_move();
        if let Err(reason) = check_move(
            &self.board,
            mv,
            &self.racks[player],
            self.move_number,
            self.config.start(),
        ) {
            debug!(player = player + 1, %mv, %reason, "move rejected");
            return Err(reason.into());
        }

        let rack = &mut self.racks[player];
        for &(letter, location) in mv.placements() {
            let tile = rack
                .take(letter)
                .ok_or_else(|| Error::NotInRack(letter.to_string()))?;
            self.board.place(location, tile)?;
        }
        let drawn = refill(rack, &mut self.bag, &mut self.rng);

        let words = word_set(&self.board, &mv.locations());
        let score = score_words(&mut self.board, &words, mv.len());
        self.scores[player].push(score.total as i32);
        self.move_number += 1;
        info!(player = player + 1, %mv, %score, "move played");

        let outcome = if self.racks[player].is_empty() && self.bag.is_empty() {
            Some(self.finish(Some(player)))
        } else {
            None
        };
        Ok(Turn {
            player,
            score,
            drawn,
            outcome,
        })
    }

    /// Play `word` from `start` along `axis`. Squares that already hold the letter of the
    /// word are skipped, the other letters are placed from the rack.
    /// ## Errors
    /// - [`Error::TilePlacementError`] if the word does not fit on the board.
    /// - [`Error::TileReplaceError`] if the word crosses a different letter on the board.
    /// - Any error of [`propose_move`](Game::propose_move).
    pub fn play_word(&mut self, word: &str, start: Location, axis: Axis) -> Result<Turn, Error> {
        let laid = Move::along(word, start, axis);
        if laid.locations().iter().any(|l| !l.is_on_board()) {
            return Err(Error::TilePlacementError {
                start,
                len: laid.len(),
            });
        }
        let mut placements = Vec::new();
        for &(letter, location) in laid.placements() {
            match self.board.tile_at(location) {
                None => placements.push((letter, location)),
                Some(tile) if tile.letter() == letter => {}
                Some(_) => return Err(Error::TileReplaceError(location)),
            }
        }
        self.propose_move(&Move::new(placements))
    }

    /// Exchange tiles with `letters` for new tiles from the bag. Uses the player's turn.
    /// ## Errors
    /// - [`Error::BagTooSmall`] if the bag holds fewer than 7 tiles.
    /// - [`Error::TooManyLetters`] if more than 7 letters are named.
    /// - [`Error::NotInRack`] if the letters are not all on the rack.
    /// - [`Error::GameOver`] if the game has concluded.
    ///
    /// Nothing changes when an error is returned.
    pub fn propose_exchange(&mut self, letters: &[char]) -> Result<(), Error> {
        self.ensure_in_progress()?;
        let player = self.player_to_move();
        let checked = if self.bag.len() < EXCHANGE_RESERVE {
            Err(Error::BagTooSmall(self.bag.len()))
        } else if letters.len() > RACK_SIZE {
            Err(Error::TooManyLetters(letters.len()))
        } else if !self.racks[player].holds(letters) {
            Err(Error::NotInRack(letters.iter().collect()))
        } else {
            Ok(())
        };
        if let Err(err) = checked {
            debug!(player = player + 1, %err, "exchange rejected");
            return Err(err);
        }

        let rack = &mut self.racks[player];
        let exchanged: Vec<Tile> = letters.iter().filter_map(|&l| rack.take(l)).collect();
        refill(rack, &mut self.bag, &mut self.rng);
        self.bag.put_back(exchanged);
        self.move_number += 1;
        info!(player = player + 1, count = letters.len(), "tiles exchanged");
        Ok(())
    }

    /// End the game now. Every player loses the points of the tiles left on their rack.
    /// Returns the outcome; a concluded game returns its existing outcome.
    pub fn conclude(&mut self) -> Outcome {
        match &self.status {
            Status::Concluded(outcome) => outcome.clone(),
            Status::InProgress => self.finish(None),
        }
    }

    fn finish(&mut self, emptied_by: Option<usize>) -> Outcome {
        let mut all_rack_points = 0;
        for (rack, scores) in self.racks.iter().zip(self.scores.iter_mut()) {
            let points = rack.points() as i32;
            scores.push(-points);
            all_rack_points += points;
        }
        if let Some(player) = emptied_by {
            self.scores[player].push(all_rack_points);
        }

        let totals: Vec<i32> = (0..self.num_players())
            .map(|player| self.total_score(player))
            .collect();
        let mut winner = 0;
        for (player, &total) in totals.iter().enumerate() {
            if total > totals[winner] {
                winner = player;
            }
        }
        let outcome = Outcome {
            winner,
            score: totals[winner],
            totals,
            emptied_by,
        };
        info!("{}", outcome);
        self.status = Status::Concluded(outcome.clone());
        outcome
    }

    /// Replace the rack of `player` with tiles for `letters`, taken from the bag.
    /// The old tiles go back to the bag first. Useful to set up a position.
    /// ## Errors
    /// - [`Error::TooManyLetters`] if more than 7 letters are named.
    /// - [`Error::NotInBag`] if the bag and the old rack together lack a letter;
    ///   the rack is left unchanged.
    pub fn set_rack(&mut self, player: usize, letters: &str) -> Result<(), Error> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.len() > RACK_SIZE {
            return Err(Error::TooManyLetters(letters.len()));
        }
        let mut bag = self.bag.clone();
        bag.put_back(self.racks[player].iter().copied());
        let mut rack = Rack::new();
        for &letter in &letters {
            let tile = bag
                .take(letter)
                .ok_or_else(|| Error::NotInBag(letters.iter().collect()))?;
            rack.push(tile);
        }
        self.bag = bag;
        self.racks[player] = rack;
        Ok(())
    }
}

/// Draw tiles until `rack` is full or `bag` is empty. Returns the number of tiles drawn.
fn refill<R: Rng + ?Sized>(rack: &mut Rack, bag: &mut TileBag, rng: &mut R) -> usize {
    let mut drawn = 0;
    while !rack.is_full() {
        match bag.draw(rng) {
            Some(tile) => {
                rack.push(tile);
                drawn += 1;
            }
            None => break,
        }
    }
    drawn
}

/// Human readable state: board, racks, move count, whose turn, tiles left and scores.
impl<R> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        for (i, rack) in self.racks.iter().enumerate() {
            writeln!(f, "Player {} rack: {}", i + 1, rack)?;
        }
        writeln!(f, "Moves played: {}", self.move_number)?;
        writeln!(
            f,
            "Player {}'s move",
            self.move_number % self.racks.len() + 1
        )?;
        write!(f, "{} tiles remain in bag", self.bag.len())?;
        for (i, scores) in self.scores.iter().enumerate() {
            write!(f, "\nPlayer {}: {}", i + 1, scores.iter().sum::<i32>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IllegalMove, Language, TileSet};

    type Result<T> = std::result::Result<T, Error>;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    fn game() -> Game {
        Game::seeded(2, GameConfig::default(), 123).unwrap()
    }

    fn tiles_in_play<R: Rng>(game: &Game<R>) -> usize {
        game.bag().len()
            + (0..game.num_players())
                .map(|p| game.rack(p).len())
                .sum::<usize>()
            + game.board().tile_count()
    }

    fn sorted_letters(tiles: &[Tile]) -> Vec<char> {
        let mut letters: Vec<char> = tiles.iter().map(|t| t.letter()).collect();
        letters.sort_unstable();
        letters
    }

    /// Empty the bag except for `keep` tiles, by moving them out of the game.
    fn drain_bag<R: Rng>(game: &mut Game<R>, keep: usize) {
        let mut rng = StdRng::seed_from_u64(0);
        while game.bag.len() > keep {
            game.bag.draw(&mut rng);
        }
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.num_players(), 2);
        assert_eq!(game.rack(0).len(), 7);
        assert_eq!(game.rack(1).len(), 7);
        assert_eq!(game.bag().len(), 98 - 14);
        assert_eq!(tiles_in_play(&game), 98);
        assert_eq!(game.player_to_move(), 0);
        assert!(!game.is_concluded());
    }

    #[test]
    fn test_new_game_errors() {
        assert_eq!(
            Game::seeded(1, GameConfig::default(), 1).err(),
            Some(Error::InvalidPlayerCount(1))
        );
        let tileset = TileSet::from_tiles(&[('a', 10, 1)]).unwrap();
        let config = GameConfig::default().with_tileset(tileset);
        assert_eq!(
            Game::seeded(2, config, 1).err(),
            Some(Error::NotEnoughTiles {
                available: 10,
                needed: 14
            })
        );
    }

    #[test]
    fn test_cat_on_start() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "catsdog")?;
        let mv = Move::along("cat", loc("g8"), Axis::Horizontal);
        assert!(game.move_is_legal(&mv));
        let turn = game.propose_move(&mv)?;
        assert_eq!(turn.player, 0);
        assert_eq!(turn.score.words.len(), 1);
        assert_eq!(turn.score.words[0].word, "CAT");
        assert_eq!(turn.score.total, 3 + 1 + 1);
        assert_eq!(turn.drawn, 3);
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.rack(0).len(), 7);
        assert_eq!(game.scores(0), &[5]);
        assert_eq!(tiles_in_play(&game), 98);
        Ok(())
    }

    #[test]
    fn test_illegal_move_changes_nothing() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "catsdog")?;
        let before = game.clone();
        let mv = Move::along("cat", loc("a1"), Axis::Horizontal);
        assert_eq!(
            game.propose_move(&mv),
            Err(Error::IllegalMove(IllegalMove::MissesStart(loc("h8"))))
        );
        let mv = Move::along("zoo", loc("h8"), Axis::Horizontal);
        assert!(matches!(
            game.propose_move(&mv),
            Err(Error::IllegalMove(IllegalMove::NotInRack(_)))
        ));
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.rack(0), before.rack(0));
        assert_eq!(game.bag(), before.bag());
        Ok(())
    }

    #[test]
    fn test_turns_alternate() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "catsdog")?;
        game.play_word("cat", loc("g8"), Axis::Horizontal)?;
        assert_eq!(game.player_to_move(), 1);
        game.set_rack(1, "hope")?;
        // the second player uses the A on the board
        let turn = game.play_word("hat", loc("h7"), Axis::Vertical);
        assert!(turn.is_err());
        let turn = game.play_word("ha", loc("h7"), Axis::Vertical)?;
        assert_eq!(turn.player, 1);
        assert_eq!(turn.score.words[0].word, "HA");
        assert_eq!(game.player_to_move(), 0);
        assert_eq!(tiles_in_play(&game), 98);
        Ok(())
    }

    #[test]
    fn test_play_word_errors() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "catsdog")?;
        assert_eq!(
            game.play_word("dogs", loc("m8"), Axis::Horizontal),
            Err(Error::TilePlacementError {
                start: loc("m8"),
                len: 4
            })
        );
        game.play_word("cat", loc("g8"), Axis::Horizontal)?;
        game.set_rack(1, "dogs")?;
        assert_eq!(
            game.play_word("dog", loc("h7"), Axis::Vertical),
            Err(Error::TileReplaceError(loc("h8")))
        );
        Ok(())
    }

    #[test]
    fn test_multiplier_single_use() -> Result<()> {
        let config = GameConfig::default().with_start(loc("a1"));
        let mut game = Game::seeded(2, config, 5)?;
        game.set_rack(0, "ox")?;
        let turn = game.play_word("ox", loc("a1"), Axis::Horizontal)?;
        // a1 is a triple word square
        assert_eq!(turn.score.total, 27);
        game.set_rack(1, "en")?;
        let turn = game.play_word("oxen", loc("a1"), Axis::Horizontal)?;
        // a1 counts at face value now, d1 doubles the N
        assert_eq!(turn.score.total, 1 + 8 + 1 + 2);
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "quietly")?;
        let turn = game.play_word("quietly", loc("e8"), Axis::Horizontal)?;
        assert!(turn.score.bingo);
        assert_eq!(turn.score.total, 19 + 50);

        let mut game = self::game();
        game.set_rack(0, "quiets")?;
        let turn = game.play_word("quiets", loc("e8"), Axis::Horizontal)?;
        assert!(!turn.score.bingo);
        assert_eq!(turn.score.total, 15);
        Ok(())
    }

    #[test]
    fn test_exchange() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "qvvwwxz")?;
        game.propose_exchange(&['q', 'v'])?;
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.rack(0).len(), 7);
        assert_eq!(game.bag().len(), 98 - 14);
        assert_eq!(tiles_in_play(&game), 98);
        assert!(game.scores(0).is_empty());
        assert_eq!(game.player_to_move(), 1);
        Ok(())
    }

    #[test]
    fn test_exchange_errors() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "abcdeff")?;
        let before = game.clone();
        assert_eq!(
            game.propose_exchange(&['f', 'f', 'f']),
            Err(Error::NotInRack(String::from("fff")))
        );
        assert_eq!(
            game.propose_exchange(&['a'; 8]),
            Err(Error::TooManyLetters(8))
        );
        assert_eq!(game.rack(0), before.rack(0));
        assert_eq!(game.bag(), before.bag());
        assert_eq!(game.move_number(), 0);
        Ok(())
    }

    #[test]
    fn test_exchange_reserve() -> Result<()> {
        let mut game = game();
        drain_bag(&mut game, 6);
        assert_eq!(game.propose_exchange(&[]), Err(Error::BagTooSmall(6)));
        let letter = game.rack(0)[0].letter();
        assert_eq!(game.propose_exchange(&[letter]), Err(Error::BagTooSmall(6)));

        let mut game = self::game();
        drain_bag(&mut game, 7);
        let letter = game.rack(0)[0].letter();
        let rack_before = sorted_letters(&game.rack(0));
        let bag_before = sorted_letters(game.bag());
        game.propose_exchange(&[letter])?;
        assert_eq!(game.bag().len(), 7);
        assert_eq!(game.rack(0).len(), 7);

        // one tile swapped: the rack lost `letter` and gained the drawn tile,
        // and the bag holds `letter` instead of the drawn tile
        let mut drawn = sorted_letters(&game.rack(0));
        let mut kept = rack_before;
        kept.remove(kept.iter().position(|&l| l == letter).unwrap());
        for l in kept {
            drawn.remove(drawn.iter().position(|&d| d == l).unwrap());
        }
        assert_eq!(drawn.len(), 1);
        let mut bag_expected = bag_before;
        bag_expected.remove(bag_expected.iter().position(|&l| l == drawn[0]).unwrap());
        bag_expected.push(letter);
        bag_expected.sort_unstable();
        assert_eq!(sorted_letters(game.bag()), bag_expected);
        assert!(game.bag().letters().count_of(&letter) >= 1);
        Ok(())
    }

    #[test]
    fn test_play_out() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "cat")?;
        game.set_rack(1, "qz")?;
        drain_bag(&mut game, 0);
        let turn = game.play_word("cat", loc("g8"), Axis::Horizontal)?;
        let outcome = turn.outcome.expect("game should be over");
        assert_eq!(outcome.emptied_by, Some(0));
        // player 1 loses 20, player 0 gains 20
        assert_eq!(game.scores(0), &[5, 0, 20]);
        assert_eq!(game.scores(1), &[-20]);
        assert_eq!(outcome.totals, vec![25, -20]);
        assert_eq!(outcome.winner, 0);
        assert_eq!(outcome.to_string(), "Game over! Player 1 wins with a score of 25");
        assert_eq!(game.outcome(), Some(&outcome));
        assert_eq!(
            game.propose_move(&Move::default()),
            Err(Error::GameOver)
        );
        assert_eq!(game.propose_exchange(&[]), Err(Error::GameOver));
        Ok(())
    }

    #[test]
    fn test_conclude() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "cat")?;
        game.set_rack(1, "cat")?;
        let outcome = game.conclude();
        // a tie goes to the first player
        assert_eq!(outcome.totals, vec![-5, -5]);
        assert_eq!(outcome.winner, 0);
        assert_eq!(outcome.emptied_by, None);
        assert!(game.is_concluded());
        assert_eq!(game.conclude(), outcome);
        assert_eq!(game.scores(0), &[-5]);
        Ok(())
    }

    #[test]
    fn test_set_rack_errors() -> Result<()> {
        let mut game = game();
        let before = *game.rack(0);
        assert_eq!(game.set_rack(0, "abcdefgh"), Err(Error::TooManyLetters(8)));
        assert_eq!(game.set_rack(0, "qq"), Err(Error::NotInBag(String::from("qq"))));
        assert_eq!(game.rack(0), &before);
        assert_eq!(tiles_in_play(&game), 98);
        Ok(())
    }

    #[test]
    fn test_dutch_game() -> Result<()> {
        let game = Game::seeded(4, GameConfig::new(Language::NL), 9)?;
        assert_eq!(game.bag().len(), 100 - 28);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let mut game = game();
        game.set_rack(0, "catsdog")?;
        game.play_word("cat", loc("g8"), Axis::Horizontal)?;
        let repr = game.to_string();
        println!("{}", repr);
        assert!(repr.contains("Moves played: 1"));
        assert!(repr.contains("Player 2's move"));
        assert!(repr.contains("81 tiles remain in bag"));
        assert!(repr.ends_with("Player 1: 5\nPlayer 2: 0"));
        Ok(())
    }
}
