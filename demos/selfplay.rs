//! Two players place single tiles greedily until somebody plays out.
//!
//! Run with `RUST_LOG=scrabble_engine=debug` to follow every turn.
use anyhow::Result;
use scrabble_engine::{adjacent_locations, Game, GameConfig, Location, Move, N};
use std::env;
use tracing_subscriber::EnvFilter;

fn candidates(game: &Game) -> Vec<Move> {
    let board = game.board();
    let rack = game.rack(game.player_to_move());
    let mut letters: Vec<char> = rack.iter().map(|t| t.letter()).collect();
    letters.sort_unstable();
    letters.dedup();
    let mut moves = Vec::new();
    for row in 1..=N as i32 {
        for col in b'a'..=b'o' {
            let location = Location::new(col as char, row);
            if board.is_occupied(location) {
                continue;
            }
            let anchored = (game.move_number() == 0 && location == game.config().start())
                || adjacent_locations(location).any(|l| board.is_occupied(l));
            if anchored {
                moves.extend(letters.iter().map(|&letter| Move::new(vec![(letter, location)])));
            }
        }
    }
    moves
}

/// Try every candidate on a copy of the game and keep the highest scoring one.
fn best_move(game: &Game) -> Option<(Move, u32)> {
    candidates(game)
        .into_iter()
        .filter_map(|mv| {
            let mut trial = game.clone();
            let turn = trial.propose_move(&mv).ok()?;
            Some((mv, turn.score.total))
        })
        .max_by_key(|(_, score)| *score)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };
    let mut game = Game::seeded(2, GameConfig::default(), seed)?;
    while !game.is_concluded() {
        match best_move(&game) {
            Some((mv, _)) => {
                let player = game.player_to_move();
                let turn = game.propose_move(&mv)?;
                println!("player {} plays {}: {}", player, mv, turn.score);
            }
            None => {
                game.conclude();
            }
        }
    }
    println!("{}", game);
    if let Some(outcome) = game.outcome() {
        println!("{}", outcome);
    }
    Ok(())
}
