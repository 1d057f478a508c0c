use anyhow::Result;
use scrabble_engine::{Axis, Game, GameConfig, Location};

fn main() -> Result<()> {
    let mut game = Game::seeded(2, GameConfig::default(), 7)?;
    game.set_rack(0, "cat")?;
    let turn = game.play_word("cat", Location::new('g', 8), Axis::Horizontal)?;
    println!("{}", turn.score);

    // player 2 swaps the first three tiles on the rack
    let letters: Vec<char> = game.rack(1).iter().take(3).map(|t| t.letter()).collect();
    game.propose_exchange(&letters)?;
    println!("player 2 exchanged {:?}", letters);

    println!("{}", game);
    let outcome = game.conclude();
    println!("{}", outcome);
    Ok(())
}
