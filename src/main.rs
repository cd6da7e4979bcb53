use anyhow::Result;
use tracing::info;

use tabiya_core::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("tabiya starting");
    let game = Game::new();
    println!("{}", game.board().pretty());
    println!("{} to move", game.turn());
    Ok(())
}
