use minesweeper_client::{MinesweeperGame, NewGameRequest};

#[tokio::main]
async fn main() -> minesweeper_client::Result<()> {
    tracing_subscriber::fmt::init();

    let server_url =
        std::env::var("MINESWEEPER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let mut game = MinesweeperGame::new(&server_url)?;

    let view = game
        .start_game(NewGameRequest {
            width: 8,
            height: 8,
            mines_count: 10,
        })
        .await?;
    println!("Game started! Game ID: {}", view.game_id());

    // Reveal cells top-left to bottom-right until the game ends
    loop {
        let Some((col, row)) = game.state().and_then(|view| view.hidden_cells().next()) else {
            break;
        };

        let view = game.reveal(col, row).await?;
        for line in &view.info().field {
            println!("|{}|", line.concat());
        }
        println!();

        if view.is_game_over() {
            if view.is_won() {
                println!("You won!");
            } else {
                println!("Game over!");
            }
            break;
        }
    }

    Ok(())
}
