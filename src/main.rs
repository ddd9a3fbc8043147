//! Reversi engine demo
//!
//! Prints the opening position, lets the search agent pick Black's first
//! move and shows the result. Set `RUST_LOG=debug` to see search statistics.

use reversi::{Agent, Board, Color, SearchAgent, SearchConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut board = Board::new();
    println!("{board}");

    let mut agent = SearchAgent::new(SearchConfig::default());
    let color = Color::Black;

    match agent.propose_move(&board, color) {
        Some(mov) => {
            let flipped = board.apply_move(mov, color)?;
            info!(%color, mov = %mov, flipped, "move played");
            if let Some(result) = agent.last_result() {
                info!(
                    score = result.search.score,
                    nodes = result.search.nodes,
                    time_ms = result.time_ms,
                    "search stats"
                );
            }
            println!("{board}");
        }
        None => info!(%color, "no legal move"),
    }

    let (white, black) = board.piece_counts();
    println!("White {white}  Black {black}");
    Ok(())
}
