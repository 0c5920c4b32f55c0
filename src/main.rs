use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_tui::game::{Difficulty, GameConfig};
use snake_tui::modes::HumanMode;
use snake_tui::store::JsonFileStore;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Terminal snake on a wraparound board")]
struct Cli {
    /// Speed preset
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// Side length of the square board (at least 2)
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(2..))]
    board_size: u16,

    /// Number of obstacle cells
    #[arg(long, default_value = "5")]
    obstacles: usize,

    /// High-score save file
    #[arg(long, default_value = "snake_save.json")]
    save_file: String,

    /// Log file (the terminal itself belongs to the game)
    #[arg(long, default_value = "snake-tui.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout/stderr, so logs go to a file
    let log_writer = tracing_appender::rolling::never(".", &cli.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(log_writer);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = GameConfig {
        board_size: usize::from(cli.board_size),
        obstacle_count: cli.obstacles,
        ..Default::default()
    };
    info!(
        difficulty = ?cli.difficulty,
        board_size = config.board_size,
        obstacles = config.obstacle_count,
        "starting game"
    );

    let store = Box::new(JsonFileStore::new(&cli.save_file));

    let mut mode = HumanMode::new(config, cli.difficulty, store);
    mode.run().await?;

    Ok(())
}
