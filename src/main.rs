use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::PlayMode;

/// Steer with the arrow keys; q, Esc or Ctrl+C quits.
///
/// Logs go to stderr (filter with RUST_LOG), the board to stdout.
#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut play_mode = PlayMode::new(GameConfig::default());
    play_mode.run().await?;

    Ok(())
}
