use clap::Parser;
use color_eyre::eyre::Result;

use claimdesk::{
    core::state::AppState,
    infrastructure::{cli::Cli, clipboard::SystemClipboard, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;
    let (tick_rate, frame_rate) = args.resolve_rates(config.tick_rate, config.frame_rate);
    log::info!("Starting with tick rate {tick_rate} and frame rate {frame_rate}");

    let tui = RealTui::new()?.tick_rate(tick_rate).frame_rate(frame_rate);
    let mut runner = AppRunner::new(
        AppState::new_with_config(config),
        tui,
        Box::new(SystemClipboard),
    );
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
