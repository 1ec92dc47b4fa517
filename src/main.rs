use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use chess_session::core::{
    default_settings_path, init_logging, load_settings, save_settings, GlyphStyle,
};
use chess_session::game::GameSession;
use chess_session::rendering::BoardRenderer;
use chess_session::ui::TerminalUi;

/// Two-player chess in the terminal
#[derive(Debug, Parser)]
#[command(name = "chess-session", version, about)]
struct Cli {
    /// Draw pieces as letters instead of Unicode symbols
    #[arg(long)]
    ascii: bool,

    /// Hide rank and file labels
    #[arg(long)]
    no_coordinates: bool,

    /// Draw the board from Black's side while Black is to move
    #[arg(long)]
    flip: bool,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log).context("failed to initialise logging")?;

    let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
    let mut settings = load_settings(&settings_path);
    if cli.ascii {
        settings.glyphs = GlyphStyle::Ascii;
    }
    if cli.no_coordinates {
        settings.show_coordinates = false;
    }
    if cli.flip {
        settings.flip_for_black = true;
    }

    if cli.save_settings {
        save_settings(&settings_path, &settings)
            .with_context(|| format!("failed to save settings to {}", settings_path.display()))?;
    }

    info!("[SESSION] Starting with {:?}", settings);
    let mut session: GameSession = GameSession::new();
    let stdin = io::stdin();
    let mut ui = TerminalUi::new(
        stdin.lock(),
        io::stdout(),
        BoardRenderer::from_settings(&settings),
    );
    ui.run(&mut session).context("terminal I/O failed")?;
    Ok(())
}
