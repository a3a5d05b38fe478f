use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use bellhop::api::{ApiClient, spawn_worker};
use bellhop::app::App;
use bellhop::cli::Cli;
use bellhop::config;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Log to stderr in debug builds; RUST_LOG controls the filter
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // Config file, then environment, then flags; later sources win
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    config::env_secret_overrides(&mut config);
    cli.apply_overrides(&mut config);

    let client = ApiClient::from_config(&config)?;
    let server_label = client.base_url().to_string();

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (event_tx, event_rx) = std::sync::mpsc::channel();
    let worker = spawn_worker(client, request_rx, event_tx);

    let mut app = App::new(&config, server_label, Instant::now());
    app.set_channels(request_tx, event_rx);
    app.announce_startup(Instant::now());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    // Dropping the app closes the request channel, which stops the worker
    drop(app);
    let _ = worker.join();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, tick timers, drain worker events
        app.handle_events()?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
