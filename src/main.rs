//! Reflex Rush - Entry Point
//!
//! Initializes logging and the terminal, wires the round engine to the
//! display and audio, and runs the event loop.

use std::io;
use std::time::Duration;
use std::fs::OpenOptions;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use reflex_rush::audio::AudioManager;
use reflex_rush::config::Settings;
use reflex_rush::input::{map_event, ShakeDetector};
use reflex_rush::ui::{App, Display};

fn main() -> Result<()> {
    // Log to a file so the TUI stays clean
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("reflex-rush.log")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();

    log::info!("Starting Reflex Rush v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();

    let audio = if settings.audio_enabled {
        let mut audio = AudioManager::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        Some(audio)
    } else {
        log::info!("Audio disabled by settings");
        None
    };

    let mut app = App::with_seed(
        settings.seed,
        Display::new(audio),
        ShakeDetector::new(settings.shake_threshold),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, Duration::from_millis(settings.tick_rate_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!(
        "Reflex Rush shut down at level {} with score {}",
        app.engine().level(),
        app.engine().score()
    );
    result
}

/// Draw, wait for input, apply it; until the player quits
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let event = event::read()?;
        if let Some(action) = map_event(&event) {
            if app.handle_action(action) {
                break;
            }
        }
    }

    Ok(())
}
