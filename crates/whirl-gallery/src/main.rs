use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whirl_core::AppConfig;

mod app;
mod event;
mod ui;

use app::{handle_key_event, App};
use event::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "whirl")]
#[command(version, about = "An infinitely wrapping card gallery driven by fling physics")]
struct Cli {
    /// Fling friction coefficient; 0 spins forever
    #[arg(short, long)]
    friction: Option<f32>,

    /// Animation tick interval in milliseconds
    #[arg(short, long)]
    tick_rate: Option<u64>,

    /// Number of cards in the gallery
    #[arg(short = 'n', long)]
    items: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration, then apply CLI overrides
    let mut config = AppConfig::load()?;
    if let Some(friction) = cli.friction {
        config.scroller.friction = friction;
    }
    if let Some(tick_rate) = cli.tick_rate {
        config.ui.tick_rate_ms = tick_rate.max(1);
    }
    if let Some(items) = cli.items {
        config.ui.item_count = items.max(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Whirl"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let events = EventHandler::new(config.ui.tick_rate_ms);

    loop {
        match events.next()? {
            Some(AppEvent::Key(key)) => {
                app.apply(handle_key_event(key));
            }
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        // Advance the scroll animation before drawing
        app.update();

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.should_quit {
            return Ok(());
        }
    }
}
