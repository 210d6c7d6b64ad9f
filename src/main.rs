use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use kibitz::advisor::{AdvisorKind, MoveAdvisor};
use kibitz::app::App;
use kibitz::capture::CommandCapture;
use kibitz::config::Config;
use kibitz::session::Session;

#[derive(Parser)]
#[command(name = "kibitz", version, about = "Screen-watching move advisor for Klondike Solitaire")]
struct Cli {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // A misconfigured advisor still gets a running UI; the error surfaces
    // on the first start attempt instead of refusing to launch.
    let advisor = AdvisorKind::from_config(&config.advisor)
        .map(|kind| Box::new(kind) as Box<dyn MoveAdvisor>);
    let backend = CommandCapture::new(config.capture.command.clone(), config.capture.args.clone());
    let session = Session::with_worker(Box::new(backend), advisor);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, App::new(session));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a short timeout so the session keeps pumping advisor
        // responses even when the keyboard is idle
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
