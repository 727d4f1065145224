use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::ui::{App, Console, Interface};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override how many discs in a row win
    #[arg(long)]
    win: Option<usize>,

    /// Use the line-based console instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Disable coloured discs
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(cols) = cli.cols {
        app_config.board.cols = cols;
    }
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(win) = cli.win {
        app_config.board.required_to_win = win;
    }
    if cli.console {
        app_config.display.interface = Interface::Console;
    }
    if cli.no_color {
        app_config.display.color = false;
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&app_config)?);
        return Ok(());
    }

    let state = GameState::new(app_config.board).context("invalid board configuration")?;
    log::debug!(
        "starting {:?} interface with {:?}",
        app_config.display.interface,
        app_config.board
    );

    match app_config.display.interface {
        Interface::Console => {
            let stdin = io::stdin();
            Console::new(state, stdin.lock(), io::stdout())
                .with_color(app_config.display.color)
                .run()
                .context("console session failed")
        }
        Interface::Tui => {
            run_tui(App::new(state, app_config.display.color)).context("terminal UI failed")
        }
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
