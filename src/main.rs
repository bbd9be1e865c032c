#![deny(dead_code)] // DO NOT REMOVE THIS EVER
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

mod ui;
mod utils;

use crate::ui::{AppUI, UiCommand};
use linguaconnect::{config, App, Route};

/// Command line arguments for LinguaConnect
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "LinguaConnect: a terminal language exchange client.",
    long_about = "LinguaConnect lets you browse language partners, handle follow requests and chat \
    with connected learners, all from the terminal.\n\n\
    Optional parameters:\n\
    --config-dir <PATH>    Override the directory holding settings.json\n\
    --log-file <PATH>      Write the log somewhere other than linguaconnect.log\n\
    --log-level <LEVEL>    error, warn, info, debug or trace\n\
    --screen <ROUTE>       Start on home, dashboard or chat\n\
    Use -h or --help to see all options."
)]
struct Args {
    /// Directory for settings.json
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level, overriding the one in settings.json
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Screen to open first, overriding the one in settings.json
    #[arg(long, value_enum, value_name = "ROUTE")]
    screen: Option<Route>,
}

fn main() -> Result<()> {
    // Parse command line arguments FIRST
    let args = Args::parse();

    if let Some(ref dir) = args.config_dir {
        config::set_config_dir_override(dir.clone());
    }
    let mut settings = config::load_settings()?;

    // Keep the log next to the settings when the directory is overridden
    let log_file_path = match (&args.log_file, &args.config_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join("linguaconnect.log"),
        (None, None) => PathBuf::from("linguaconnect.log"),
    };
    let level = utils::parse_level(args.log_level.as_deref().unwrap_or(&settings.log_level));
    utils::setup_logging(Some(&log_file_path), level)?;

    info!("LinguaConnect starting up");
    info!("System information: {} {}", std::env::consts::OS, std::env::consts::ARCH);
    info!("Logging to file: {}", log_file_path.display());

    if let Some(screen) = args.screen {
        settings.start_screen = screen;
    }
    let app = App::new(settings)?;
    let mut app_ui = AppUI::new(app);

    let mut terminal = ui::setup_terminal()?;
    let result = run(&mut terminal, &mut app_ui);

    // Restore the terminal even when the loop failed
    ui::restore_terminal(terminal)?;

    match &result {
        Ok(()) => info!("LinguaConnect shut down from the {} screen", app_ui.route()),
        Err(e) => error!("LinguaConnect stopped with an error: {}", e),
    }
    result
}

fn run(
    terminal: &mut ui::Terminal<ui::CrosstermBackend<std::io::Stdout>>,
    app_ui: &mut AppUI,
) -> Result<()> {
    loop {
        terminal.draw(|f| app_ui.draw(f))?;

        if let Some(UiCommand::Quit) = app_ui.handle_input()? {
            info!("Quit requested");
            return Ok(());
        }
    }
}
