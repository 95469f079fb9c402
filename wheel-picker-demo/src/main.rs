mod app;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{error, info};
use simplelog::{Config, WriteLogger};
use wheel_picker::{CalendarDate, Terminal, convert_event};

use app::{Control, DemoApp};
use config::DemoConfig;
use error::DemoError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(Some(date)) => {
            println!("{}", date);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    paths::rotate_logs();

    let path = match paths::log_file() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            path
        }
        None => PathBuf::from("wheel-picker-demo.log"),
    };
    let log_file = File::create(&path)?;
    WriteLogger::init(config.level_filter()?, Config::default(), log_file)?;
    info!("Logging to {}", path.display());
    Ok(())
}

async fn run() -> Result<Option<CalendarDate>, DemoError> {
    let config = DemoConfig::load()?;
    init_logging(&config)?;
    info!("Loaded config: {:?}", config);

    let mut app = DemoApp::new(config.picker_config()?)?;
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();

    loop {
        terminal.draw(|buf| app.render(buf))?;

        let Some(event) = events.next().await else {
            return Ok(None);
        };
        let Some(event) = convert_event(event?) else {
            continue;
        };

        match app.handle(event) {
            Control::Continue => {}
            Control::Quit => {
                info!("Quit without a selection");
                return Ok(None);
            }
            Control::Confirm(date) => {
                info!("Confirmed {}", date);
                // Restore the screen before the date is printed
                drop(terminal);
                return Ok(Some(date));
            }
        }
    }
}
