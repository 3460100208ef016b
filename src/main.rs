use anyhow::Result;
use clap::Parser;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use userboard::app::App;
use userboard::cli::{Cli, CliHandler};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none() && !cli.plain;

    init_logging(cli.debug, interactive);

    if cli.debug {
        tracing::info!("Debug mode enabled - verbose logging active");
    }

    let config = cli.load_config()?;
    let handler = CliHandler::new(config.clone(), cli.config_path());

    if let Some(command) = cli.command {
        return handler.handle_command(command);
    }

    if cli.plain {
        print!("{}", handler.report().await?);
        return Ok(());
    }

    let mut app = App::new(&config)?;
    app.run().await
}

fn init_logging(debug: bool, interactive: bool) {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt().with_max_level(log_level);
    if !interactive {
        subscriber.with_writer(io::stderr).init();
        return;
    }

    // The TUI owns the terminal, so logs go to a file or nowhere
    match open_log_file() {
        Some(file) => subscriber.with_writer(Mutex::new(file)).with_ansi(false).init(),
        None => subscriber.with_writer(io::sink).init(),
    }
}

/// `<cache_dir>/userboard/userboard.log`, if it can be opened
fn open_log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("userboard");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("userboard.log"))
        .ok()
}
