use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Route the `log` facade to a file so the alternate screen stays clean.
pub fn setup_logger(logging: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_filter(logging.level()))
        // Dependency chatter stays out of the portfolio log
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("rustls", LevelFilter::Warn);

    let file_path = logging.file();
    match OpenOptions::new().create(true).append(true).open(file_path) {
        Ok(file) => {
            base_config.chain(file).apply()?;
            println!("Logging to file: {file_path}");
        }
        Err(e) => {
            eprintln!("Warning: Failed to open log file '{file_path}': {e}");
            eprintln!("Continuing without file logging.");
            base_config.apply()?;
        }
    }

    log::info!("Logger initialized with level: {}", logging.level());
    Ok(())
}
