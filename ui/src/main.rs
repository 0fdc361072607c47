use clap::Parser;
use folio::app::application_lifecycle::ApplicationLifecycle;
use folio::config::{self, CliArgs};
use folio::logger::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Logging needs the configuration, which is loaded once and kept
    let config = config::init_config(args.config.as_deref());
    let logging = match config {
        config::ConfigLoadResult::Success(config) => config.logging().clone(),
        _ => config::LoggingConfig::default(),
    };
    if let Err(e) = setup_logger(&logging) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut model = ApplicationLifecycle::initialize(&args)?;
    ApplicationLifecycle::setup_terminal(&mut model)?;

    // Restore the terminal even when the loop fails
    let result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    result
}
