//! Application lifecycle management
//!
//! This module handles the initialization, main loop, and shutdown of the application.

use crate::app::model::Model;
use crate::app::page::PageState;
use crate::components::common::Msg;
use crate::config::{self, AppConfig, CliArgs, ConfigLoadResult};
use crate::error::AppError;
use crate::theme::ThemeState;

use log::{debug, error, info};
use server::content::PortfolioContent;
use std::error::Error as StdError;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model
    pub fn initialize(args: &CliArgs) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting Folio");

        let config = Self::load_configuration(args)?;
        Self::validate_configuration(&config)?;

        let content = Self::load_content(args, &config)?;
        let theme = ThemeState::initialize(config.theme(), args.theme)?;
        info!("Configuration and content loaded successfully");

        let page = PageState::new(content, theme, &config);
        Self::create_model(&config, page)
    }

    /// Load the configuration and apply command line overrides
    fn load_configuration(args: &CliArgs) -> Result<AppConfig, Box<dyn StdError>> {
        let config = match config::init_config(args.config.as_deref()) {
            ConfigLoadResult::Success(config) => config.as_ref().clone(),
            ConfigLoadResult::LoadError(error) | ConfigLoadResult::DeserializeError(error) => {
                error!("{error}");
                return Err(AppError::Config(error.clone()).into());
            }
        };

        if args.no_animations {
            debug!("Animations disabled from the command line");
            return Ok(config.without_animations());
        }
        Ok(config)
    }

    fn validate_configuration(config: &AppConfig) -> Result<(), Box<dyn StdError>> {
        if let Err(validation_errors) = config.validate() {
            for validation_error in &validation_errors {
                error!("Config validation error: {validation_error:?}");
            }
            let message = validation_errors
                .iter()
                .map(|e| e.user_message())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(AppError::Config(message).into());
        }
        Ok(())
    }

    /// `--content` wins over the configured file; neither means built-in content.
    fn load_content(
        args: &CliArgs,
        config: &AppConfig,
    ) -> Result<PortfolioContent, Box<dyn StdError>> {
        let path = args.content.clone().or_else(|| config.content_file());
        let content = PortfolioContent::load(path.as_deref()).map_err(AppError::from)?;
        debug!(
            "Loaded content for {} with {} projects",
            content.profile.name,
            content.projects.items.len()
        );
        Ok(content)
    }

    /// Create and initialize the application model
    fn create_model(
        config: &AppConfig,
        page: PageState,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config, page) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                error!("Failed to initialize application model: {e}");
                Err(e.into())
            }
        }
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    /// Process a single iteration of the main loop
    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        // Tick and handle messages
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                error!("Application tick error: {err:?}");
                model.error_reporter.report_simple(
                    AppError::Component(format!("Application error: {err:?}")),
                    "EventLoop",
                    "tick",
                );
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model)
    }

    /// Process all received messages
    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    /// Handle view redraw if needed
    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) -> Result<(), Box<dyn StdError>> {
        if model.needs_redraw() {
            // A terminal that cannot be drawn to is not recoverable
            model.view()?;
            model.set_redraw(false);
        }
        Ok(())
    }

    /// Properly shutdown the application
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        // Terminate terminal
        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }
}
