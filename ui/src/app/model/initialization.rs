use super::Model;
use crate::app::page::PageState;
use crate::app::task_manager::TaskManager;
use crate::components::common::{ComponentId, Msg};
use crate::components::contact_form::ContactForm;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::page_navigator::PageNavigator;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use server::contact::EmailJsTransport;
use server::taskpool::TaskPool;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

/// Concurrent background tasks. Only one request runs at a time in practice.
const TASK_POOL_SIZE: usize = 4;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(config: &AppConfig) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount(
            ComponentId::PageNavigator,
            Box::new(PageNavigator::new(config.keys().clone())),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::ContactForm,
            Box::new(ContactForm::default()),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::default()),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::PageNavigator)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(config: &AppConfig, page: PageState) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();
        let taskpool = Arc::new(TaskPool::new(TASK_POOL_SIZE));

        // Create error reporter for enhanced error handling
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        // Create task manager for consistent async operations
        let task_manager =
            TaskManager::new(taskpool, tx_to_main.clone(), error_reporter.clone());

        let transport = EmailJsTransport::new(config.contact().transport_config()).map(Arc::new);
        if let Err(e) = &transport {
            log::warn!("Contact form cannot deliver messages: {e}");
        }

        Ok(Self {
            app: Self::init_app(config)?,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            page,
            active_component: ComponentId::PageNavigator,
            tx_to_main,
            rx_to_main,
            error_reporter,
            task_manager,
            transport,
            last_tick: Instant::now(),
        })
    }
}
