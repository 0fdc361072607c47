use crate::app::page::PageState;
use crate::app::task_manager::TaskManager;
use crate::components::common::{ComponentId, Msg};
use crate::error::ErrorReporter;
use server::contact::{EmailJsTransport, TransportError};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod focus;
mod initialization;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    /// Everything the page shows
    pub page: PageState,
    /// Component currently receiving keys
    pub active_component: ComponentId,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    pub error_reporter: ErrorReporter,
    pub task_manager: TaskManager,

    /// Built once at startup; the error is shown when a message is sent.
    pub(crate) transport: Result<Arc<EmailJsTransport>, TransportError>,
    pub(crate) last_tick: Instant,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Handle messages sent from background tasks
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Shutdown the application and clean up resources
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        // Cancel the outbound request if one is still running
        self.task_manager.cancel_all();

        // Stop every animation
        self.page.teardown();

        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
