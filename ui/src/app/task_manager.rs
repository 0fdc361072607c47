use crate::components::common::Msg;
use crate::error::{AppError, ErrorReporter};
use server::taskpool::TaskPool;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Runs async work off the event loop and hands results back as messages.
#[derive(Clone)]
pub struct TaskManager {
    taskpool: Arc<TaskPool>,
    tx_to_main: Sender<Msg>,
    error_reporter: ErrorReporter,
}

impl TaskManager {
    pub fn new(
        taskpool: Arc<TaskPool>,
        tx_to_main: Sender<Msg>,
        error_reporter: ErrorReporter,
    ) -> Self {
        Self {
            taskpool,
            tx_to_main,
            error_reporter,
        }
    }

    /// Execute an async operation whose result is a message for the event loop.
    ///
    /// Failures are reported through the [`ErrorReporter`] instead.
    pub fn execute<F>(&self, description: impl Display, operation: F)
    where
        F: Future<Output = Result<Msg, AppError>> + Send + 'static,
    {
        let description = description.to_string();
        log::debug!("Starting task: {description}");

        let tx_to_main = self.tx_to_main.clone();
        let error_reporter = self.error_reporter.clone();
        self.taskpool.execute(async move {
            match operation.await {
                Ok(msg) => Self::send_message_or_report_error(
                    &tx_to_main,
                    msg,
                    &description,
                    &error_reporter,
                ),
                Err(error) => error_reporter.report_simple(error, "TaskManager", &description),
            }
        });
    }

    /// Fire-and-forget work that has nothing to tell the event loop on success.
    pub fn execute_background<F, R>(&self, operation: F)
    where
        F: Future<Output = Result<R, AppError>> + Send + 'static,
        R: Send + 'static,
    {
        let error_reporter = self.error_reporter.clone();
        self.taskpool.execute(async move {
            if let Err(error) = operation.await {
                error_reporter.report_simple(error, "TaskManager", "async_operation_bg");
            }
        });
    }

    /// Helper method to send a message to the main thread or log if the loop is gone
    pub fn send_message_or_report_error(
        tx: &Sender<Msg>,
        msg: Msg,
        context: &str,
        error_reporter: &ErrorReporter,
    ) {
        if let Err(e) = tx.send(msg) {
            error_reporter.report_warning(
                AppError::Channel(e.to_string()),
                "TaskManager",
                context,
            );
        }
    }

    pub fn in_flight(&self) -> usize {
        self.taskpool.in_flight()
    }

    /// Cancel everything still queued or running.
    pub fn cancel_all(&self) {
        log::debug!("Cancelling {} background tasks", self.in_flight());
        self.taskpool.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::common::{ContactMsg, ToastMsg};
    use crate::components::toast::ToastKind;
    use claims::*;
    use std::sync::mpsc;
    use std::time::Duration;
    use uuid::Uuid;

    fn create_test_setup() -> (TaskManager, mpsc::Receiver<Msg>) {
        let (tx, rx) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx.clone());
        let task_manager = TaskManager::new(Arc::new(TaskPool::new(4)), tx, error_reporter);
        (task_manager, rx)
    }

    // The pool runs on tokio worker threads, so wait on the std channel
    // without blocking the test runtime.
    async fn next_message(rx: &mpsc::Receiver<Msg>) -> Option<Msg> {
        for _ in 0..100 {
            if let Ok(msg) = rx.try_recv() {
                return Some(msg);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_execute_forwards_result_message() {
        let (task_manager, rx) = create_test_setup();
        let ticket = Uuid::new_v4();

        task_manager.execute("deliver", async move {
            Ok(Msg::Contact(ContactMsg::Delivered {
                ticket,
                result: Ok(()),
            }))
        });

        let msg = next_message(&rx).await;
        assert_matches!(
            msg,
            Some(Msg::Contact(ContactMsg::Delivered { ticket: t, result: Ok(()) })) if t == ticket
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_execute_reports_errors_as_toasts() {
        let (task_manager, rx) = create_test_setup();

        task_manager.execute("open link", async move {
            Err(AppError::Io("no opener".to_string()))
        });

        let msg = next_message(&rx).await;
        assert_matches!(
            msg,
            Some(Msg::Toast(ToastMsg::Show(toast))) if toast.kind == ToastKind::Error
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_background_success_is_silent() {
        let (task_manager, rx) = create_test_setup();

        task_manager.execute_background(async move { Ok::<(), AppError>(()) });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_err!(rx.try_recv());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cancel_all_drops_pending_work() {
        let (task_manager, rx) = create_test_setup();

        task_manager.execute("slow", async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Msg::ForceRedraw)
        });
        task_manager.cancel_all();
        task_manager.execute("late", async move { Ok(Msg::ForceRedraw) });

        assert_none!(next_message(&rx).await);
        assert_eq!(task_manager.in_flight(), 0);
    }
}
