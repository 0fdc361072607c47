use futures_util::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Bounded pool for the app's background work (contact delivery, link opening).
///
/// At most `n_tasks` futures run at once. Everything still queued or running is
/// cancelled on [`TaskPool::cancel_all`] or when the pool is dropped, so no work
/// outlives the page that started it.
pub struct TaskPool {
    semaphore: Arc<Semaphore>,
    cancel_token: CancellationToken,
    in_flight: Arc<AtomicUsize>,
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl TaskPool {
    pub fn new(n_tasks: usize) -> TaskPool {
        TaskPool {
            semaphore: Arc::new(Semaphore::new(n_tasks.max(1))),
            cancel_token: CancellationToken::new(),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of spawned tasks that have neither finished nor been cancelled.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn execute<F, T>(&self, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        if self.cancel_token.is_cancelled() {
            log::debug!("Task pool is shut down, dropping task");
            return;
        }

        let semaphore = self.semaphore.clone();
        let token = self.cancel_token.clone();
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = InFlightGuard(self.in_flight.clone());

        tokio::spawn(async move {
            let _guard = guard;
            let main = async {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                func.await;
            };

            tokio::select! {
                () = main => {},
                () = token.cancelled() => {
                    log::debug!("Background task cancelled");
                }
            }
        });
    }

    /// Cancel every queued and running task. Later `execute` calls are ignored.
    pub fn cancel_all(&self) {
        self.semaphore.close();
        self.cancel_token.cancel();
    }
}

impl Drop for TaskPool {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
