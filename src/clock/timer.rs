use tokio::task::JoinHandle;

/// Handle to a scheduled task. Cancelling or dropping it aborts the task.
///
/// A timer that could not be scheduled (no runtime available) is
/// unscheduled from the start and cancelling it does nothing.
#[derive(Debug, Default)]
pub struct Timer(Option<JoinHandle<()>>);

impl Timer {
    pub(super) fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => Self(Some(runtime.spawn(future))),
            Err(e) => {
                log::warn!("[clock] cannot schedule timer: {}", e);
                Self(None)
            }
        }
    }
    pub fn is_scheduled(&self) -> bool {
        self.0.is_some()
    }
    pub fn cancel(&mut self) {
        if let Some(task) = self.0.take() {
            task.abort();
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
