use parking_lot::Mutex;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    Idle,
    Running,
    Failed,
}

#[derive(Error, Debug)]
pub enum GuardError<E: std::error::Error> {
    /// A previous invocation is still in flight; this one was not started.
    #[error("Operation already running")]
    Busy,
    #[error(transparent)]
    Operation(#[from] E),
}

/// Explicit Idle → Running → Idle|Failed state machine around a mutation,
/// replacing the legacy client's mutable "is executing" flags. A second
/// `run` while one is in flight rejects immediately with [`GuardError::Busy`]
/// instead of double-submitting.
pub struct OperationGuard {
    state: Mutex<OperationState>,
}

impl Default for OperationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationGuard {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(OperationState::Idle),
        }
    }

    pub fn state(&self) -> OperationState {
        *self.state.lock()
    }

    pub fn is_running(&self) -> bool {
        self.state() == OperationState::Running
    }

    /// Clears a parked `Failed` state. No-op while Running.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        if *state == OperationState::Failed {
            *state = OperationState::Idle;
        }
    }

    /// Runs `operation` unless another invocation is in flight. Success
    /// returns the guard to Idle; failure parks it in Failed (inspectable
    /// via [`OperationGuard::state`], cleared with [`OperationGuard::reset`])
    /// while still allowing the next invocation.
    ///
    /// Dropping the returned future mid-flight (`tokio::select!`, timeouts)
    /// releases the guard back to Idle.
    pub async fn run<T, E, F>(&self, operation: F) -> Result<T, GuardError<E>>
    where
        F: Future<Output = Result<T, E>>,
        E: std::error::Error,
    {
        {
            let mut state = self.state.lock();
            if *state == OperationState::Running {
                return Err(GuardError::Busy);
            }
            *state = OperationState::Running;
        }

        let mut release = ReleaseOnDrop {
            state: &self.state,
            armed: true,
        };
        let outcome = operation.await;
        release.armed = false;

        *self.state.lock() = match outcome {
            Ok(_) => OperationState::Idle,
            Err(_) => OperationState::Failed,
        };
        outcome.map_err(GuardError::Operation)
    }
}

/// Puts the guard back to Idle if the `run` future is dropped (or the
/// operation panics) while still Running.
struct ReleaseOnDrop<'a> {
    state: &'a Mutex<OperationState>,
    armed: bool,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            *self.state.lock() = OperationState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    fn io_err(message: &str) -> io::Error {
        io::Error::other(message)
    }

    #[tokio::test]
    async fn runs_and_returns_to_idle() {
        let guard = OperationGuard::new();
        let value = guard.run(async { Ok::<_, io::Error>(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert_eq!(guard.state(), OperationState::Idle);
    }

    #[tokio::test]
    async fn second_invocation_while_running_is_rejected() {
        let guard = Arc::new(OperationGuard::new());
        let (release, gate) = tokio::sync::oneshot::channel::<()>();

        let background = {
            let guard = guard.clone();
            tokio::spawn(async move {
                guard
                    .run(async move {
                        gate.await.ok();
                        Ok::<_, io::Error>(1)
                    })
                    .await
            })
        };

        while !guard.is_running() {
            tokio::task::yield_now().await;
        }

        let busy = guard.run(async { Ok::<_, io::Error>(2) }).await;
        assert!(matches!(busy, Err(GuardError::Busy)));

        release.send(()).unwrap();
        let first = background.await.unwrap();
        assert_eq!(first.unwrap(), 1);
        assert_eq!(guard.state(), OperationState::Idle);
    }

    #[tokio::test]
    async fn failure_parks_guard_in_failed_until_reset() {
        let guard = OperationGuard::new();
        let failed = guard
            .run(async { Err::<(), _>(io_err("submit rejected")) })
            .await;
        assert!(matches!(failed, Err(GuardError::Operation(_))));
        assert_eq!(guard.state(), OperationState::Failed);

        guard.reset();
        assert_eq!(guard.state(), OperationState::Idle);
    }

    #[tokio::test]
    async fn dropping_an_in_flight_run_releases_the_guard() {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let guard = OperationGuard::new();
        {
            let mut in_flight = pin!(guard.run(std::future::pending::<Result<i32, io::Error>>()));
            let mut cx = Context::from_waker(Waker::noop());
            assert!(matches!(in_flight.as_mut().poll(&mut cx), Poll::Pending));
            assert!(guard.is_running());
        }
        assert_eq!(guard.state(), OperationState::Idle);

        let value = guard.run(async { Ok::<_, io::Error>(9) }).await.unwrap();
        assert_eq!(value, 9);
    }

    #[tokio::test]
    async fn failed_guard_still_accepts_the_next_invocation() {
        let guard = OperationGuard::new();
        let _ = guard
            .run(async { Err::<(), _>(io_err("first attempt")) })
            .await;
        let retried = guard.run(async { Ok::<_, io::Error>(3) }).await.unwrap();
        assert_eq!(retried, 3);
        assert_eq!(guard.state(), OperationState::Idle);
    }
}
