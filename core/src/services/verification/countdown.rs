//! Advisory resend countdown for the verification UI
//!
//! The countdown is UI feedback only. It is deliberately decoupled from the
//! session's `expires_at`: the authoritative expiry check is always the
//! session deadline against the service clock inside `verify_otp`, so clock
//! drift between the two never affects correctness.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Pure countdown state, driven one tick per second
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCountdown {
    initial: u32,
    remaining: u32,
}

impl ResendCountdown {
    /// Create a countdown starting at `initial` seconds
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
        }
    }

    /// Advance one second, flooring at 0; returns the new remaining value
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Seconds left until the resend action is offered
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has run out
    pub fn finished(&self) -> bool {
        self.remaining == 0
    }

    /// The resend action is offered only once the countdown reaches 0.
    /// While a resend request is in flight the UI keeps the action
    /// disabled, which guards against rapid double-invocation.
    pub fn can_resend(&self) -> bool {
        self.finished()
    }

    /// Restart from the initial value (after a successful resend)
    pub fn reset(&mut self) {
        self.remaining = self.initial;
    }
}

/// Handle to a running countdown task
///
/// Dropping the handle aborts the task, so no tick is published after the
/// owning component is torn down.
pub struct CountdownHandle {
    task: JoinHandle<()>,
    receiver: watch::Receiver<u32>,
}

impl CountdownHandle {
    /// Current remaining seconds as last published by the task
    pub fn remaining(&self) -> u32 {
        *self.receiver.borrow()
    }

    /// True once the published countdown has reached 0
    pub fn can_resend(&self) -> bool {
        self.remaining() == 0
    }

    /// Subscribe to countdown updates
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.receiver.clone()
    }

    /// Stop the countdown early
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a countdown task ticking once per second from `initial` to 0
///
/// The task publishes the remaining seconds on a watch channel and stops
/// itself at 0.
pub fn spawn_countdown(initial: u32) -> CountdownHandle {
    let (sender, receiver) = watch::channel(initial);

    let task = tokio::spawn(async move {
        let mut countdown = ResendCountdown::new(initial);
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick of a tokio interval completes immediately
        interval.tick().await;

        while !countdown.finished() {
            interval.tick().await;
            let remaining = countdown.tick();
            if sender.send(remaining).is_err() {
                // All receivers dropped; nobody is watching
                return;
            }
        }
    });

    CountdownHandle { task, receiver }
}
