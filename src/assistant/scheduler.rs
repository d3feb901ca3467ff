//! Delayed, cancellable response delivery.
//!
//! Every request gets a [`RequestToken`]. Issuing a new token supersedes all
//! earlier ones, and [`ResponseScheduler::cancel_all`] supersedes everything
//! outstanding. A superseded delivery never runs its work, so a stale reply
//! cannot overwrite newer state.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::config::AssistantConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Request {0} was cancelled before its response was ready")]
    Cancelled(u64),
}

/// Identifies one request. Only the most recently issued token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// How long a response is held back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDelay {
    Fixed(Duration),
    /// `base` plus a uniformly random extra in `0..=jitter`.
    Jittered { base: Duration, jitter: Duration },
}

impl ResponseDelay {
    pub fn none() -> Self {
        ResponseDelay::Fixed(Duration::ZERO)
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        if config.delay_jitter_ms == 0 {
            ResponseDelay::Fixed(config.response_delay())
        } else {
            ResponseDelay::Jittered {
                base: config.response_delay(),
                jitter: config.jitter(),
            }
        }
    }

    pub fn sample(&self) -> Duration {
        match *self {
            ResponseDelay::Fixed(d) => d,
            ResponseDelay::Jittered { base, jitter } => {
                let max = jitter.as_millis() as u64;
                let extra = rand::thread_rng().gen_range(0..=max);
                base + Duration::from_millis(extra)
            }
        }
    }
}

/// Hands out request tokens and delivers results after the configured delay.
#[derive(Debug, Clone)]
pub struct ResponseScheduler {
    generation: Arc<watch::Sender<u64>>,
    delay: ResponseDelay,
}

impl ResponseScheduler {
    pub fn new(delay: ResponseDelay) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            generation: Arc::new(tx),
            delay,
        }
    }

    /// Issue a new token, superseding every earlier one.
    pub fn begin(&self) -> RequestToken {
        let mut issued = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            issued = *g;
        });
        RequestToken(issued)
    }

    /// Supersede all outstanding requests (e.g. the view went away).
    pub fn cancel_all(&self) {
        self.generation.send_modify(|g| *g += 1);
        debug!(generation = *self.generation.borrow(), "Outstanding responses cancelled");
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        *self.generation.borrow() == token.0
    }

    /// Wait out the delay, then run `work` if `token` is still current.
    ///
    /// Supersession wakes the wait immediately instead of at the end of the
    /// delay.
    pub async fn deliver<T, F>(&self, token: RequestToken, work: F) -> Result<T, DeliveryError>
    where
        F: FnOnce() -> T,
    {
        let mut rx = self.generation.subscribe();
        if *rx.borrow_and_update() != token.0 {
            return Err(DeliveryError::Cancelled(token.0));
        }

        let sleep = tokio::time::sleep(self.delay.sample());
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => break,
                changed = rx.changed() => {
                    if changed.is_err() || *rx.borrow_and_update() != token.0 {
                        debug!(request = token.0, "Response superseded during delay");
                        return Err(DeliveryError::Cancelled(token.0));
                    }
                }
            }
        }

        if !self.is_current(token) {
            return Err(DeliveryError::Cancelled(token.0));
        }
        Ok(work())
    }
}
