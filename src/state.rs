//! Fetch state published to renderers.
//!
//! A [`StateSlot`] owns the state of one operation. Writes go through a
//! `watch` channel so every reader sees whole values, and each request is
//! tagged with a generation so only the most recently started request can
//! publish its outcome.

use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;
use tokio::sync::watch;

/// Outcome of the latest fetch for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// `Success` or `Error`
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Success(data) => FetchState::Success(f(data)),
            FetchState::Error(message) => FetchState::Error(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => FetchState::Error(e.to_string()),
        }
    }
}

/// Identifies one started request; see [`StateSlot::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct StateSlot<T> {
    sender: watch::Sender<FetchState<T>>,
    generation: AtomicU64,
}

impl<T> Default for StateSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateSlot<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(FetchState::Idle);
        Self {
            sender,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a request: publishes `Loading` and invalidates older tickets
    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket(0);
        self.sender.send_modify(|state| {
            ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            *state = FetchState::Loading;
        });
        ticket
    }

    /// Publish the outcome of `ticket`'s request.
    ///
    /// Returns `false` and leaves the state alone if a newer request was
    /// started in the meantime.
    pub fn finish(&self, ticket: Ticket, outcome: FetchState<T>) -> bool {
        self.sender.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket.0 {
                warn!("Discarding result of superseded request #{}", ticket.0);
                return false;
            }
            *state = outcome;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.sender.subscribe()
    }
}

impl<T: Clone> StateSlot<T> {
    pub fn current(&self) -> FetchState<T> {
        self.sender.borrow().clone()
    }
}
