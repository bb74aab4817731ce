//! Transient on-screen message fetched in the background
//!
//! One fetch at a time runs on its own thread and writes into a shared
//! slot. The frame loop reads the slot once per frame without waiting.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Error type for message fetching
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("connection failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Service(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Anything that can produce one message per call (may block)
pub trait MessageSource: Send + Sync {
    fn fetch(&self) -> Result<String, MessageError>;
}

/// Message text plus when it stops being shown
#[derive(Debug, Clone, PartialEq)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
struct MessageSlot {
    message: Option<TransientMessage>,
    pending: bool,
}

impl MessageSlot {
    fn is_busy(&self, now: Instant) -> bool {
        self.pending || self.message.as_ref().is_some_and(|m| now < m.expires_at)
    }
}

/// Shared message slot with a single in-flight fetch
#[derive(Debug, Clone)]
pub struct MessageBoard {
    slot: Arc<Mutex<MessageSlot>>,
    duration: Duration,
}

impl MessageBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(MessageSlot::default())),
            duration,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MessageSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while a fetch is in flight or a message is still showing
    pub fn is_busy(&self, now: Instant) -> bool {
        self.lock().is_busy(now)
    }

    /// Start a background fetch unless one is pending or a message is showing.
    ///
    /// Returns the worker handle, or `None` if the request was suppressed.
    pub fn request(&self, source: Arc<dyn MessageSource>) -> Option<JoinHandle<()>> {
        {
            let mut slot = self.lock();
            if slot.is_busy(Instant::now()) {
                return None;
            }
            slot.pending = true;
        }

        let board = self.clone();
        let spawned = thread::Builder::new()
            .name("message-fetch".to_string())
            .spawn(move || {
                let fetched = panic::catch_unwind(AssertUnwindSafe(|| source.fetch()));
                let text = match fetched {
                    Ok(Ok(text)) => {
                        info!(len = text.len(), "message received");
                        text
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "message fetch failed");
                        format!("Error: {}", e)
                    }
                    Err(payload) => {
                        let reason = panic_reason(payload.as_ref());
                        warn!(reason = %reason, "message source panicked");
                        format!("Error: {}", reason)
                    }
                };
                board.post(text, Instant::now());
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "could not spawn message thread");
                self.lock().pending = false;
                None
            }
        }
    }

    /// Show `text` from `now` for the configured duration and clear `pending`
    pub fn post(&self, text: String, now: Instant) {
        let mut slot = self.lock();
        slot.message = Some(TransientMessage { text, expires_at: now + self.duration });
        slot.pending = false;
    }

    /// Text to draw this frame; expired messages are cleared
    pub fn current(&self, now: Instant) -> Option<String> {
        let mut slot = self.lock();
        if slot.message.as_ref().is_some_and(|m| now >= m.expires_at) {
            slot.message = None;
        }
        slot.message.as_ref().map(|m| m.text.clone())
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "message source panicked".to_string()
    }
}
