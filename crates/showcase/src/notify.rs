//! Transient notifications ("toasts").

use std::time::Duration;

use tracing::{info, warn};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Failure,
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }
}

/// Pending toasts, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => info!("{}", toast.message),
            ToastKind::Failure => warn!("{}", toast.message),
        }
        self.pending.push(toast);
    }

    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}
