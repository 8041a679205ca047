//! User feedback surface: notifications and the busy indicator.
//!
//! Controllers receive this as an injected trait object rather than
//! reaching for a global, so tests can observe notifications and wait
//! brackets directly.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A notification shown to the user until its TTL expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Injected feedback surface.
pub trait Feedback: Send + Sync {
    /// Fire-and-forget notification.
    fn notify(&self, message: &str, kind: NoticeKind);

    /// Bracket a long-running operation; calls may nest.
    fn begin_wait(&self);
    fn end_wait(&self);
}

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Default)]
struct FeedbackInner {
    notice: Option<(Notice, Instant)>,
    waiting: usize,
}

/// The TUI feedback implementation: a single toast slot with a TTL and a
/// nested-wait counter driving the busy spinner.
#[derive(Clone, Default)]
pub struct StatusFeedback {
    inner: Arc<Mutex<FeedbackInner>>,
}

impl StatusFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification to display, if one is still live.
    pub fn current_notice(&self) -> Option<Notice> {
        let inner = self.inner.lock();
        match &inner.notice {
            Some((notice, deadline)) if Instant::now() < *deadline => Some(notice.clone()),
            _ => None,
        }
    }

    /// True while at least one operation is in flight.
    pub fn is_waiting(&self) -> bool {
        self.inner.lock().waiting > 0
    }

    /// Drop an expired notification; called on every tick.
    pub fn expire(&self) {
        let mut inner = self.inner.lock();
        if let Some((_, deadline)) = &inner.notice {
            if Instant::now() >= *deadline {
                inner.notice = None;
            }
        }
    }
}

impl Feedback for StatusFeedback {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let notice = Notice {
            message: message.to_string(),
            kind,
        };
        self.inner.lock().notice = Some((notice, Instant::now() + NOTICE_TTL));
    }

    fn begin_wait(&self) {
        self.inner.lock().waiting += 1;
    }

    fn end_wait(&self) {
        let mut inner = self.inner.lock();
        inner.waiting = inner.waiting.saturating_sub(1);
    }
}
