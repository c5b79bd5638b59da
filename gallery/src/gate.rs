//! # Gate
//!
//! The lock-screen state machine:
//! `Locked(idle) -> Locked(pending) -> {Unlocked | Locked(idle)+notice}`.
//!
//! `Unlocked` is terminal for the process lifetime, there is no logout.
//! The delay before the comparison is purely cosmetic, it mirrors the
//! spinner the page shows while "checking" the passphrase.
//!
//! Denials are emitted on a fire-and-forget broadcast channel so the
//! ambient notification surface (the toast on the page, the server log)
//! can pick them up without being part of the gate state.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use serde::Serialize;
use tokio::{sync::broadcast, time::sleep};

const NOTICE_CAPACITY: usize = 16;

/// Transient user-visible notice, the content of the denial toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: &'static str,
    pub detail: &'static str,
}

impl Notice {
    pub fn access_denied() -> Self {
        Self {
            title: "Access denied",
            detail: "Wrong passphrase. Try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty submission, silently rejected.
    Ignored,
    Unlocked,
    Denied(Notice),
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateStatus {
    pub unlocked: bool,
    pub pending: bool,
}

pub struct Gate {
    passphrase: String,
    review_delay: Duration,
    unlocked: AtomicBool,
    pending: AtomicBool,
    notices: broadcast::Sender<Notice>,
}

impl Gate {
    pub fn new(passphrase: String, review_delay: Duration) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);

        Self {
            passphrase,
            review_delay,
            unlocked: AtomicBool::new(false),
            pending: AtomicBool::new(false),
            notices,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::SeqCst)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> GateStatus {
        GateStatus {
            unlocked: self.is_unlocked(),
            pending: self.is_pending(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Checks `input` against the shared passphrase.
    ///
    /// No lockout, no attempt counter: the passphrase is a social
    /// courtesy for a small trusted group, not a security boundary, and
    /// failed attempts never affect later ones.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        if input.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self.is_unlocked() {
            return SubmitOutcome::Unlocked;
        }

        self.pending.store(true, Ordering::SeqCst);
        sleep(self.review_delay).await;

        let outcome = if input == self.passphrase {
            self.unlocked.store(true, Ordering::SeqCst);
            SubmitOutcome::Unlocked
        } else {
            let notice = Notice::access_denied();
            // nobody listening is fine
            let _ = self.notices.send(notice.clone());
            SubmitOutcome::Denied(notice)
        };
        self.pending.store(false, Ordering::SeqCst);

        outcome
    }
}
