use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_TTL: SignedDuration = SignedDuration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient on-screen notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub created: Timestamp,
}

/// The single notification surface. Notices stack, can be dismissed
/// individually, and expire on their own after a short while.
#[derive(Debug, Clone)]
pub struct Notifier {
    notices: Vec<Notice>,
    ttl: SignedDuration,
    next_id: u64,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            notices: Vec::new(),
            ttl,
            next_id: 1,
        }
    }

    /// Queue a notice. Returns its id for targeted dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, now: Timestamp) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        info!(notice = id, ?level, %message, "notice shown");
        self.notices.push(Notice {
            id,
            level,
            message,
            created: now,
        });
        id
    }

    /// Currently visible notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove one notice by id. Unknown ids are ignored; the user may
    /// dismiss a notice that just expired.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Drop every notice whose lifetime has elapsed as of `now`.
    pub fn expire_before(&mut self, now: Timestamp) {
        let ttl = self.ttl;
        self.notices.retain(|n| now.duration_since(n.created) < ttl);
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
