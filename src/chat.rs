//! Scripted wellness chat helper.
//!
//! Replies come from a fixed keyword table. Every rule is checked against the
//! message and the last matching rule supplies the reply, so "anxiety" beats
//! "sleep", which beats "stress".

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(600);

pub const GENERIC_REPLY: &str = "I'm here to help! Stay positive and take care.";
pub const STRESS_REPLY: &str = "Try deep breathing: inhale 4s, hold 4s, exhale 6s. 🌿";
pub const SLEEP_REPLY: &str = "Aim for 7–8 hours sleep. Avoid screens before bed. 😴";
pub const ANXIETY_REPLY: &str = "Focus on 5 things you see, 4 you feel, 3 you hear. 💙";

/// Keyword rules in evaluation order.
pub const REPLY_RULES: &[(&str, &str)] = &[
    ("stress", STRESS_REPLY),
    ("sleep", SLEEP_REPLY),
    ("anxiety", ANXIETY_REPLY),
];

pub fn scripted_reply(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    let mut reply = GENERIC_REPLY;
    for &(keyword, candidate) in REPLY_RULES {
        if lowered.contains(keyword) {
            reply = candidate;
        }
    }
    reply
}

/// A bot reply waiting on its delay.
#[derive(Debug)]
pub struct ReplyHandle {
    task: JoinHandle<()>,
}

impl ReplyHandle {
    /// Drop the reply before it is delivered. No effect once delivered.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for delivery (or cancellation).
    pub async fn join(self) {
        if let Err(err) = self.task.await
            && !err.is_cancelled()
        {
            tracing::error!(error = %err, "bot reply task failed");
        }
    }
}

/// Run `deliver` after `delay` on the tokio runtime.
///
/// Must be called from within a runtime.
pub fn schedule_reply<F, Fut>(delay: Duration, deliver: F) -> ReplyHandle
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        deliver().await;
    });
    ReplyHandle { task }
}
