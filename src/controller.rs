//! The portal controller: state, the store behind it, and the chat timer.

use crate::chat::{DEFAULT_REPLY_DELAY, ReplyHandle, schedule_reply};
use crate::state::{Action, AppState, Dashboard, Effect, Notice, reduce};
use crate::store::{KeyValueStore, Slice, StoreResult, save_slice};
use crate::types::{Role, Section};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a dispatched action produced for the caller to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub reset_form: bool,
    pub bot_reply: Option<String>,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && !self.reset_form && self.bot_reply.is_none()
    }
}

pub struct WellnessApp {
    state: AppState,
    store: Box<dyn KeyValueStore>,
    reply_delay: Duration,
}

impl WellnessApp {
    /// Hydrate every slice from `store`.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let state = AppState::hydrate(store.as_ref());
        tracing::info!(
            logged_in = state.current_user.is_some(),
            programs = state.programs.len(),
            resources = state.resources.len(),
            articles = state.articles.len(),
            support_requests = state.support_requests.len(),
            "portal state loaded"
        );
        Self {
            state,
            store,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn dashboard(&self) -> Dashboard {
        self.state.dashboard()
    }

    /// Apply `action`, write back what changed, and report the rest.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let mut outcome = Outcome::default();
        for effect in reduce(&mut self.state, action) {
            match effect {
                Effect::Persist(slice) => {
                    if let Err(err) = self.persist(slice) {
                        tracing::error!(key = slice.key(), error = %err, "failed to persist slice");
                    }
                }
                Effect::RemovePersistedUser => {
                    if let Err(err) = self.store.remove(Slice::CurrentUser.key()) {
                        tracing::error!(error = %err, "failed to remove persisted user");
                    }
                }
                Effect::Notify(notice) => outcome.notices.push(notice),
                Effect::ResetForm => outcome.reset_form = true,
                Effect::ScheduleBotReply(reply) => outcome.bot_reply = Some(reply),
            }
        }
        outcome
    }

    fn persist(&self, slice: Slice) -> StoreResult<()> {
        let store = self.store.as_ref();
        match slice {
            Slice::CurrentUser => save_slice(store, slice, &self.state.current_user),
            Slice::Resources => save_slice(store, slice, &self.state.resources),
            Slice::Programs => save_slice(store, slice, &self.state.programs),
            Slice::Articles => save_slice(store, slice, &self.state.articles),
            Slice::SupportRequests => save_slice(store, slice, &self.state.support_requests),
        }
    }

    pub fn login(&mut self, email: &str, role: Role) -> Outcome {
        self.dispatch(Action::Login {
            email: email.to_string(),
            role,
        })
    }

    pub fn logout(&mut self) -> Outcome {
        self.dispatch(Action::Logout)
    }

    pub fn navigate(&mut self, section: Section) -> Outcome {
        self.dispatch(Action::Navigate(section))
    }

    pub fn join_program(&mut self, index: usize) -> Outcome {
        self.dispatch(Action::JoinProgram(index))
    }

    pub fn mark_complete(&mut self, program_name: &str) -> Outcome {
        self.dispatch(Action::MarkComplete(program_name.to_string()))
    }

    pub fn add_program(&mut self, name: &str, start: &str, description: &str) -> Outcome {
        self.dispatch(Action::AddProgram {
            name: name.to_string(),
            start: start.to_string(),
            description: description.to_string(),
        })
    }

    pub fn add_resource(&mut self, title: &str, category: &str, description: &str) -> Outcome {
        self.dispatch(Action::AddResource {
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        })
    }

    pub fn add_article(&mut self, title: &str, content: &str) -> Outcome {
        self.dispatch(Action::AddArticle {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn add_support_request(&mut self, message: &str) -> Outcome {
        self.dispatch(Action::AddSupportRequest(message.to_string()))
    }

    /// Append the user's turn. The bot reply comes back in the outcome for
    /// the caller to deliver after `reply_delay`.
    pub fn send_message(&mut self, text: &str) -> Outcome {
        self.dispatch(Action::SendMessage(text.to_string()))
    }

    pub fn receive_bot_reply(&mut self, reply: String) {
        self.dispatch(Action::ReceiveBotReply(reply));
    }
}

/// Controller shared with the reply timer.
pub type SharedApp = Arc<Mutex<WellnessApp>>;

pub fn shared(app: WellnessApp) -> SharedApp {
    Arc::new(Mutex::new(app))
}

/// Send a chat message and schedule its bot reply.
///
/// The reply is delivered even if the session ends first; cancel the returned
/// handle to stop it.
pub fn send_chat_message(app: &SharedApp, text: &str) -> Option<ReplyHandle> {
    let (reply, delay) = {
        let mut guard = match app.lock() {
            Ok(guard) => guard,
            Err(err) => {
                tracing::error!(error = %err, "portal state lock poisoned");
                return None;
            }
        };
        let outcome = guard.send_message(text);
        (outcome.bot_reply?, guard.reply_delay)
    };

    let target = app.clone();
    Some(schedule_reply(delay, move || async move {
        match target.lock() {
            Ok(mut guard) => guard.receive_bot_reply(reply),
            Err(err) => tracing::error!(error = %err, "portal state lock poisoned"),
        }
    }))
}
