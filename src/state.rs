//! Application state and the reducer that drives it.
//!
//! `reduce` is the only place state changes. It never touches storage or
//! timers itself; it returns `Effect`s the controller carries out.

use crate::chat::scripted_reply;
use crate::store::{KeyValueStore, Slice, load_slice};
use crate::types::{
    Article, ChatMessage, Enrollment, Program, Resource, Role, Section, SupportRequest,
    SupportStatus, User,
};
use std::fmt;

pub const DEFAULT_RESOURCE_CATEGORY: &str = "General";

/// Programs offered before anything has been persisted.
pub fn seed_programs() -> Vec<Program> {
    vec![
        Program::new(
            "Mental Wellness Session",
            "2025-10-10",
            "Group therapy and meditation session",
        ),
        Program::new(
            "Yoga for Students",
            "2025-10-15",
            "Yoga for relaxation and stress relief",
        ),
        Program::new(
            "Healthy Eating Talk",
            "2025-10-20",
            "Nutrition advice for better energy",
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_user: Option<User>,
    pub section: Section,
    pub resources: Vec<Resource>,
    pub programs: Vec<Program>,
    pub articles: Vec<Article>,
    pub support_requests: Vec<SupportRequest>,
    pub chat_messages: Vec<ChatMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_user: None,
            section: Section::Login,
            resources: Vec::new(),
            programs: seed_programs(),
            articles: Vec::new(),
            support_requests: Vec::new(),
            chat_messages: Vec::new(),
        }
    }
}

impl AppState {
    /// Rebuild state from the store, one slice at a time.
    pub fn hydrate(store: &dyn KeyValueStore) -> Self {
        let current_user: Option<User> = load_slice(store, Slice::CurrentUser, || None);
        let section = if current_user.is_some() {
            Section::Home
        } else {
            Section::Login
        };
        Self {
            current_user,
            section,
            resources: load_slice(store, Slice::Resources, Vec::new),
            programs: load_slice(store, Slice::Programs, seed_programs),
            articles: load_slice(store, Slice::Articles, Vec::new),
            support_requests: load_slice(store, Slice::SupportRequests, Vec::new),
            chat_messages: Vec::new(),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        match (&self.current_user, self.section) {
            (None, _) | (_, Section::Login) => Dashboard::Login,
            (Some(user), _) => match user.role {
                Role::Admin => Dashboard::Admin {
                    identity: user.email.clone(),
                },
                Role::Student => Dashboard::Student {
                    identity: user.email.clone(),
                },
            },
        }
    }
}

/// Which top-level view the current state renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dashboard {
    Login,
    Admin { identity: String },
    Student { identity: String },
}

/// A user action with its input already read from the form.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Login { email: String, role: Role },
    Logout,
    Navigate(Section),
    JoinProgram(usize),
    MarkComplete(String),
    AddProgram {
        name: String,
        start: String,
        description: String,
    },
    AddResource {
        title: String,
        category: String,
        description: String,
    },
    AddArticle { title: String, content: String },
    AddSupportRequest(String),
    SendMessage(String),
    ReceiveBotReply(String),
}

/// User-facing acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Joined(String),
    AlreadyJoined,
    SupportSubmitted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Joined(name) => write!(f, "You joined {}", name),
            Notice::AlreadyJoined => f.write_str("Already joined this session."),
            Notice::SupportSubmitted => f.write_str("Support request submitted!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Persist(Slice),
    RemovePersistedUser,
    Notify(Notice),
    ResetForm,
    ScheduleBotReply(String),
}

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Login { email, role } => login(state, &email, role),
        Action::Logout => logout(state),
        Action::Navigate(section) => navigate(state, section),
        Action::JoinProgram(index) => join_program(state, index),
        Action::MarkComplete(name) => mark_complete(state, &name),
        Action::AddProgram {
            name,
            start,
            description,
        } => add_program(state, &name, &start, &description),
        Action::AddResource {
            title,
            category,
            description,
        } => add_resource(state, &title, &category, &description),
        Action::AddArticle { title, content } => add_article(state, &title, &content),
        Action::AddSupportRequest(message) => add_support_request(state, &message),
        Action::SendMessage(text) => send_message(state, &text),
        Action::ReceiveBotReply(text) => {
            state.chat_messages.push(ChatMessage::bot(text));
            Vec::new()
        }
    }
}

fn login(state: &mut AppState, email: &str, role: Role) -> Vec<Effect> {
    let email = email.trim();
    if email.is_empty() {
        return Vec::new();
    }
    tracing::debug!(email, %role, "login");
    state.current_user = Some(User::new(email, role));
    state.section = Section::Home;
    vec![Effect::Persist(Slice::CurrentUser)]
}

fn logout(state: &mut AppState) -> Vec<Effect> {
    tracing::debug!("logout");
    state.current_user = None;
    state.section = Section::Login;
    state.chat_messages.clear();
    vec![Effect::RemovePersistedUser]
}

fn navigate(state: &mut AppState, section: Section) -> Vec<Effect> {
    let allowed = match section {
        Section::Login => state.current_user.is_none(),
        _ => state.current_user.is_some(),
    };
    if allowed {
        state.section = section;
    } else {
        tracing::debug!(?section, "navigation refused");
    }
    Vec::new()
}

fn join_program(state: &mut AppState, index: usize) -> Vec<Effect> {
    let Some(user) = state.current_user.as_mut() else {
        return Vec::new();
    };
    let Some(program) = state.programs.get(index) else {
        tracing::warn!(index, "join requested for unknown program");
        return Vec::new();
    };
    if user.has_joined(&program.name) {
        return vec![Effect::Notify(Notice::AlreadyJoined)];
    }
    user.joined_programs.push(Enrollment::from(program));
    vec![
        Effect::Persist(Slice::CurrentUser),
        Effect::Notify(Notice::Joined(program.name.clone())),
    ]
}

fn mark_complete(state: &mut AppState, name: &str) -> Vec<Effect> {
    let Some(user) = state.current_user.as_mut() else {
        return Vec::new();
    };
    let mut changed = false;
    for enrollment in user.joined_programs.iter_mut().filter(|e| e.name() == name) {
        if !enrollment.completed {
            enrollment.completed = true;
            changed = true;
        }
    }
    if changed {
        vec![Effect::Persist(Slice::CurrentUser)]
    } else {
        Vec::new()
    }
}

fn add_program(state: &mut AppState, name: &str, start: &str, description: &str) -> Vec<Effect> {
    let (name, start, description) = (name.trim(), start.trim(), description.trim());
    if name.is_empty() || start.is_empty() || description.is_empty() {
        return Vec::new();
    }
    state.programs.push(Program::new(name, start, description));
    state.section = Section::Sessions;
    vec![Effect::Persist(Slice::Programs), Effect::ResetForm]
}

fn add_resource(
    state: &mut AppState,
    title: &str,
    category: &str,
    description: &str,
) -> Vec<Effect> {
    let (title, description) = (title.trim(), description.trim());
    if title.is_empty() || description.is_empty() {
        return Vec::new();
    }
    let category = if category.trim().is_empty() {
        DEFAULT_RESOURCE_CATEGORY
    } else {
        category
    };
    state.resources.push(Resource {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    });
    state.section = Section::Home;
    vec![Effect::Persist(Slice::Resources), Effect::ResetForm]
}

fn add_article(state: &mut AppState, title: &str, content: &str) -> Vec<Effect> {
    let (title, content) = (title.trim(), content.trim());
    if title.is_empty() || content.is_empty() {
        return Vec::new();
    }
    state.articles.push(Article {
        title: title.to_string(),
        content: content.to_string(),
    });
    state.section = Section::Articles;
    vec![Effect::Persist(Slice::Articles), Effect::ResetForm]
}

fn add_support_request(state: &mut AppState, message: &str) -> Vec<Effect> {
    let message = message.trim();
    let Some(user) = state.current_user.as_ref() else {
        return Vec::new();
    };
    if message.is_empty() {
        return Vec::new();
    }
    state.support_requests.push(SupportRequest {
        user: user.email.clone(),
        message: message.to_string(),
        status: SupportStatus::Pending,
    });
    vec![
        Effect::Persist(Slice::SupportRequests),
        Effect::Notify(Notice::SupportSubmitted),
        Effect::ResetForm,
    ]
}

fn send_message(state: &mut AppState, text: &str) -> Vec<Effect> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    state.chat_messages.push(ChatMessage::user(text));
    vec![Effect::ScheduleBotReply(scripted_reply(text).to_string())]
}
