use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The UI section currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Login,
    Home,
    Sessions,
    Resources,
    Articles,
    Support,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub start: String,
    pub description: String,
}

impl Program {
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            description: description.into(),
        }
    }
}

/// A user's copy of a program taken at join time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(flatten)]
    pub program: Program,
    pub completed: bool,
}

impl Enrollment {
    pub fn name(&self) -> &str {
        &self.program.name
    }
}

impl From<&Program> for Enrollment {
    fn from(program: &Program) -> Self {
        Self {
            program: program.clone(),
            completed: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub joined_programs: Vec<Enrollment>,
}

impl User {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            joined_programs: Vec::new(),
        }
    }

    pub fn has_joined(&self, program_name: &str) -> bool {
        self.joined_programs.iter().any(|e| e.name() == program_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    #[default]
    Pending,
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportStatus::Pending => f.write_str("pending"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportRequest {
    pub user: String,
    pub message: String,
    #[serde(default)]
    pub status: SupportStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Bot,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_snapshot_uses_portal_field_names() {
        let mut user = User::new("a@x.com", Role::Admin);
        user.joined_programs
            .push(Enrollment::from(&Program::new("Yoga", "2025-10-15", "Stretch")));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["joinedPrograms"][0]["name"], "Yoga");
        assert_eq!(json["joinedPrograms"][0]["start"], "2025-10-15");
        assert_eq!(json["joinedPrograms"][0]["completed"], false);
    }

    #[test]
    fn test_chat_message_kind_serializes_as_type() {
        let json = serde_json::to_string(&ChatMessage::bot("hi")).unwrap();
        assert_eq!(json, r#"{"type":"bot","text":"hi"}"#);
    }

    #[test]
    fn test_support_status_defaults_to_pending() {
        let req: SupportRequest =
            serde_json::from_str(r#"{"user":"a@x.com","message":"help"}"#).unwrap();
        assert_eq!(req.status, SupportStatus::Pending);
    }
}
