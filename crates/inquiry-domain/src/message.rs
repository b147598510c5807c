//! Chat messages

use std::fmt;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Typed by the person at the keyboard
    User,

    /// Returned by the completion endpoint
    Assistant,
}

impl Role {
    /// Get the role name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn of the conversation
///
/// Messages are immutable: there are no setters, and the conversation only
/// ever appends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Create a message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Author of the message
    pub fn role(&self) -> Role {
        self.role
    }

    /// Raw text content, possibly multi-line
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True for user messages
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = Message::user("hi");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "hi");
        assert!(user.is_user());

        let reply = Message::assistant("line one\nline two");
        assert_eq!(reply.role(), Role::Assistant);
        assert!(!reply.is_user());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
