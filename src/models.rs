use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Regular,
    Admin,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub sender: String,
    pub receiver: String,
    pub content: String,
}

impl Message {
    pub fn new(sender: &str, receiver: &str, content: &str) -> Self {
        Self {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            content: content.to_string(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}: {}", self.sender, self.receiver, self.content)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    password: String,
    pub role: Role,
}

impl User {
    pub fn regular(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: Role::Regular,
        }
    }

    pub fn admin(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: Role::Admin,
        }
    }

    /// Exact, case-sensitive match of both fields.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn format_outgoing(&self, message: &Message) -> String {
        match self.role {
            Role::Regular => format!("{} sends: {}", self.username, message),
            Role::Admin => format!("Admin {} sends a message: {}", self.username, message),
        }
    }

    /// Deletion notice; only admins can delete messages.
    pub fn format_deletion(&self, message: &Message) -> Option<String> {
        match self.role {
            Role::Admin => Some(format!(
                "Admin {} deleted a message: {}",
                self.username, message
            )),
            Role::Regular => None,
        }
    }
}
