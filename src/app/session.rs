use std::io::{BufRead, Write};
use std::ptr;

use log::{error, info};

use crate::app::chat::Chat;
use crate::app::console::Console;
use crate::models::{Role, User};

/// The fixed user roster and the login-then-chat flow around it.
pub struct ChatApp {
    admin: User,
    user1: User,
    user2: User,
}

impl ChatApp {
    pub fn new() -> Self {
        Self::with_users(
            User::admin("admin", "admin123"),
            User::regular("Dhanu", "pwd 12"),
            User::regular("Harsh", "pwd 23"),
        )
    }

    pub fn with_users(admin: User, user1: User, user2: User) -> Self {
        Self {
            admin,
            user1,
            user2,
        }
    }

    /// Checked in a fixed order; the first match wins.
    fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        [&self.user1, &self.user2, &self.admin]
            .into_iter()
            .find(|user| user.authenticate(username, password))
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), anyhow::Error> {
        let username = match username {
            Some(username) => username.to_string(),
            None => Self::prompt_credential(console, "Enter your username: ")?,
        };
        let password = match password {
            Some(password) => password.to_string(),
            None => Self::prompt_credential(console, "Enter your password: ")?,
        };

        info!("Authenticating {} using password", username);
        let Some(user) = self.authenticate(&username, &password) else {
            error!("Authentication failed for {}", username);
            console.print_line("Authentication failed. Exiting...")?;
            return Ok(());
        };
        info!("{} authenticated", user.username);

        match user.role {
            Role::Regular => {
                console.print_line(&format!("Welcome {}!", user.username))?;
                // The pairing is fixed per branch: whoever authenticated,
                // the partner is the opposite hardcoded regular user.
                let mut chat = if ptr::eq(user, &self.user1) {
                    Chat::new(self.user1.clone(), self.user2.clone())
                } else {
                    Chat::new(self.user2.clone(), self.user1.clone())
                };
                chat.run(console)
            }
            Role::Admin => {
                console.print_line("Welcome Admin!")?;
                console.print_line("Admin cannot chat in this version. Exiting...")?;
                Ok(())
            }
        }
    }

    fn prompt_credential<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> Result<String, anyhow::Error> {
        match console.prompt(prompt)? {
            Some(line) => Ok(line),
            None => Err(anyhow::anyhow!(
                "input stream ended before credentials were provided"
            )),
        }
    }
}

impl Default for ChatApp {
    fn default() -> Self {
        Self::new()
    }
}
