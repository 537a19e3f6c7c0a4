use std::io::{BufRead, Write};
use std::mem;

use log::info;

use crate::app::console::Console;
use crate::models::{Message, User};

const EXIT_WORD: &str = "exit";

/// Turn-based chat between two users: prompt the current user, print the
/// formatted message, then swap sides.
pub struct Chat {
    current: User,
    other: User,
}

impl Chat {
    pub fn new(current: User, other: User) -> Self {
        Self { current, other }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), anyhow::Error> {
        console.print_line(&format!(
            "Chat started with {}. Type 'exit' to end.",
            self.other.username
        ))?;

        loop {
            let Some(content) = console.prompt(&format!("{}: ", self.current.username))? else {
                info!("Input stream closed, ending chat");
                break;
            };

            if content.eq_ignore_ascii_case(EXIT_WORD) {
                console.print_line("Ending chat...")?;
                break;
            }

            let message = Message::new(&self.current.username, &self.other.username, &content);
            console.print_line(&self.current.format_outgoing(&message))?;

            mem::swap(&mut self.current, &mut self.other);
        }

        Ok(())
    }
}
