pub mod chat;
pub mod console;
pub mod session;

pub use chat::Chat;
pub use console::Console;
pub use session::ChatApp;
