//! Full-session transcript tests for the login-then-chat flow.

use std::io::Cursor;

use duochat::app::{ChatApp, Console};

fn run_session(input: &str) -> String {
    let app = ChatApp::new();
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new(input.to_string()), &mut output);
    app.run(&mut console, None, None).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn user1_chats_with_user2_and_prompts_first() {
    assert_eq!(
        run_session("Dhanu\npwd 12\nhello\nexit\n"),
        "Enter your username: Enter your password: \
         Welcome Dhanu!\n\
         Chat started with Harsh. Type 'exit' to end.\n\
         Dhanu: Dhanu sends: Dhanu to Harsh: hello\n\
         Harsh: Ending chat...\n"
    );
}

#[test]
fn user2_chats_with_user1_and_prompts_first() {
    assert_eq!(
        run_session("Harsh\npwd 23\nhey\nexit\n"),
        "Enter your username: Enter your password: \
         Welcome Harsh!\n\
         Chat started with Dhanu. Type 'exit' to end.\n\
         Harsh: Harsh sends: Harsh to Dhanu: hey\n\
         Dhanu: Ending chat...\n"
    );
}

#[test]
fn admin_is_refused_a_chat() {
    let transcript = run_session("admin\nadmin123\n");
    assert!(transcript.ends_with("Admin cannot chat in this version. Exiting...\n"));
    assert!(!transcript.contains("Chat started"));
}

#[test]
fn wrong_password_fails_authentication() {
    assert_eq!(
        run_session("Dhanu\npwd 23\n"),
        "Enter your username: Enter your password: \
         Authentication failed. Exiting...\n"
    );
}

#[test]
fn exit_in_any_casing_ends_the_session() {
    for sentinel in ["exit", "EXIT", "Exit"] {
        let transcript = run_session(&format!("Dhanu\npwd 12\n{}\n", sentinel));
        assert!(transcript.ends_with("Ending chat...\n"), "{}", sentinel);
    }
}

#[test]
fn stream_closing_mid_chat_ends_cleanly() {
    let transcript = run_session("Dhanu\npwd 12\nstill here\n");
    assert!(transcript.contains("Dhanu sends: Dhanu to Harsh: still here"));
    assert!(transcript.ends_with("Harsh: "));
}

#[test]
fn preset_username_only_prompts_for_password() {
    let app = ChatApp::new();
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new("pwd 12\nexit\n".to_string()), &mut output);
    app.run(&mut console, Some("Dhanu"), None).unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(!transcript.contains("Enter your username"));
    assert!(transcript.starts_with("Enter your password: Welcome Dhanu!\n"));
}
