use duochat::app::console;
use duochat::app::session::ChatApp;

use log::error;

use clap::Parser;

/// Two-user console chat demo
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Username; prompted for when omitted
    #[arg(short, long)]
    username: Option<String>,

    /// Password; prompted for when omitted
    #[arg(short, long)]
    password: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let app = ChatApp::new();
    let mut console = console::stdio();

    if let Err(e) = app.run(
        &mut console,
        args.username.as_deref(),
        args.password.as_deref(),
    ) {
        error!("Session ended with an error: {}", e);
        std::process::exit(1);
    }
}
