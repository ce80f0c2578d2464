use colored::Colorize;
use gateway_client::Theme;
use std::io::{self, Write};

/// Print a notification raised by the client; stderr keeps tables on stdout clean
pub fn notification(theme: Theme, message: &str) {
    match theme {
        Theme::Success => eprintln!("{} {}", "✔".green(), message.green()),
        Theme::Warning => eprintln!("{} {}", "!".yellow().bold(), message.yellow()),
        Theme::Error => eprintln!("{} {}", "✖".red(), message.red().bold()),
    }
}

/// Print a progress line for a single mutating call
pub fn status_message(message: &str) {
    print!("{} {} ... ", "→".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    println!("{}", message.green());
}

pub fn warning_message(message: &str) {
    notification(Theme::Warning, message);
}

/// Point the user at the login page after the session expired
pub fn login_prompt(url: &str) {
    notification(
        Theme::Warning,
        &format!("Session expired. Log in at {} and run the command again", url.underline()),
    );
}

/// Title above a table
pub fn section_header(title: &str) {
    println!("\n{}", title.cyan().bold());
}

pub fn info_message(message: &str) {
    println!("{}", message.dimmed());
}
