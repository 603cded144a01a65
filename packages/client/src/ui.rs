//! Terminal output helpers.

use std::io::Write;

use crate::view::Page;

pub const PROMPT: &str = "> ";

/// Redisplay the prompt after printing something
pub fn redisplay_prompt() {
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}

/// Print the visible part of the page followed by the prompt
pub fn print_page(page: &Page) {
    print!("\n{}", page.render());
    redisplay_prompt();
}

/// Print a one-off message for the player followed by the prompt
pub fn print_message(message: &str) {
    print!("\n{}\n", message);
    redisplay_prompt();
}
