//! UI utilities for the client.

use std::io::Write;

/// Prompt shown while waiting for a comment
pub const INPUT_PROMPT: &str = "> ";

/// Redisplay the prompt after the screen has been redrawn
pub fn redisplay_prompt() {
    print!("{}", INPUT_PROMPT);
    std::io::stdout().flush().ok();
}
