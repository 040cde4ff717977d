//! Screen rendering for room snapshots.
//!
//! Every snapshot redraws the whole terminal: the user's own name, the member
//! list with per-user colors, then the retained comments.

use hiroba_server::infrastructure::dto::{
    http::{CommentDto, UserDto},
    websocket::RoomStateMessage,
};

/// Move the cursor home and clear the screen
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const RESET: &str = "\x1b[0m";
/// Gray, used for system comments
const SYSTEM_COLOR: &str = "\x1b[90m";
/// Sender colors, indexed by the user's color index (red through cyan)
const USER_COLORS: [&str; 6] = [
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
];
const SEPARATOR: &str = "------------------------------------------------------------";

/// Room formatter for client display
pub struct RoomFormatter;

impl RoomFormatter {
    /// Render a full screen for one room snapshot
    ///
    /// # Arguments
    ///
    /// * `state` - The snapshot pushed by the server
    /// * `my_name` - The display name this client joined with
    pub fn format_room_state(state: &RoomStateMessage, my_name: &str) -> String {
        let mut output = String::new();
        output.push_str(CLEAR_SCREEN);
        output.push_str(&format!("Your Name: {}\n", my_name));
        output.push_str(&Self::format_members(&state.joined_users));
        output.push_str(SEPARATOR);
        output.push('\n');

        if state.latest_comments.is_empty() {
            output.push_str(&Self::colorize("(No comments yet)", SYSTEM_COLOR));
            output.push('\n');
        } else {
            for comment in &state.latest_comments {
                output.push_str(&Self::format_comment(comment));
                output.push('\n');
            }
        }

        output.push_str(SEPARATOR);
        output.push('\n');
        output
    }

    /// Format the "Members:" line
    pub fn format_members(users: &[UserDto]) -> String {
        let names = users
            .iter()
            .map(|user| Self::colorize(&user.profile.name, Self::user_color(user.color)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Members: {}\n", names)
    }

    /// Format one comment line, without the trailing newline
    pub fn format_comment(comment: &CommentDto) -> String {
        match (&comment.commenter, comment.is_system_comment) {
            (Some(user), false) => format!(
                "{}: {}",
                Self::colorize(&user.profile.name, Self::user_color(user.color)),
                comment.body
            ),
            _ => Self::colorize(&comment.body, SYSTEM_COLOR),
        }
    }

    /// Format a notice printed below the room, e.g. a rejected comment
    pub fn format_notice(message: &str) -> String {
        format!("\n{}\n", Self::colorize(message, SYSTEM_COLOR))
    }

    fn user_color(color: u8) -> &'static str {
        USER_COLORS[usize::from(color) % USER_COLORS.len()]
    }

    fn colorize(text: &str, color: &str) -> String {
        format!("{}{}{}", color, text, RESET)
    }
}
