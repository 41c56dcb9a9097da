pub mod presets;

use crate::web::models::{ChatResponse, HistoryEntry, Message};
use presets::{Persona, Preset, ReplyLength, Style};

/// Persona, style and length instructions, one per line. Missing style or
/// length presets still take their line, leaving it blank.
pub fn build_system_prompt(role: &str, style: &str, length: &str) -> String {
    format!(
        "{}\n{}\n{}",
        Persona::lookup(role),
        Style::lookup(style),
        ReplyLength::lookup(length)
    )
}

/// Lays out the messages for one completion: the system prompt, each
/// well-formed history pair as user then assistant, then the new message.
pub fn expand_history(
    system_prompt: String,
    history: &[HistoryEntry],
    message: &str,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(Message::system(system_prompt));

    for entry in history {
        if let [user, assistant] = entry.as_slice() {
            messages.push(Message::user(user.as_str()));
            messages.push(Message::assistant(assistant.as_str()));
        }
    }

    messages.push(Message::user(message));
    messages
}

/// The inbound history is echoed back as-is, malformed entries included,
/// with the new turn appended.
pub fn compose_response(history: &[HistoryEntry], message: &str, reply: String) -> ChatResponse {
    let mut extended = history.to_vec();
    extended.push(vec![message.to_string(), reply.clone()]);
    ChatResponse {
        reply,
        history: extended,
    }
}
