//! Pretty output formatting.

use chatline_core::models::{
    AuthResponse, AuthTokens, Call, Chat, FileModel, Group, GroupInvite, IceServer, Message,
    OtpChallenge, User, UsernameAvailability,
};
use serde::Serialize;

use crate::error::ClientError;

/// Wire name of a serde enum, e.g. `direct` for `ChatType::Direct`.
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Format a titled list, one blank-line-separated block per item.
fn format_list<T>(title: &str, empty: &str, items: &[T], item: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for value in items {
        output.push_str(&format!("\n{}", item(value)));
        output.push('\n');
    }
    output
}

/// Server message for a response without data.
pub fn format_message(message: &str) -> String {
    if message.is_empty() {
        "Done.".to_string()
    } else {
        message.to_string()
    }
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let mut output = format!("{}\n  ID: {}\n  Phone: {}", user.display_name(), user.id, user.phone);
    if let Some(username) = &user.username {
        output.push_str(&format!("\n  Username: @{}", username));
    }
    if let Some(email) = &user.email {
        output.push_str(&format!("\n  Email: {}", email));
    }
    if let Some(about) = &user.about {
        output.push_str(&format!("\n  About: {}", about));
    }
    output
}

pub fn format_tokens(tokens: &AuthTokens) -> String {
    let mut output = format!("Access token: {}", tokens.access_token);
    if let Some(refresh) = &tokens.refresh_token {
        output.push_str(&format!("\nRefresh token: {}", refresh));
    }
    if let Some(expires_in) = tokens.expires_in {
        output.push_str(&format!("\nExpires in: {}s", expires_in));
    }
    output
}

pub fn format_session(session: &AuthResponse) -> String {
    let heading = if session.is_new_user {
        "Signed in (new account)"
    } else {
        "Signed in"
    };
    format!(
        "{}\n{}\n{}",
        heading,
        format_user(&session.user),
        format_tokens(&session.tokens)
    )
}

pub fn format_otp(challenge: &OtpChallenge) -> String {
    let mut output = "Code sent.".to_string();
    if let Some(id) = &challenge.verification_id {
        output.push_str(&format!("\n  Verification ID: {}", id));
    }
    if let Some(expires_in) = challenge.expires_in {
        output.push_str(&format!("\n  Expires in: {}s", expires_in));
    }
    if let Some(resend_after) = challenge.resend_after {
        output.push_str(&format!("\n  Resend after: {}s", resend_after));
    }
    output
}

pub fn format_availability(availability: &UsernameAvailability) -> String {
    if availability.available {
        return "Available".to_string();
    }
    if availability.suggestions.is_empty() {
        "Taken".to_string()
    } else {
        format!("Taken. Try: {}", availability.suggestions.join(", "))
    }
}

/// Format a chat for display.
pub fn format_chat(chat: &Chat) -> String {
    let title = chat.title("");
    let mut output = format!("{} [{}]\n  ID: {}", title, label(&chat.chat_type), chat.id);
    if chat.unread_count > 0 {
        output.push_str(&format!("\n  Unread: {}", chat.unread_count));
    }
    if let Some(last) = &chat.last_message {
        output.push_str(&format!("\n  Last: {}", last.preview()));
    }
    if chat.settings.muted {
        output.push_str("\n  Muted");
    }
    output
}

pub fn format_chats(chats: &[Chat]) -> String {
    format_list("CHATS", "No chats found.", chats, format_chat)
}

/// Format a message for display.
pub fn format_message_item(message: &Message) -> String {
    let mut output = format!(
        "{}: {}\n  ID: {}\n  Sent: {} ({})",
        message.sender_id,
        message.preview(),
        message.id,
        message.created_at.format("%Y-%m-%d %H:%M"),
        label(&message.status)
    );
    if let Some(reply_to) = &message.reply_to {
        output.push_str(&format!("\n  Reply to: {}", reply_to));
    }
    if message.is_edited {
        output.push_str("\n  Edited");
    }
    if !message.reactions.is_empty() {
        let emojis: Vec<_> = message.reactions.iter().map(|r| r.emoji.as_str()).collect();
        output.push_str(&format!("\n  Reactions: {}", emojis.join(" ")));
    }
    output
}

pub fn format_messages(messages: &[Message]) -> String {
    format_list("MESSAGES", "No messages found.", messages, format_message_item)
}

/// Format a group for display.
pub fn format_group(group: &Group) -> String {
    let members = group.member_count.max(group.members.len() as u32);
    let mut output = format!("{}\n  ID: {}\n  Members: {}", group.name, group.id, members);
    if let Some(desc) = &group.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

pub fn format_groups(groups: &[Group]) -> String {
    format_list("GROUPS", "No groups found.", groups, format_group)
}

pub fn format_invite(invite: &GroupInvite) -> String {
    let mut output = format!("Invite {}\n  Group: {}", invite.code, invite.group_id);
    if let Some(link) = &invite.link {
        output.push_str(&format!("\n  Link: {}", link));
    }
    if let Some(expires_at) = invite.expires_at {
        output.push_str(&format!("\n  Expires: {}", expires_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(max_uses) = invite.max_uses {
        output.push_str(&format!("\n  Uses: {}/{}", invite.uses, max_uses));
    }
    output
}

/// Format a call for display.
pub fn format_call(call: &Call) -> String {
    let mut output = format!(
        "{} call [{}]\n  ID: {}\n  Caller: {}",
        label(&call.call_type),
        label(&call.status),
        call.id,
        call.caller_id
    );
    if !call.participants.is_empty() {
        let ids: Vec<_> = call.participants.iter().map(|p| p.user_id.as_str()).collect();
        output.push_str(&format!("\n  Participants: {}", ids.join(", ")));
    }
    if let Some(secs) = call.duration_secs() {
        output.push_str(&format!("\n  Duration: {}m{:02}s", secs / 60, secs % 60));
    }
    output
}

pub fn format_calls(calls: &[Call]) -> String {
    format_list("CALLS", "No calls found.", calls, format_call)
}

pub fn format_ice_servers(servers: &[IceServer]) -> String {
    format_list("ICE SERVERS", "No ICE servers.", servers, |server| {
        let mut output = server.urls.join(", ");
        if let Some(username) = &server.username {
            output.push_str(&format!("\n  Username: {}", username));
        }
        output
    })
}

/// Format a file for display.
pub fn format_file(file: &FileModel) -> String {
    format!(
        "{} [{}, {}]\n  ID: {}\n  URL: {}",
        file.name,
        file.mime_type,
        file.human_size(),
        file.id,
        file.url
    )
}

pub fn format_files(files: &[FileModel]) -> String {
    format_list("FILES", "No files found.", files, format_file)
}

/// Format a failure with a hint for what to do next.
pub fn format_error(error: &ClientError) -> String {
    let Some(api) = error.api_error() else {
        return format!("Error: {}", error);
    };
    let mut output = format!("Error: {}", api.user_message());
    if let Some(status) = api.status_code() {
        output.push_str(&format!(" (HTTP {})", status));
    }
    if api.requires_login() {
        output.push_str("\nHint: log in again and pass the new token with --token.");
    } else if api.is_retryable() {
        output.push_str("\nHint: check --base-url and your network, then retry.");
    }
    output
}

#[cfg(test)]
mod tests {
    use chatline_core::ApiError;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_chat_uses_other_participant() {
        let chat: Chat = serde_json::from_value(json!({
            "id": "c1",
            "type": "direct",
            "participants": [{"userId": "u2", "name": "Grace"}],
            "unreadCount": 3
        }))
        .unwrap();

        assert_eq!(format_chat(&chat), "Grace [direct]\n  ID: c1\n  Unread: 3");
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_chats(&[]), "No chats found.");
        assert_eq!(format_files(&[]), "No files found.");
    }

    #[test]
    fn test_format_availability() {
        let taken = UsernameAvailability {
            available: false,
            suggestions: vec!["ada_1".to_string()],
        };
        assert_eq!(format_availability(&taken), "Taken. Try: ada_1");
    }

    #[test]
    fn test_format_error_hints() {
        let expired = ClientError::Api(ApiError::SessionExpired {
            message: "Token expired".to_string(),
        });
        assert_eq!(
            format_error(&expired),
            "Error: Token expired (HTTP 401)\nHint: log in again and pass the new token with --token."
        );

        let offline = format_error(&ClientError::Api(ApiError::NoConnection));
        assert!(offline.ends_with("then retry."));
    }

    #[test]
    fn test_format_call_duration() {
        let call: Call = serde_json::from_value(json!({
            "id": "k1",
            "type": "video",
            "status": "ended",
            "callerId": "u1",
            "duration": 125
        }))
        .unwrap();

        assert!(format_call(&call).ends_with("Duration: 2m05s"));
    }
}
