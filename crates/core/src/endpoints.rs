//! Endpoint paths, relative to the API base URL.

use urlencoding::encode;

pub const SEND_OTP: &str = "/auth/send-otp";
pub const VERIFY_OTP: &str = "/auth/verify-otp";
pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";
pub const REFRESH_TOKEN: &str = "/auth/refresh";
pub const LOGOUT: &str = "/auth/logout";
pub const ME: &str = "/auth/me";
pub const PROFILE: &str = "/auth/profile";
pub const CHECK_USERNAME: &str = "/auth/check-username";
pub const DEVICES: &str = "/auth/devices";
pub const ACCOUNT: &str = "/auth/account";

pub const CHATS: &str = "/chats";
pub const CHAT_SEARCH: &str = "/chats/search";
pub const MESSAGE_SEARCH: &str = "/messages/search";
pub const GROUPS: &str = "/groups";
pub const CALLS: &str = "/calls";
pub const CALL_HISTORY: &str = "/calls/history";
pub const ICE_SERVERS: &str = "/calls/ice-servers";
pub const FILE_UPLOAD: &str = "/files/upload";

/// Percent-encode one path segment so `/`, `?` and `#` stay inside it.
fn seg(value: &str) -> String {
    encode(value).into_owned()
}

pub fn chat(id: &str) -> String {
    format!("/chats/{}", seg(id))
}

pub fn chat_settings(id: &str) -> String {
    format!("/chats/{}/settings", seg(id))
}

pub fn chat_read(id: &str) -> String {
    format!("/chats/{}/read", seg(id))
}

pub fn chat_messages(chat_id: &str) -> String {
    format!("/chats/{}/messages", seg(chat_id))
}

pub fn chat_media(chat_id: &str) -> String {
    format!("/chats/{}/media", seg(chat_id))
}

pub fn message(id: &str) -> String {
    format!("/messages/{}", seg(id))
}

pub fn message_reactions(id: &str) -> String {
    format!("/messages/{}/reactions", seg(id))
}

pub fn message_forward(id: &str) -> String {
    format!("/messages/{}/forward", seg(id))
}

pub fn group(id: &str) -> String {
    format!("/groups/{}", seg(id))
}

pub fn group_members(id: &str) -> String {
    format!("/groups/{}/members", seg(id))
}

pub fn group_member(id: &str, user_id: &str) -> String {
    format!("/groups/{}/members/{}", seg(id), seg(user_id))
}

pub fn group_member_role(id: &str, user_id: &str) -> String {
    format!("/groups/{}/members/{}/role", seg(id), seg(user_id))
}

pub fn group_leave(id: &str) -> String {
    format!("/groups/{}/leave", seg(id))
}

pub fn group_settings(id: &str) -> String {
    format!("/groups/{}/settings", seg(id))
}

pub fn group_invites(id: &str) -> String {
    format!("/groups/{}/invites", seg(id))
}

pub fn group_join(code: &str) -> String {
    format!("/groups/join/{}", seg(code))
}

pub fn call(id: &str) -> String {
    format!("/calls/{}", seg(id))
}

/// Call lifecycle action: `accept`, `reject`, `end` or `state`.
pub fn call_action(id: &str, action: &str) -> String {
    format!("/calls/{}/{}", seg(id), seg(action))
}

pub fn file(id: &str) -> String {
    format!("/files/{}", seg(id))
}

pub fn file_download(id: &str) -> String {
    format!("/files/{}/download", seg(id))
}
