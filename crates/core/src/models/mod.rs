//! Payload types mirroring the chat backend's JSON.
//!
//! Each module keeps its own view of the server entities; shapes that look
//! alike across modules (devices, participants) are not unified.

mod auth;
mod call;
mod chat;
mod file;
mod group;
mod message;

pub use auth::{AuthResponse, AuthTokens, DeviceInfo, OtpChallenge, User, UsernameAvailability};
pub use call::{Call, CallDevice, CallParticipant, CallStatus, CallType, IceServer};
pub use chat::{Chat, ChatSettings, ChatType, Participant};
pub use file::{FileModel, MediaKind};
pub use group::{Group, GroupInvite, GroupMember, GroupRole, GroupSettings};
pub use message::{Location, Message, MessageStatus, MessageType, Reaction, SharedContact};
