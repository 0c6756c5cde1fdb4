//! Auth CLI commands.

use clap::{Parser, Subcommand};

/// Auth commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Send a one-time password by SMS.
    SendOtp {
        /// Phone number in international format.
        phone: String,
        #[arg(long)]
        country_code: Option<String>,
    },
    /// Verify a one-time password and start a session.
    VerifyOtp {
        phone: String,
        otp: String,
        /// ID returned by send-otp.
        #[arg(long)]
        verification_id: Option<String>,
    },
    /// Create an account.
    Register {
        phone: String,
        /// Display name.
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Log in with phone, email or username and a password.
    Login {
        identifier: String,
        #[arg(long, env = "CHATLINE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Exchange a refresh token for new tokens.
    Refresh { refresh_token: String },
    /// End the current session.
    Logout,
    /// Show the signed-in user.
    Me,
    /// Update profile fields. Only the flags given are changed.
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        about: Option<String>,
        /// Avatar URL.
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        username: Option<String>,
    },
    /// Check whether a username is free.
    CheckUsername { username: String },
    /// Register a device for push notifications.
    RegisterDevice {
        device_id: String,
        /// ios, android or web.
        platform: String,
        #[arg(long)]
        push_token: Option<String>,
        #[arg(long)]
        app_version: Option<String>,
    },
    /// Permanently delete the account.
    DeleteAccount,
}
