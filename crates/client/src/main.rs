//! chatline-client CLI entry point.

use anyhow::Context;
use chatline_client::cli::auth::AuthAction;
use chatline_client::cli::calls::CallsAction;
use chatline_client::cli::chats::ChatsAction;
use chatline_client::cli::files::{default_output_path, FilesAction};
use chatline_client::cli::groups::GroupsAction;
use chatline_client::cli::messages::MessagesAction;
use chatline_client::cli::{Cli, Commands};
use chatline_client::output::{pretty, Printer};
use chatline_client::{ChatlineClient, ClientError};
use chatline_core::models::{CallType, DeviceInfo};
use chatline_core::requests::{
    CreateChatRequest, CreateGroupRequest, CreateInviteRequest, InitiateCallRequest,
    ListChatsQuery, ListMessagesQuery, LoginRequest, MediaQuery, PageQuery, RegisterRequest,
    SearchMessagesQuery, SendMessageRequest, SendOtpRequest, UpdateCallStateRequest,
    UpdateChatSettingsRequest, UpdateGroupRequest, UpdateGroupSettingsRequest,
    UpdateProfileRequest, UploadFileRequest, VerifyOtpRequest,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatline_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ChatlineClient::new(cli.config()).context("failed to create client")?;
    let printer = Printer::new(cli.format, cli.quiet);

    match run(&client, cli.command, printer).await {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(error) => {
            match error.downcast_ref::<ClientError>() {
                Some(client_error) => {
                    if let Some(output) = printer.error(client_error) {
                        eprintln!("{}", output);
                    }
                }
                None => eprintln!("Error: {:#}", error),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(
    client: &ChatlineClient,
    command: Commands,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    match command {
        Commands::Auth(cmd) => run_auth(client, cmd.action, printer).await,
        Commands::Chats(cmd) => run_chats(client, cmd.action, printer).await,
        Commands::Messages(cmd) => run_messages(client, cmd.action, printer).await,
        Commands::Groups(cmd) => run_groups(client, cmd.action, printer).await,
        Commands::Calls(cmd) => run_calls(client, cmd.action, printer).await,
        Commands::Files(cmd) => run_files(client, cmd.action, printer).await,
    }
}

async fn run_auth(
    client: &ChatlineClient,
    action: AuthAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let auth = client.auth();
    let output = match action {
        AuthAction::SendOtp {
            phone,
            country_code,
        } => {
            let req = SendOtpRequest {
                country_code,
                ..SendOtpRequest::new(phone)
            };
            printer.response(&auth.send_otp(req).await?, pretty::format_otp)
        }
        AuthAction::VerifyOtp {
            phone,
            otp,
            verification_id,
        } => {
            let req = VerifyOtpRequest {
                verification_id,
                ..VerifyOtpRequest::new(phone, otp)
            };
            printer.response(&auth.verify_otp(req).await?, pretty::format_session)
        }
        AuthAction::Register {
            phone,
            name,
            email,
            username,
            password,
        } => {
            let req = RegisterRequest {
                email,
                username,
                password,
                ..RegisterRequest::new(phone, name)
            };
            printer.response(&auth.register(req).await?, pretty::format_session)
        }
        AuthAction::Login {
            identifier,
            password,
        } => {
            let req = LoginRequest::new(identifier, password);
            printer.response(&auth.login(req).await?, pretty::format_session)
        }
        AuthAction::Refresh { refresh_token } => {
            printer.response(&auth.refresh_token(refresh_token).await?, pretty::format_tokens)
        }
        AuthAction::Logout => printer.response(&auth.logout().await?, |v| v.to_string()),
        AuthAction::Me => printer.response(&auth.me().await?, pretty::format_user),
        AuthAction::UpdateProfile {
            name,
            about,
            avatar,
            email,
            username,
        } => {
            let req = UpdateProfileRequest {
                name,
                about,
                avatar,
                email,
                username,
            };
            if req.is_empty() {
                anyhow::bail!("nothing to update: pass at least one field flag");
            }
            printer.response(&auth.update_profile(req).await?, pretty::format_user)
        }
        AuthAction::CheckUsername { username } => printer.response(
            &auth.check_username(&username).await?,
            pretty::format_availability,
        ),
        AuthAction::RegisterDevice {
            device_id,
            platform,
            push_token,
            app_version,
        } => {
            let device = DeviceInfo {
                push_token,
                app_version,
                ..DeviceInfo::new(device_id, platform)
            };
            printer.response(&auth.register_device(device).await?, |v| v.to_string())
        }
        AuthAction::DeleteAccount => {
            printer.response(&auth.delete_account().await?, |v| v.to_string())
        }
    };
    Ok(output)
}

async fn run_chats(
    client: &ChatlineClient,
    action: ChatsAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let chats = client.chats();
    let output = match action {
        ChatsAction::List {
            page,
            limit,
            archived,
        } => {
            let query = ListChatsQuery {
                page,
                limit,
                archived,
            };
            printer.response(&chats.list_chats(query).await?, |c| pretty::format_chats(c))
        }
        ChatsAction::Get { id } => printer.response(&chats.get_chat(&id).await?, pretty::format_chat),
        ChatsAction::Create { participant_id } => {
            let req = CreateChatRequest { participant_id };
            printer.response(&chats.create_chat(req).await?, pretty::format_chat)
        }
        ChatsAction::Settings {
            id,
            mute,
            unmute,
            pinned,
            archived,
            wallpaper,
        } => {
            let mut req = UpdateChatSettingsRequest {
                pinned,
                archived,
                wallpaper,
                ..UpdateChatSettingsRequest::new()
            };
            if mute {
                req = req.mute(None);
            } else if unmute {
                req = req.unmute();
            }
            printer.response(&chats.update_settings(&id, req).await?, pretty::format_chat)
        }
        ChatsAction::Read { id } => printer.response(&chats.mark_read(&id).await?, |v| v.to_string()),
        ChatsAction::Delete { id } => {
            printer.response(&chats.delete_chat(&id).await?, |v| v.to_string())
        }
        ChatsAction::Search { query } => {
            printer.response(&chats.search_chats(&query).await?, |c| pretty::format_chats(c))
        }
    };
    Ok(output)
}

async fn run_messages(
    client: &ChatlineClient,
    action: MessagesAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let messages = client.messages();
    let output = match action {
        MessagesAction::List {
            chat_id,
            before,
            after,
            limit,
        } => {
            let query = ListMessagesQuery {
                before,
                after,
                limit,
            };
            printer.response(&messages.list_messages(&chat_id, query).await?, |m| {
                pretty::format_messages(m)
            })
        }
        MessagesAction::Send {
            chat_id,
            text,
            reply_to,
        } => {
            let req = SendMessageRequest {
                reply_to,
                ..SendMessageRequest::text(text)
            };
            printer.response(
                &messages.send_message(&chat_id, req).await?,
                pretty::format_message_item,
            )
        }
        MessagesAction::Edit { id, content } => printer.response(
            &messages.edit_message(&id, content).await?,
            pretty::format_message_item,
        ),
        MessagesAction::Delete { id, for_everyone } => printer.response(
            &messages.delete_message(&id, for_everyone).await?,
            |v| v.to_string(),
        ),
        MessagesAction::React { id, emoji } => printer.response(
            &messages.react(&id, emoji).await?,
            pretty::format_message_item,
        ),
        MessagesAction::Unreact { id } => {
            printer.response(&messages.remove_reaction(&id).await?, |v| v.to_string())
        }
        MessagesAction::Forward { id, chat_ids } => {
            printer.response(&messages.forward(&id, chat_ids).await?, |m| {
                pretty::format_messages(m)
            })
        }
        MessagesAction::Search {
            query,
            chat_id,
            limit,
        } => {
            let query = SearchMessagesQuery {
                chat_id,
                limit,
                ..SearchMessagesQuery::new(query)
            };
            printer.response(&messages.search_messages(query).await?, |m| {
                pretty::format_messages(m)
            })
        }
    };
    Ok(output)
}

async fn run_groups(
    client: &ChatlineClient,
    action: GroupsAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let groups = client.groups();
    let output = match action {
        GroupsAction::List { page, limit } => {
            let query = PageQuery { page, limit };
            printer.response(&groups.list_groups(query).await?, |g| pretty::format_groups(g))
        }
        GroupsAction::Get { id } => {
            printer.response(&groups.get_group(&id).await?, pretty::format_group)
        }
        GroupsAction::Create {
            name,
            description,
            members,
        } => {
            let req = CreateGroupRequest {
                description,
                ..CreateGroupRequest::new(name).with_members(members)
            };
            printer.response(&groups.create_group(req).await?, pretty::format_group)
        }
        GroupsAction::Update {
            id,
            name,
            description,
            avatar,
        } => {
            let req = UpdateGroupRequest {
                name,
                description,
                avatar,
            };
            printer.response(&groups.update_group(&id, req).await?, pretty::format_group)
        }
        GroupsAction::Delete { id } => {
            printer.response(&groups.delete_group(&id).await?, |v| v.to_string())
        }
        GroupsAction::AddMembers { id, user_ids } => printer.response(
            &groups.add_members(&id, user_ids).await?,
            pretty::format_group,
        ),
        GroupsAction::RemoveMember { id, user_id } => printer.response(
            &groups.remove_member(&id, &user_id).await?,
            |v| v.to_string(),
        ),
        GroupsAction::SetRole { id, user_id, role } => printer.response(
            &groups.update_member_role(&id, &user_id, role.into()).await?,
            |v| v.to_string(),
        ),
        GroupsAction::Leave { id } => {
            printer.response(&groups.leave_group(&id).await?, |v| v.to_string())
        }
        GroupsAction::Settings {
            id,
            only_admins_can_message,
            only_admins_can_edit_info,
            approval_required,
        } => {
            let req = UpdateGroupSettingsRequest {
                only_admins_can_message,
                only_admins_can_edit_info,
                approval_required,
            };
            printer.response(&groups.update_settings(&id, req).await?, pretty::format_group)
        }
        GroupsAction::Invite {
            id,
            expires_in_hours,
            max_uses,
        } => {
            let req = CreateInviteRequest {
                expires_in_hours,
                max_uses,
            };
            printer.response(&groups.create_invite(&id, req).await?, pretty::format_invite)
        }
        GroupsAction::Join { code } => {
            printer.response(&groups.join_by_invite(&code).await?, pretty::format_group)
        }
    };
    Ok(output)
}

async fn run_calls(
    client: &ChatlineClient,
    action: CallsAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let calls = client.calls();
    let output = match action {
        CallsAction::Start {
            video,
            users,
            chat,
            group,
        } => {
            let call_type = if video { CallType::Video } else { CallType::Audio };
            let req = match (chat, group) {
                (Some(chat_id), _) => InitiateCallRequest::in_chat(call_type, chat_id),
                (None, Some(group_id)) => InitiateCallRequest::in_group(call_type, group_id),
                (None, None) => InitiateCallRequest::to_users(call_type, users),
            };
            printer.response(&calls.initiate_call(req).await?, pretty::format_call)
        }
        CallsAction::Accept { id } => {
            printer.response(&calls.accept_call(&id).await?, pretty::format_call)
        }
        CallsAction::Reject { id, reason } => {
            printer.response(&calls.reject_call(&id, reason).await?, pretty::format_call)
        }
        CallsAction::End { id } => printer.response(&calls.end_call(&id).await?, pretty::format_call),
        CallsAction::Get { id } => printer.response(&calls.get_call(&id).await?, pretty::format_call),
        CallsAction::State { id, muted, video } => {
            let req = UpdateCallStateRequest {
                is_muted: muted,
                is_video_enabled: video,
            };
            printer.response(&calls.update_call_state(&id, req).await?, pretty::format_call)
        }
        CallsAction::History { page, limit } => {
            let query = PageQuery { page, limit };
            printer.response(&calls.call_history(query).await?, |c| pretty::format_calls(c))
        }
        CallsAction::IceServers => printer.response(&calls.ice_servers().await?, |s| {
            pretty::format_ice_servers(s)
        }),
    };
    Ok(output)
}

async fn run_files(
    client: &ChatlineClient,
    action: FilesAction,
    printer: Printer,
) -> anyhow::Result<Option<String>> {
    let files = client.files();
    let output = match action {
        FilesAction::Upload {
            path,
            mime_type,
            chat_id,
            caption,
        } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            let req = UploadFileRequest {
                chat_id,
                caption,
                ..UploadFileRequest::new(file_name, mime_type, bytes)
            };
            printer.response(&files.upload(req).await?, pretty::format_file)
        }
        FilesAction::Get { id } => printer.response(&files.get_file(&id).await?, pretty::format_file),
        FilesAction::Delete { id } => {
            printer.response(&files.delete_file(&id).await?, |v| v.to_string())
        }
        FilesAction::Media {
            chat_id,
            kind,
            page,
            limit,
        } => {
            let query = MediaQuery {
                kind: kind.map(Into::into),
                page,
                limit,
            };
            printer.response(&files.list_chat_media(&chat_id, query).await?, |f| {
                pretty::format_files(f)
            })
        }
        FilesAction::Download { id, output } => {
            let bytes = files.download(&id).await?;
            let path = output.unwrap_or_else(|| default_output_path(&id));
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            (!printer.quiet).then(|| format!("Saved {} bytes to {}", bytes.len(), path.display()))
        }
    };
    Ok(output)
}
