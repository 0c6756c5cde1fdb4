//! File CLI commands.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use chatline_core::models::MediaKind as CoreMediaKind;

/// File commands.
#[derive(Debug, Parser)]
pub struct FilesCommand {
    #[command(subcommand)]
    pub action: FilesAction,
}

/// Media category filter (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl From<MediaKind> for CoreMediaKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => CoreMediaKind::Image,
            MediaKind::Video => CoreMediaKind::Video,
            MediaKind::Audio => CoreMediaKind::Audio,
            MediaKind::Document => CoreMediaKind::Document,
        }
    }
}

/// Available file actions.
#[derive(Debug, Subcommand)]
pub enum FilesAction {
    /// Upload a file from disk.
    Upload {
        path: PathBuf,
        #[arg(long, default_value = "application/octet-stream")]
        mime_type: String,
        /// Attach the upload to a chat.
        #[arg(long)]
        chat_id: Option<String>,
        #[arg(long)]
        caption: Option<String>,
    },
    /// Get file metadata by ID.
    Get { id: String },
    /// Delete file by ID.
    Delete { id: String },
    /// List media shared in a chat.
    Media {
        chat_id: String,
        #[arg(long)]
        kind: Option<MediaKind>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Download file contents.
    Download {
        id: String,
        /// Destination path; defaults to the last component of the file ID in
        /// the current directory.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Where `files download` writes when no `--output` is given.
///
/// Only the final component of the ID is used, so an ID such as `../x`
/// cannot write outside the current directory.
pub fn default_output_path(id: &str) -> PathBuf {
    Path::new(id)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("download"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_stays_in_current_dir() {
        assert_eq!(default_output_path("f1"), PathBuf::from("f1"));
        assert_eq!(default_output_path("../x"), PathBuf::from("x"));
        assert_eq!(default_output_path("/etc/passwd"), PathBuf::from("passwd"));
        assert_eq!(default_output_path(".."), PathBuf::from("download"));
        assert_eq!(default_output_path(""), PathBuf::from("download"));
    }
}
