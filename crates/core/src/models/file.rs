use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad media category, used to filter a chat's shared media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Category of a MIME type; anything unrecognized is a document.
    pub fn from_mime(mime_type: &str) -> Self {
        match mime_type.split('/').next() {
            Some("image") => MediaKind::Image,
            Some("video") => MediaKind::Video,
            Some("audio") => MediaKind::Audio,
            _ => MediaKind::Document,
        }
    }
}

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileModel {
    pub id: String,
    pub name: String,
    pub url: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Duration in seconds for audio and video.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl FileModel {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }

    /// Human-readable size, e.g. `1.5 MB`.
    pub fn human_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size, UNITS[0])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}
