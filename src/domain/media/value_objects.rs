// src/domain/media/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "wmv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Upload sub-directory for this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Photo => "photos",
            Self::Video => "videos",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Photo => "photo",
            Self::Video => "video",
        })
    }
}

/// A slugified `stem.ext` file name safe to place under the uploads
/// directory, together with the media kind its extension implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredName {
    stem: String,
    ext: String,
    kind: MediaKind,
}

impl StoredName {
    pub fn from_upload(original: &str, size: usize) -> DomainResult<Self> {
        let original = original.trim();
        let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
        let (stem, ext) = base
            .rsplit_once('.')
            .ok_or_else(|| DomainError::Validation(format!("'{base}' has no file extension")))?;
        let ext = ext.to_ascii_lowercase();
        let kind = MediaKind::from_extension(&ext)
            .ok_or_else(|| DomainError::Validation(format!("unsupported file type: {base}")))?;
        if size == 0 {
            return Err(DomainError::Validation(format!("'{base}' is empty")));
        }

        let mut stem = slug::slugify(stem);
        if stem.is_empty() {
            stem = kind.to_string();
        }
        Ok(Self { stem, ext, kind })
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.ext)
    }

    /// Name used for the `n`th collision, `stem(n).ext`.
    pub fn numbered(&self, n: u32) -> String {
        format!("{}({n}).{}", self.stem, self.ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_and_detects_kind() {
        let name = StoredName::from_upload("Tech Fest 2025!.JPG", 10).unwrap();
        assert_eq!(name.file_name(), "tech-fest-2025.jpg");
        assert_eq!(name.kind(), MediaKind::Photo);
        assert_eq!(name.numbered(2), "tech-fest-2025(2).jpg");
    }

    #[test]
    fn strips_client_paths() {
        let name = StoredName::from_upload("C:\\Users\\me\\clip.MOV", 1).unwrap();
        assert_eq!(name.file_name(), "clip.mov");
        assert_eq!(name.kind(), MediaKind::Video);
    }

    #[test]
    fn rejects_unknown_or_empty_files() {
        assert!(StoredName::from_upload("notes.txt", 10).is_err());
        assert!(StoredName::from_upload("noext", 10).is_err());
        assert!(StoredName::from_upload("clip.mp4", 0).is_err());
    }
}
