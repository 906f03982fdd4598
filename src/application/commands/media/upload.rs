// src/application/commands/media/upload.rs
use super::MediaCommandService;
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, MediaItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        media::{MediaItem, MediaKind, StoredName},
    },
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

pub struct UploadMediaCommand {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Kind the uploader claims; must agree with the file extension.
    pub kind: Option<MediaKind>,
    pub album_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub metadata: serde_json::Value,
}

impl MediaCommandService {
    /// Stores the file and files it into the catalogue, or into the
    /// approval queue while media approval is enabled.
    pub async fn register_upload(
        &self,
        actor: &AuthenticatedUser,
        command: UploadMediaCommand,
    ) -> ApplicationResult<MediaItemDto> {
        ensure_capability(actor, "media", "upload")?;
        let name = StoredName::from_upload(&command.filename, command.bytes.len())?;
        if let Some(kind) = command.kind {
            if kind != name.kind() {
                return Err(ApplicationError::validation(format!(
                    "'{}' is not a {kind}",
                    command.filename
                )));
            }
        }
        let pending = self.settings.load().await?.media_approval.enabled;

        let filename = self.files.save(&name, &command.bytes).await?;
        let item = MediaItem {
            id: Uuid::new_v4(),
            filename,
            kind: name.kind(),
            album_id: command.album_id,
            tags: command.tags,
            metadata: command.metadata,
            uploader: actor.email.clone(),
            uploaded_at: self.clock.utc(),
            views: 0,
        };
        if let Err(err) = self.repo.insert_media(item.clone(), pending).await {
            if let Err(cleanup) = self.files.remove(&item.relative_path()).await {
                warn!(path = %item.relative_path(), error = %cleanup, "orphaned upload left behind");
            }
            return Err(err.into());
        }
        info!(user = %actor.email, file = %item.filename, pending, "media uploaded");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                item.uploaded_at,
                actor.email.clone(),
                AuditAction::Upload,
                AuditEntityType::Media,
                item.id.to_string(),
                json!({
                    "filename": item.filename,
                    "type": item.kind,
                    "album_id": item.album_id,
                    "pending_approval": pending,
                }),
            ),
        )
        .await;
        Ok(MediaItemDto::new(item, !pending))
    }
}
