// src/application/commands/media/albums.rs
use super::MediaCommandService;
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AlbumDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        media::Album,
    },
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct CreateAlbumCommand {
    pub name: String,
    pub description: Option<String>,
}

impl MediaCommandService {
    pub async fn create_album(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAlbumCommand,
    ) -> ApplicationResult<AlbumDto> {
        ensure_capability(actor, "media", "upload")?;
        let name = command.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("album name cannot be empty"));
        }

        let album = Album {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: command.description.unwrap_or_default().trim().to_string(),
            creator: actor.email.clone(),
            created_at: self.clock.utc(),
            media_count: 0,
        };
        self.repo.insert_album(album.clone()).await?;
        info!(user = %actor.email, album = %album.name, "album created");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                album.created_at,
                actor.email.clone(),
                AuditAction::Create,
                AuditEntityType::Album,
                album.id.to_string(),
                json!({ "name": album.name }),
            ),
        )
        .await;
        Ok(album.into())
    }

    /// Removes the album; its media stay in the catalogue unassigned.
    pub async fn delete_album(&self, actor: &AuthenticatedUser, id: Uuid) -> ApplicationResult<()> {
        ensure_capability(actor, "media", "delete")?;
        let album = self.repo.delete_album(id).await?;
        info!(user = %actor.email, album = %album.name, "album deleted");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                self.clock.utc(),
                actor.email.clone(),
                AuditAction::Delete,
                AuditEntityType::Album,
                id.to_string(),
                json!({ "name": album.name }),
            ),
        )
        .await;
        Ok(())
    }
}
