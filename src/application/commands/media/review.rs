// src/application/commands/media/review.rs
use super::MediaCommandService;
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, MediaItemDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        media::MediaItem,
    },
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

pub struct RejectMediaCommand {
    pub id: Uuid,
    pub reason: Option<String>,
}

impl MediaCommandService {
    pub async fn approve(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<MediaItemDto> {
        ensure_capability(actor, "media", "approve")?;
        let item = self.repo.approve(id).await?;
        info!(user = %actor.email, file = %item.filename, "media approved");

        self.record(actor, AuditAction::Approve, &item, json!({ "filename": item.filename }))
            .await;
        Ok(MediaItemDto::new(item, true))
    }

    /// Drops a pending item together with its stored file.
    pub async fn reject(
        &self,
        actor: &AuthenticatedUser,
        command: RejectMediaCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "media", "approve")?;
        let item = self.repo.reject(command.id).await?;
        self.discard_file(&item).await;
        info!(user = %actor.email, file = %item.filename, "media rejected");

        self.record(
            actor,
            AuditAction::Reject,
            &item,
            json!({ "filename": item.filename, "reason": command.reason }),
        )
        .await;
        Ok(())
    }

    pub async fn delete_media(&self, actor: &AuthenticatedUser, id: Uuid) -> ApplicationResult<()> {
        ensure_capability(actor, "media", "delete")?;
        let item = self.repo.delete_media(id).await?;
        self.discard_file(&item).await;
        info!(user = %actor.email, file = %item.filename, "media deleted");

        self.record(actor, AuditAction::Delete, &item, json!({ "filename": item.filename }))
            .await;
        Ok(())
    }

    async fn discard_file(&self, item: &MediaItem) {
        if let Err(err) = self.files.remove(&item.relative_path()).await {
            warn!(path = %item.relative_path(), error = %err, "failed to remove media file");
        }
    }

    async fn record(
        &self,
        actor: &AuthenticatedUser,
        action: AuditAction,
        item: &MediaItem,
        details: serde_json::Value,
    ) {
        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                self.clock.utc(),
                actor.email.clone(),
                action,
                AuditEntityType::Media,
                item.id.to_string(),
                details,
            ),
        )
        .await;
    }
}
