// src/application/commands/media/share.rs
use super::MediaCommandService;
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ShareLinkDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        media::ShareRecord,
    },
};
use chrono::Duration;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

const MAX_EXPIRY_HOURS: u32 = 24 * 30;

pub struct ShareMediaCommand {
    pub media_id: Uuid,
    /// Falls back to the configured default when unset.
    pub expiry_hours: Option<u32>,
}

impl MediaCommandService {
    /// Issues a signed, expiring link to a published item.
    pub async fn share(
        &self,
        actor: &AuthenticatedUser,
        command: ShareMediaCommand,
    ) -> ApplicationResult<ShareLinkDto> {
        ensure_capability(actor, "media", "share")?;
        let settings = self.settings.load().await?.share_links;
        let hours = command
            .expiry_hours
            .unwrap_or(settings.default_expiry_hours);
        if hours == 0 || hours > MAX_EXPIRY_HOURS {
            return Err(ApplicationError::validation(format!(
                "expiry must be between 1 and {MAX_EXPIRY_HOURS} hours"
            )));
        }

        let index = self.repo.load().await?;
        let item = index
            .find_media(command.media_id)
            .ok_or_else(|| ApplicationError::not_found(format!("media {}", command.media_id)))?;
        let file_path = item.relative_path();

        let now = self.clock.utc();
        let expires_at = now + Duration::hours(i64::from(hours));
        let token = self
            .signer
            .sign(&settings.secret_key, &file_path, expires_at)?;

        self.repo
            .record_share(ShareRecord {
                token: token.clone(),
                media_id: command.media_id,
                file_path: file_path.clone(),
                created_by: actor.email.clone(),
                created_at: now,
                expires_at,
            })
            .await?;
        info!(user = %actor.email, path = %file_path, hours, "share link issued");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                now,
                actor.email.clone(),
                AuditAction::Share,
                AuditEntityType::ShareLink,
                command.media_id.to_string(),
                json!({ "file_path": file_path, "expiry_hours": hours }),
            ),
        )
        .await;

        Ok(ShareLinkDto {
            token,
            media_id: command.media_id,
            expires_at,
            expiry_hours: hours,
        })
    }
}
