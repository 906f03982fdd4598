use super::MediaQueryService;
use crate::application::{
    dto::SharedFileDto,
    error::{ApplicationError, ApplicationResult},
};
use tracing::debug;

impl MediaQueryService {
    /// Resolves a share token to the file it grants access to. Needs no
    /// caller identity: the signature is the credential.
    pub async fn resolve_share(&self, token: &str) -> ApplicationResult<SharedFileDto> {
        let secret = self.settings.load().await?.share_links.secret_key;
        let shared = self
            .signer
            .verify(&secret, token, self.clock.utc())
            .ok_or_else(|| {
                debug!("rejected share token");
                ApplicationError::not_found("share link is invalid or has expired")
            })?;
        Ok(SharedFileDto {
            file_path: shared.file_path,
            expires_at: shared.expires_at,
        })
    }
}
