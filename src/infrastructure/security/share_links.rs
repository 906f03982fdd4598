// src/infrastructure/security/share_links.rs
//! Signed, expiring share tokens.
//!
//! A token is `base64url("{path}|{expiry_unix}") + "." + hex(hmac_sha256)`,
//! the MAC being computed over the raw `path|expiry` payload.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::{ShareLinkSigner, SharedFile},
};
use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Default, Clone)]
pub struct HmacShareLinkSigner;

impl HmacShareLinkSigner {
    fn mac(secret: &str, payload: &str) -> Option<HmacSha256> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes()).ok()?;
        mac.update(payload.as_bytes());
        Some(mac)
    }
}

impl ShareLinkSigner for HmacShareLinkSigner {
    fn sign(
        &self,
        secret: &str,
        file_path: &str,
        expires_at: DateTime<Utc>,
    ) -> ApplicationResult<String> {
        let payload = format!("{file_path}|{}", expires_at.timestamp());
        let mac = Self::mac(secret, &payload)
            .ok_or_else(|| ApplicationError::infrastructure("unusable share link secret"))?;
        let signature = hex::encode(mac.finalize().into_bytes());
        Ok(format!("{}.{signature}", URL_SAFE.encode(payload.as_bytes())))
    }

    fn verify(&self, secret: &str, token: &str, now: DateTime<Utc>) -> Option<SharedFile> {
        let (encoded, signature) = token.trim().split_once('.')?;
        let raw = URL_SAFE
            .decode(encoded)
            .or_else(|_| URL_SAFE_NO_PAD.decode(encoded))
            .ok()?;
        let payload = String::from_utf8(raw).ok()?;

        let signature = hex::decode(signature).ok()?;
        Self::mac(secret, &payload)?.verify_slice(&signature).ok()?;

        let (file_path, expiry) = payload.rsplit_once('|')?;
        let expires_at = DateTime::from_timestamp(expiry.parse().ok()?, 0)?;
        if now > expires_at {
            return None;
        }
        Some(SharedFile {
            file_path: file_path.to_string(),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const SECRET: &str = "default-secret";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
    }

    #[test]
    fn signed_token_verifies_until_expiry() {
        let signer = HmacShareLinkSigner;
        let expires = now() + Duration::hours(48);
        let token = signer.sign(SECRET, "photos/stage.jpg", expires).unwrap();

        let shared = signer.verify(SECRET, &token, now()).unwrap();
        assert_eq!(shared.file_path, "photos/stage.jpg");
        assert_eq!(shared.expires_at, expires);
        assert!(signer.verify(SECRET, &token, expires).is_some());
        assert!(signer.verify(SECRET, &token, expires + Duration::seconds(1)).is_none());
    }

    #[test]
    fn wrong_secret_or_tampered_payload_is_rejected() {
        let signer = HmacShareLinkSigner;
        let token = signer
            .sign(SECRET, "photos/a.jpg", now() + Duration::hours(1))
            .unwrap();
        assert!(signer.verify("other", &token, now()).is_none());

        let (_, signature) = token.split_once('.').unwrap();
        let forged_payload = URL_SAFE.encode(format!("videos/b.mp4|{}", now().timestamp() + 3600));
        let forged = format!("{forged_payload}.{signature}");
        assert!(signer.verify(SECRET, &forged, now()).is_none());
    }

    #[test]
    fn token_format_matches_payload_and_hex_mac() {
        let expires = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let token = HmacShareLinkSigner
            .sign(SECRET, "photos/a.jpg", expires)
            .unwrap();
        let (encoded, signature) = token.split_once('.').unwrap();
        assert_eq!(
            URL_SAFE.decode(encoded).unwrap(),
            b"photos/a.jpg|1700000000".to_vec()
        );
        assert_eq!(signature.len(), 64);
        assert!(HmacShareLinkSigner.verify(SECRET, "garbage", expires).is_none());
    }
}
