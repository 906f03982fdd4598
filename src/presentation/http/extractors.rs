// src/presentation/http/extractors.rs
use super::{error::HttpError, state::HttpState};
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

/// Caller verified with HTTP Basic credentials against the user store.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let credentials = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing or malformed Authorization header",
                ))
            })?;

        let user = app_state
            .services
            .authenticate_and_authorize(credentials.username(), credentials.password(), None)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(user))
    }
}
