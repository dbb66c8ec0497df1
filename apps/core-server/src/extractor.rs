use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::dto::error::ErrorResponseRestDTO;

/// Body given either as JSON or as `application/x-www-form-urlencoded`.
///
/// A missing or blank body reads as an empty object, so absent fields are
/// reported by field validation.
pub struct JsonOrForm<T>(pub T);

const EMPTY_OBJECT: &[u8] = b"{}";

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ErrorResponseRestDTO;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let bytes = Bytes::from_request(request, state).await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            let Json(value) = Json::<T>::from_bytes(EMPTY_OBJECT)?;
            return Ok(Self(value));
        }

        if is_form {
            let value = serde_urlencoded::from_bytes::<T>(&bytes)
                .map_err(|error| ErrorResponseRestDTO::input_validation(&error))?;
            Ok(Self(value))
        } else {
            // content type is not enforced, clients posting JSON without it are accepted
            let Json(value) = Json::<T>::from_bytes(&bytes)?;
            Ok(Self(value))
        }
    }
}

impl<T: DeserializeOwned> JsonOrForm<T> {
    /// Reads the body after other checks of the handler have passed
    pub async fn parse(request: Request) -> Result<T, ErrorResponseRestDTO> {
        let JsonOrForm(value) = Self::from_request(request, &()).await?;
        Ok(value)
    }
}
