use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// Form-encoded payload taken from the body, or from the query string when
/// the body is empty.
///
/// The content type is not enforced: form clients are inconsistent about
/// sending it on `DELETE`.
pub struct FormPayload<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for FormPayload<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().unwrap_or_default().to_owned();

        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read request body: {}", e))
        })?;

        let raw: &[u8] = if body.is_empty() {
            query.as_bytes()
        } else {
            &body
        };

        let value = serde_urlencoded::from_bytes(raw).map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Form parse error: {}", e))
        })?;

        Ok(FormPayload(value))
    }
}
