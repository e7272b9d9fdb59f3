use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::Error;

/// Request bodies that must arrive as a JSON object.
pub trait JsonPayload: DeserializeOwned {
    /// `error` field of the 400 body when the payload is rejected.
    const INVALID_MESSAGE: &'static str;
}

/// `axum::Json` that only accepts objects and reports rejections as a 400 JSON body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: JsonPayload,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<JsonValue>::from_request(req, state)
            .await
            .map_err(|rejection| invalid::<T>(rejection.body_text()))?;

        if !value.is_object() {
            return Err(invalid::<T>("Expected a JSON object".to_string()));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| invalid::<T>(e.to_string()))
    }
}

fn invalid<T: JsonPayload>(details: String) -> Error {
    Error::InvalidPayload {
        message: T::INVALID_MESSAGE.to_string(),
        details,
    }
}
