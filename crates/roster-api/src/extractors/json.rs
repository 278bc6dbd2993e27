//! JSON body extractor whose rejections use the API error format.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use roster_core::error::AppError;
use roster_core::types::FieldViolation;

use crate::error::ApiError;

/// Like [`axum::Json`], but a body that is not JSON of the expected shape
/// becomes a `VALIDATION_ERROR` instead of axum's plain-text rejection.
///
/// Employee drafts accept any JSON value per field, so only a body that is
/// not a JSON object ends up here; field types are checked by the draft.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn body_violation(rejection: &JsonRejection) -> FieldViolation {
    let code = match rejection {
        JsonRejection::MissingJsonContentType(_) => "content_type",
        JsonRejection::JsonSyntaxError(_) => "syntax",
        JsonRejection::JsonDataError(_) => "type",
        _ => "body",
    };
    FieldViolation::new("body", code, rejection.body_text())
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let violation = body_violation(&rejection);
                Err(AppError::invalid_fields(vec![violation]).into())
            }
        }
    }
}
