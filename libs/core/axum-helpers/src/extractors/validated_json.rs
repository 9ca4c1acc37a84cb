//! JSON extractor with validation via the `validator` crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as JSON, then runs `Validate`.
///
/// Every failure (missing content type, syntax error, wrong field types,
/// validation) becomes a 400 with the JSON error envelope.
///
/// ```ignore
/// async fn create_user(ValidatedJson(input): ValidatedJson<CreateUser>) -> impl IntoResponse {
///     // `input` has passed all #[validate] rules
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Signup {
        #[validate(length(min = 1))]
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(body): ValidatedJson<Signup>| async move { body.name }),
        )
    }

    async fn post_json(body: &'static str) -> StatusCode {
        app()
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn valid_body_passes() {
        assert_eq!(post_json(r#"{"name":"Alice"}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn every_rejection_is_a_bad_request() {
        assert_eq!(post_json(r#"{"name":""}"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(post_json(r#"{"name":"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(post_json(r#"{"name":5}"#).await, StatusCode::BAD_REQUEST);
    }
}
