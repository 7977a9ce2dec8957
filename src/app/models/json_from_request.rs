use axum::{
    async_trait,
    extract::FromRequest,
    http::{Request, StatusCode},
    Json,
};
use axum_macros::FromRequest;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::api_error::ApiError;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

/// Json body that has already passed its `validator` rules.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    B: Send + 'static,
    JsonFromRequest<T>: FromRequest<S, B, Rejection = ApiError>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let JsonFromRequest(dto) = JsonFromRequest::<T>::from_request(req, state).await?;

        match dto.validate() {
            Ok(_) => Ok(Self(dto)),
            Err(e) => Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            }),
        }
    }
}
