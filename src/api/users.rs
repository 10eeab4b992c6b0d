use crate::api::AppState;
use crate::api::schemas::users::{CreateUser, MessageResponse, UserListResponse, UserResponse};
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::InvalidPayload);
    };

    let (Some(username), Some(email)) = (payload.username, payload.email) else {
        return Err(AppError::InvalidPayload);
    };

    let user = state.user_service.create_user(&username, &email).await?;

    let response = MessageResponse::success(format!("{} was added!", user.email));
    Ok((StatusCode::CREATED, Json(response)))
}

/// Ids that do not parse as integers are indistinguishable from missing users.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse> {
    let id: i64 = id.parse().map_err(|_| AppError::UserNotFound)?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_users().await?;

    Ok(Json(UserListResponse::from(users)))
}
