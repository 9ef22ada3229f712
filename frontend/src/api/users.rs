use common::error::ApiError;
use common::filters::ListQuery;
use common::model::user::{Session, User, UserStatus};
use common::requests::{LoginRequest, UpdateUserStatusRequest};
use common::table::Page;

use super::client;

pub async fn login(request: LoginRequest) -> Result<Session, ApiError> {
    client::post("/users/login", &request).await
}

pub async fn me() -> Result<User, ApiError> {
    client::get("/users/me").await
}

pub async fn list(query: ListQuery) -> Result<Page<User>, ApiError> {
    client::get_list("/users/admin", &query).await
}

pub async fn update_status(id: String, status: UserStatus) -> Result<(), ApiError> {
    client::put_unit(
        &format!("/users/admin/{id}/status"),
        &UpdateUserStatusRequest { status },
    )
    .await
}
