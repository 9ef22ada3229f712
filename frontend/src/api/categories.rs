use common::error::ApiError;
use common::model::category::Category;

use super::client;

pub async fn list() -> Result<Vec<Category>, ApiError> {
    client::get_all("/categories").await
}
