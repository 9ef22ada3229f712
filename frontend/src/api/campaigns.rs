use common::error::ApiError;
use common::filters::ListQuery;
use common::model::campaign::{Campaign, CampaignStatus};
use common::requests::{CreateCampaignRequest, UpdateCampaignStatusRequest};
use common::table::Page;

use super::client;

const BASE: &str = "/campaigns";

pub async fn list(query: ListQuery) -> Result<Page<Campaign>, ApiError> {
    client::get_list(BASE, &query).await
}

/// Every campaign, for dropdowns. Fetches one large page.
pub async fn options() -> Result<Vec<Campaign>, ApiError> {
    let page = list(ListQuery::first_page(100)).await?;
    Ok(page.items)
}

pub async fn get(id: String) -> Result<Campaign, ApiError> {
    client::get(&format!("{BASE}/{id}")).await
}

pub async fn create(request: CreateCampaignRequest) -> Result<Campaign, ApiError> {
    client::post(BASE, &request).await
}

pub async fn update(id: String, request: CreateCampaignRequest) -> Result<Campaign, ApiError> {
    client::put(&format!("{BASE}/{id}"), &request).await
}

pub async fn update_status(
    id: String,
    status: CampaignStatus,
    reason: Option<String>,
) -> Result<(), ApiError> {
    client::put_unit(
        &format!("{BASE}/{id}/status"),
        &UpdateCampaignStatusRequest { status, reason },
    )
    .await
}

pub async fn delete(id: String) -> Result<(), ApiError> {
    client::delete(&format!("{BASE}/{id}")).await
}
