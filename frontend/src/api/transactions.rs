//! Admin views over money movements: donations and withdrawal requests.

use common::error::ApiError;
use common::filters::ListQuery;
use common::model::transaction::{Donation, Withdrawal};
use common::requests::RejectWithdrawalRequest;
use common::table::Page;
use serde_json::json;

use super::client;

const BASE: &str = "/transactions/admin";

pub async fn list_donations(query: ListQuery) -> Result<Page<Donation>, ApiError> {
    client::get_list(BASE, &query).await
}

pub async fn list_withdrawals(query: ListQuery) -> Result<Page<Withdrawal>, ApiError> {
    client::get_list(&format!("{BASE}/withdrawals"), &query).await
}

pub async fn approve_withdrawal(id: String) -> Result<(), ApiError> {
    client::put_unit(&format!("{BASE}/withdrawals/{id}/approve"), &json!({})).await
}

pub async fn reject_withdrawal(id: String, request: RejectWithdrawalRequest) -> Result<(), ApiError> {
    client::put_unit(&format!("{BASE}/withdrawals/{id}/reject"), &request).await
}
