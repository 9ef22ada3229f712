use common::error::ApiError;
use common::filters::ListQuery;
use common::model::audit_log::AuditLog;
use common::table::Page;

use super::client;

pub async fn list_logs(query: ListQuery) -> Result<Page<AuditLog>, ApiError> {
    client::get_list("/audit/logs", &query).await
}
