//! Outreach endpoints: segments (contact lists), their contacts, email
//! batches sent to a segment, and one-off invitations.

use common::error::ApiError;
use common::filters::ListQuery;
use common::model::outreach::{Contact, OutreachCampaign, OutreachStats, Segment};
use common::requests::{
    AddContactsRequest, CreateSegmentRequest, InvitationRequest, NewContact, SendOutreachRequest,
};
use common::table::Page;

use super::client;

const BASE: &str = "/outreach";

pub async fn list_segments(query: ListQuery) -> Result<Page<Segment>, ApiError> {
    client::get_list(&format!("{BASE}/segments"), &query).await
}

pub async fn segment_options() -> Result<Vec<Segment>, ApiError> {
    client::get_all(&format!("{BASE}/segments")).await
}

pub async fn create_segment(request: CreateSegmentRequest) -> Result<Segment, ApiError> {
    client::post(&format!("{BASE}/segments"), &request).await
}

pub async fn delete_segment(id: String) -> Result<(), ApiError> {
    client::delete(&format!("{BASE}/segments/{id}")).await
}

pub async fn list_contacts(segment_id: String, query: ListQuery) -> Result<Page<Contact>, ApiError> {
    client::get_list(&format!("{BASE}/segments/{segment_id}/contacts"), &query).await
}

pub async fn add_contacts(segment_id: String, contacts: Vec<NewContact>) -> Result<(), ApiError> {
    client::post_unit(
        &format!("{BASE}/segments/{segment_id}/contacts"),
        &AddContactsRequest { contacts },
    )
    .await
}

pub async fn delete_contact(id: String) -> Result<(), ApiError> {
    client::delete(&format!("{BASE}/contacts/{id}")).await
}

pub async fn list_campaigns(query: ListQuery) -> Result<Page<OutreachCampaign>, ApiError> {
    client::get_list(&format!("{BASE}/campaigns"), &query).await
}

pub async fn send_campaign(request: SendOutreachRequest) -> Result<OutreachCampaign, ApiError> {
    client::post(&format!("{BASE}/campaigns"), &request).await
}

pub async fn campaign_stats(id: String) -> Result<OutreachStats, ApiError> {
    client::get(&format!("{BASE}/campaigns/{id}/stats")).await
}

pub async fn send_invitation(request: InvitationRequest) -> Result<(), ApiError> {
    client::post_unit(&format!("{BASE}/invitations"), &request).await
}
