//! The concrete collections of the console, each plugged into `ResourceList`.

use std::future::Future;

use common::error::ApiError;
use common::filters::{FilterField, FilterOption, ListQuery};
use common::format::format_currency;
use common::model::audit_log::AuditLog;
use common::model::campaign::{Campaign, CampaignStatus};
use common::model::outreach::{Contact, OutreachCampaign, Segment};
use common::model::transaction::{Donation, DonationSummary, Withdrawal, WithdrawalStatus};
use common::model::user::{User, UserStatus};
use common::requests::RejectWithdrawalRequest;
use common::table::Page;
use yew::prelude::*;

use crate::api::{audit, campaigns, categories, outreach, transactions, users};
use crate::components::data_table::Column;
use crate::components::stat_card::StatCard;

use super::resource_list::{ListContext, Resource, ResourceList, RowAction};

pub type CampaignsPage = ResourceList<Campaigns>;
pub type SegmentsPage = ResourceList<Segments>;
pub type ContactsPage = ResourceList<Contacts>;
pub type OutreachCampaignsPage = ResourceList<OutreachCampaigns>;
pub type DonationsPage = ResourceList<Donations>;
pub type WithdrawalsPage = ResourceList<Withdrawals>;
pub type UsersPage = ResourceList<Users>;
pub type AuditLogsPage = ResourceList<AuditLogs>;

/// Action ids shared between `row_actions` and `perform`.
pub mod ids {
    pub const EDIT: &str = "edit";
    pub const APPROVE: &str = "approve";
    pub const REJECT: &str = "reject";
    pub const SUSPEND: &str = "suspend";
    pub const ACTIVATE: &str = "activate";
    pub const DELETE: &str = "delete";
    pub const CONTACTS: &str = "contacts";
    pub const STATS: &str = "stats";
}

fn unsupported(action: &str) -> ApiError {
    ApiError::Config(format!("Unsupported action \"{action}\""))
}

fn status_options(values: &[&str]) -> Vec<FilterOption> {
    values
        .iter()
        .map(|value| {
            let mut label = value.to_string();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            FilterOption::new(value, &label)
        })
        .collect()
}

pub struct Campaigns;

impl Resource for Campaigns {
    type Row = Campaign;

    const TITLE: &'static str = "Campaigns";
    const EMPTY_MESSAGE: &'static str = "No campaigns match your search.";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "organizer", "category"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Title"),
            Column::new("organizer", "Organizer"),
            Column::new("category", "Category"),
            Column::badge("status", "Status"),
            Column::new("goal", "Goal"),
            Column::new("raised", "Raised"),
            Column::new("progress", "Progress"),
            Column::new("endDate", "Ends"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Campaign>, ApiError>> + 'static {
        campaigns::list(query)
    }

    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async {
            let statuses = status_options(&["draft", "pending", "active", "rejected", "suspended", "completed"]);
            let mut fields = vec![FilterField::select("status", "Status", statuses)];
            match categories::list().await {
                Ok(list) => {
                    let options = list
                        .iter()
                        .map(|category| FilterOption::new(category.filter_value(), &category.name))
                        .collect();
                    fields.push(FilterField::select("category", "Category", options));
                }
                // The status filter still works without categories.
                Err(err) => log::warn!("Category filter unavailable: {err}"),
            }
            fields
        }
    }

    fn row_actions(context: &ListContext, row: &Campaign) -> Vec<RowAction> {
        let mut actions = vec![RowAction::new(ids::EDIT, "Edit", "edit").navigation()];
        if context.admin {
            match row.status {
                CampaignStatus::Pending | CampaignStatus::Draft => {
                    actions.push(RowAction::new(ids::APPROVE, "Approve", "check_circle"));
                    actions.push(RowAction::new(ids::REJECT, "Reject", "cancel").with_reason());
                }
                CampaignStatus::Active => actions.push(
                    RowAction::new(ids::SUSPEND, "Suspend", "pause_circle")
                        .confirm("Suspend this campaign? Donations will be paused."),
                ),
                CampaignStatus::Suspended => {
                    actions.push(RowAction::new(ids::ACTIVATE, "Reactivate", "play_circle"))
                }
                _ => {}
            }
        }
        actions.push(
            RowAction::new(ids::DELETE, "Delete", "delete")
                .confirm("Delete this campaign? This cannot be undone."),
        );
        actions
    }

    fn perform(
        action: &'static str,
        row: Campaign,
        reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            let status = match action {
                ids::APPROVE | ids::ACTIVATE => CampaignStatus::Active,
                ids::REJECT => CampaignStatus::Rejected,
                ids::SUSPEND => CampaignStatus::Suspended,
                ids::DELETE => {
                    campaigns::delete(row.id).await?;
                    return Ok(format!("Deleted \"{}\"", row.title));
                }
                other => return Err(unsupported(other)),
            };
            campaigns::update_status(row.id, status, reason).await?;
            Ok(format!("\"{}\" is now {}", row.title, status))
        }
    }
}

pub struct Segments;

impl Resource for Segments {
    type Row = Segment;

    const TITLE: &'static str = "Segments";
    const EMPTY_MESSAGE: &'static str = "No segments yet. Create one to start collecting contacts.";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name"),
            Column::plain("description", "Description"),
            Column::new("contacts", "Contacts"),
            Column::new("createdAt", "Created"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Segment>, ApiError>> + 'static {
        outreach::list_segments(query)
    }

    fn row_actions(_context: &ListContext, _row: &Segment) -> Vec<RowAction> {
        vec![
            RowAction::new(ids::CONTACTS, "Contacts", "group").navigation(),
            RowAction::new(ids::DELETE, "Delete", "delete")
                .confirm("Delete this segment and all of its contacts?"),
        ]
    }

    fn perform(
        action: &'static str,
        row: Segment,
        _reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            match action {
                ids::DELETE => {
                    outreach::delete_segment(row.id).await?;
                    Ok(format!("Deleted segment \"{}\"", row.name))
                }
                other => Err(unsupported(other)),
            }
        }
    }
}

/// Contacts of the segment given as the list scope.
pub struct Contacts;

impl Resource for Contacts {
    type Row = Contact;

    const TITLE: &'static str = "Contacts";
    const EMPTY_MESSAGE: &'static str = "This segment has no contacts.";
    const SEARCH_FIELDS: &'static [&'static str] = &["email", "name"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("email", "Email"),
            Column::new("name", "Name"),
            Column::badge("subscribed", "Subscription"),
            Column::new("createdAt", "Added"),
        ]
    }

    fn fetch(
        context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Contact>, ApiError>> + 'static {
        async move {
            match context.scope {
                Some(segment_id) => outreach::list_contacts(segment_id, query).await,
                None => Ok(Page::default()),
            }
        }
    }

    fn row_actions(_context: &ListContext, _row: &Contact) -> Vec<RowAction> {
        vec![RowAction::new(ids::DELETE, "Remove", "person_remove").confirm("Remove this contact?")]
    }

    fn perform(
        action: &'static str,
        row: Contact,
        _reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            match action {
                ids::DELETE => {
                    outreach::delete_contact(row.id).await?;
                    Ok(format!("Removed {}", row.email))
                }
                other => Err(unsupported(other)),
            }
        }
    }
}

pub struct OutreachCampaigns;

impl Resource for OutreachCampaigns {
    type Row = OutreachCampaign;

    const TITLE: &'static str = "Email campaigns";
    const EMPTY_MESSAGE: &'static str = "No emails have been sent yet.";
    const SEARCH_FIELDS: &'static [&'static str] = &["subject", "segment"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("subject", "Subject"),
            Column::new("segment", "Segment"),
            Column::badge("status", "Status"),
            Column::new("sent", "Sent"),
            Column::new("opened", "Opened"),
            Column::new("clicked", "Clicked"),
            Column::new("donations", "Donations"),
            Column::new("raised", "Raised"),
            Column::new("sentAt", "Sent at"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<OutreachCampaign>, ApiError>> + 'static {
        outreach::list_campaigns(query)
    }

    fn row_actions(_context: &ListContext, _row: &OutreachCampaign) -> Vec<RowAction> {
        vec![RowAction::new(ids::STATS, "Refresh stats", "insights")]
    }

    fn perform(
        action: &'static str,
        row: OutreachCampaign,
        _reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            match action {
                ids::STATS => {
                    let stats = outreach::campaign_stats(row.id).await?;
                    Ok(format!(
                        "\"{}\": {:.1}% opened, {:.1}% clicked, {} donations",
                        row.subject,
                        stats.open_rate(),
                        stats.click_rate(),
                        stats.donations
                    ))
                }
                other => Err(unsupported(other)),
            }
        }
    }
}

pub struct Donations;

impl Resource for Donations {
    type Row = Donation;

    const TITLE: &'static str = "Donations";
    const EMPTY_MESSAGE: &'static str = "No donations found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["donor", "email", "campaign", "reference"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("donor", "Donor"),
            Column::new("email", "Email"),
            Column::new("campaign", "Campaign"),
            Column::new("amount", "Amount"),
            Column::badge("status", "Status"),
            Column::new("method", "Method"),
            Column::plain("reference", "Reference"),
            Column::new("createdAt", "Date"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Donation>, ApiError>> + 'static {
        transactions::list_donations(query)
    }

    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async {
            vec![
                FilterField::select("status", "Status", status_options(&["successful", "pending", "failed", "refunded"])),
                FilterField::text("campaign", "Campaign"),
            ]
        }
    }

    fn summary(rows: &[Donation]) -> Html {
        let summary = DonationSummary::from_donations(rows);
        let currency = rows.first().map(|d| d.currency.as_str()).unwrap_or("USD");
        html! {
            <div class="stat-cards">
                <StatCard label="Donations" value={summary.count.to_string()} icon={"receipt_long".to_string()} />
                <StatCard label="Successful" value={summary.successful.to_string()} icon={"verified".to_string()} />
                <StatCard
                    label="Raised"
                    value={format_currency(summary.total_raised, currency)}
                    icon={"payments".to_string()}
                    hint={"This page only".to_string()}
                />
                <StatCard label="Average gift" value={format_currency(summary.average, currency)} icon={"functions".to_string()} />
            </div>
        }
    }
}

pub struct Withdrawals;

impl Resource for Withdrawals {
    type Row = Withdrawal;

    const TITLE: &'static str = "Withdrawals";
    const EMPTY_MESSAGE: &'static str = "No withdrawal requests.";
    const SEARCH_FIELDS: &'static [&'static str] = &["organizer", "campaign"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("organizer", "Organizer"),
            Column::new("campaign", "Campaign"),
            Column::new("amount", "Amount"),
            Column::badge("status", "Status"),
            Column::plain("destination", "Destination"),
            Column::new("requestedAt", "Requested"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Withdrawal>, ApiError>> + 'static {
        transactions::list_withdrawals(query)
    }

    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async {
            let statuses: Vec<&str> = [
                WithdrawalStatus::Pending,
                WithdrawalStatus::Approved,
                WithdrawalStatus::Rejected,
                WithdrawalStatus::Paid,
            ]
            .iter()
            .map(WithdrawalStatus::as_str)
            .collect();
            vec![FilterField::select("status", "Status", status_options(&statuses))]
        }
    }

    fn row_actions(context: &ListContext, row: &Withdrawal) -> Vec<RowAction> {
        if !context.admin || !row.is_reviewable() {
            return Vec::new();
        }
        vec![
            RowAction::new(ids::APPROVE, "Approve", "check_circle")
                .confirm("Approve this withdrawal and release the funds?"),
            RowAction::new(ids::REJECT, "Reject", "cancel").with_reason(),
        ]
    }

    fn perform(
        action: &'static str,
        row: Withdrawal,
        reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            let amount = format_currency(row.amount, &row.currency);
            match action {
                ids::APPROVE => {
                    transactions::approve_withdrawal(row.id).await?;
                    Ok(format!("Approved {amount} for {}", row.organizer_name))
                }
                ids::REJECT => {
                    let request = RejectWithdrawalRequest {
                        reason: reason.unwrap_or_default(),
                    };
                    transactions::reject_withdrawal(row.id, request).await?;
                    Ok(format!("Rejected {amount} for {}", row.organizer_name))
                }
                other => Err(unsupported(other)),
            }
        }
    }
}

pub struct Users;

impl Resource for Users {
    type Row = User;

    const TITLE: &'static str = "Users";
    const EMPTY_MESSAGE: &'static str = "No users found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name"),
            Column::new("email", "Email"),
            Column::badge("role", "Role"),
            Column::badge("status", "Status"),
            Column::new("campaigns", "Campaigns"),
            Column::new("createdAt", "Joined"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<User>, ApiError>> + 'static {
        users::list(query)
    }

    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async {
            vec![
                FilterField::select("role", "Role", status_options(&["admin", "organizer", "donor"])),
                FilterField::select("status", "Status", status_options(&["active", "suspended", "banned"])),
            ]
        }
    }

    fn row_actions(context: &ListContext, row: &User) -> Vec<RowAction> {
        if !context.admin || row.is_admin() {
            return Vec::new();
        }
        match row.status {
            UserStatus::Active => vec![RowAction::new(ids::SUSPEND, "Suspend", "block")
                .confirm("Suspend this user? They will be signed out.")],
            _ => vec![RowAction::new(ids::ACTIVATE, "Reactivate", "how_to_reg")],
        }
    }

    fn perform(
        action: &'static str,
        row: User,
        _reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async move {
            let status = match action {
                ids::SUSPEND => UserStatus::Suspended,
                ids::ACTIVATE => UserStatus::Active,
                other => return Err(unsupported(other)),
            };
            users::update_status(row.id, status).await?;
            Ok(format!("{} is now {}", row.email, status.as_str()))
        }
    }
}

pub struct AuditLogs;

impl Resource for AuditLogs {
    type Row = AuditLog;

    const TITLE: &'static str = "Audit log";
    const EMPTY_MESSAGE: &'static str = "No audit entries match.";
    const SEARCH_FIELDS: &'static [&'static str] = &["action", "actor", "resource"];

    fn columns() -> Vec<Column> {
        vec![
            Column::new("createdAt", "When"),
            Column::new("actor", "Actor"),
            Column::badge("action", "Action"),
            Column::new("resource", "Resource"),
            Column::plain("ip", "IP"),
            Column::plain("details", "Details"),
        ]
    }

    fn fetch(
        _context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<AuditLog>, ApiError>> + 'static {
        audit::list_logs(query)
    }

    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async {
            vec![
                FilterField::text("action", "Action"),
                FilterField::text("resourceType", "Resource type"),
                FilterField::text("actor", "Actor email"),
            ]
        }
    }
}
