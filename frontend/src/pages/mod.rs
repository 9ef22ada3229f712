pub mod builder;
pub mod campaign_form;
pub mod contacts;
pub mod invitations;
pub mod login;
pub mod outreach;
pub mod resource_list;
pub mod resources;
pub mod segments;
