//! One module per backend resource. Functions take owned arguments so their
//! futures can be handed straight to `spawn_local`.

pub mod audit;
pub mod campaigns;
pub mod categories;
pub mod client;
pub mod config;
pub mod outreach;
pub mod transactions;
pub mod users;
