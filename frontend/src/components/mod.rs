pub mod badge;
pub mod banner;
pub mod confirm;
pub mod data_table;
pub mod filter_modal;
pub mod form_field;
pub mod stat_card;
pub mod toast;
pub mod top_sheet;
