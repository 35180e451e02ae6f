pub mod api;
pub mod master_card;
pub mod rating;
pub mod ui;
