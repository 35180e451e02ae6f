pub mod booking;
pub mod reviews;
