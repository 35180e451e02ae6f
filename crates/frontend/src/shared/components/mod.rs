pub mod datetime_input;

pub use datetime_input::DateTimeInput;
