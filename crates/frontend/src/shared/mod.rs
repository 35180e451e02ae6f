pub mod components;
pub mod config;
pub mod date_utils;
