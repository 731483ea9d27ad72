pub mod config;
pub mod date_utils;
pub mod dialog;
pub mod http;
pub mod icons;
