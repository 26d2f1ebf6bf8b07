pub mod api_errors;
pub mod orders;
pub mod webhook;
