pub mod error;
pub mod notification;
pub mod order;
pub mod outcome;
pub mod store;
