pub mod bidder_info;
pub mod error;
pub mod models;
