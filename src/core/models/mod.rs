pub mod bidder;
pub mod cache;
