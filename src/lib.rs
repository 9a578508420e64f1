//! Bidder configuration subsystem for the exchange.
//!
//! Translates raw, operator-supplied bidder configuration into the
//! immutable [`BidderInfo`](core::models::bidder::BidderInfo) descriptors
//! that routing and auction layers read for the lifetime of the process,
//! and carries the cache-side [`BannerValue`](core::models::cache::BannerValue)
//! value object. No transport, routing or auction logic lives here.

pub mod app;
pub mod core;
