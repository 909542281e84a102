//! Palletscan
//!
//! Pricing engine for pallet scanning add-ons sold alongside freight quotes. Given a shipment's
//! pallet count, mode, industry and requirement flags it prices every eligible service tier with
//! its volume discount, recommends a tier, matches tiers to industries and projects the return on
//! investment of a subscription.

pub mod boundary;
pub mod catalog;
pub mod discounts;
pub mod fixtures;
pub mod industries;
pub mod prelude;
pub mod quotes;
pub mod recommendation;
pub mod report;
pub mod requests;
pub mod roi;
pub mod services;
pub mod tiers;
