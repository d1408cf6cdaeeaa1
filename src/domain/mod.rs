//! Domain types for Shamir Secret Sharing
//!
//! Validated newtypes and configuration:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareIndex`] - Share x-coordinate (1..=254)
//! - [`ShareCount`] - Total number of shares to create (1..=254)
//! - [`SplitConfig`] - Validated threshold and share count pair

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
