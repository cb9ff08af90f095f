//! The subnet arithmetic engine.
//!
//! - [`range`] - network and broadcast address of a block
//! - [`info`] - usable addresses and counts
//! - [`iterate`] - the next N contiguous subnets
//! - [`mask`] - dotted-decimal mask to prefix length

mod info;
mod iterate;
mod mask;
mod range;

// Re-export public functions
pub use info::{derive_info, snapshot};
pub use iterate::{iterate, iterate_checked, remaining_subnets, SubnetIter};
pub use mask::{mask_prefix_len, to_dotted_mask, to_prefix_length};
pub use range::{compute_range, range_for, AddressRange};
