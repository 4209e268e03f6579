//! Core B2 value types.
//!
//! These types enforce invariants at construction time so that invalid
//! URLs or enum values never reach the wire.

mod api_url;
mod bucket_type;
mod file_action;

pub use api_url::{API_PREFIX, ApiUrl, decode_file_name, encode_file_name, encode_query_value};
pub use bucket_type::BucketType;
pub use file_action::FileAction;
