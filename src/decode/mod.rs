//! Response decoder module
//!
//! # Overview
//!
//! Turns raw JSON into typed records. Every decode failure is reported as
//! `Error::Decode` carrying the path of the offending field (for example
//! `results[3].release_date`), never silently defaulted.

mod decoders;
mod types;

pub use decoders::{
    decode_field, decode_list_field, decode_value, join_path, optional_date, with_path_prefix,
};
pub(crate) use decoders::kind_of;
pub use types::{serde_decoder, Decoder};
