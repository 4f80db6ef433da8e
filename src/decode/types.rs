//! Decoder types

use super::decoders::decode_value;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Maps one raw item to a typed record, failing on shape mismatch
pub type Decoder<T> = Arc<dyn Fn(Value) -> Result<T> + Send + Sync>;

/// Decoder backed by the record's `Deserialize` impl
pub fn serde_decoder<T>() -> Decoder<T>
where
    T: DeserializeOwned + 'static,
{
    Arc::new(|value: Value| decode_value::<T>(value))
}
