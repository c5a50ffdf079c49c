use serde::{Deserialize, Deserializer, Serialize};

/// Uniform JSON wrapper returned by every backend call, success or error.
///
/// `success` is informational only. The gateway decides success from the
/// transport status and hands this envelope back untouched on any 2xx, even
/// when `success` is `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub data: Option<T>,
}

// Explicit nulls read the same as a missing field
fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn data_ref(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
