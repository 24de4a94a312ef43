use serde::{Deserialize, Serialize};

/// An image asset embedded in a template, referenced from sections by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub base64: String,
}

impl Image {
    /// Data URL usable directly as an `<img src>`.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }
}
