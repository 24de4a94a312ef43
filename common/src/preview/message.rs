use serde::{Deserialize, Serialize};

use crate::model::page::Page;
use crate::model::template::Template;

/// Discriminator the editor window puts in `type`.
pub const PREVIEW_MESSAGE_TYPE: &str = "TEMPLATE_PREVIEW_UPDATE";

/// A template edit posted from the editor window to a preview document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub vendor_id: String,
    /// `None` and `Some(Page::Full)` both address every page.
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub payload: Option<Template>,
    #[serde(default)]
    pub section_order: Option<Vec<String>>,
}

impl PreviewMessage {
    pub fn new(vendor_id: &str) -> Self {
        Self {
            kind: PREVIEW_MESSAGE_TYPE.to_string(),
            vendor_id: vendor_id.to_string(),
            page: None,
            payload: None,
            section_order: None,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_payload(mut self, payload: Template) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_section_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Whether applying this message could change anything at all.
    pub fn carries_update(&self) -> bool {
        self.payload.is_some() || self.section_order.is_some()
    }
}
