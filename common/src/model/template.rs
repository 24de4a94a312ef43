//! Template snapshot: the structured description of one vendor storefront page.

use serde::{Deserialize, Serialize};

use crate::model::image::Image;
use crate::model::page::Page;

/// A full snapshot of a vendor's storefront page content.
///
/// This is the unit the REST backend serves and the editor window posts as a
/// preview `payload`. It is always replaced whole, never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub vendor_id: String,
    pub page: Page,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Declared rendering order. Empty means "as listed in `sections`".
    #[serde(default)]
    pub section_order: Vec<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

/// One content block of a template. `body` is markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_id: Option<String>,
}

impl Template {
    pub fn empty(vendor_id: &str, page: Page) -> Self {
        Self {
            vendor_id: vendor_id.to_string(),
            page,
            title: String::new(),
            sections: Vec::new(),
            section_order: Vec::new(),
            images: None,
        }
    }

    /// The order sections render in when no explicit order has been received.
    pub fn default_order(&self) -> Vec<String> {
        if self.section_order.is_empty() {
            self.sections.iter().map(|s| s.id.clone()).collect()
        } else {
            self.section_order.clone()
        }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn image(&self, id: &str) -> Option<&Image> {
        self.images.as_ref()?.iter().find(|img| img.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> Section {
        Section {
            id: id.to_string(),
            heading: String::new(),
            body: String::new(),
            image_id: None,
        }
    }

    #[test]
    fn default_order_falls_back_to_declaration_order() {
        let mut template = Template::empty("v1", Page::Home);
        template.sections = vec![section("hero"), section("products")];
        assert_eq!(template.default_order(), vec!["hero", "products"]);

        template.section_order = vec!["products".into(), "hero".into()];
        assert_eq!(template.default_order(), vec!["products", "hero"]);
    }

    #[test]
    fn decodes_camel_case_with_missing_optionals() {
        let template: Template =
            serde_json::from_str(r#"{"vendorId":"v9","page":"about"}"#).unwrap();
        assert_eq!(template, Template::empty("v9", Page::About));
    }
}
