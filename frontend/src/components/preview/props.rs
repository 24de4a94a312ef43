use common::model::page::Page;
use yew::prelude::*;

/// Which vendor page the preview route renders.
///
/// Both values also scope the bridge: messages for another vendor, or for
/// another concrete page, are ignored.
#[derive(Properties, PartialEq, Clone)]
pub struct TemplatePreviewProps {
    pub vendor_id: String,
    #[prop_or(Page::Home)]
    pub page: Page,
}
