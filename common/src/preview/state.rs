use crate::model::template::{Section, Template};
use crate::preview::message::PreviewMessage;

/// What a preview route renders: the current template snapshot and the order
/// its sections appear in.
///
/// Both fields are replaced whole when new values arrive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    pub template: Option<Template>,
    pub section_order: Vec<String>,
}

impl PreviewState {
    /// Installs the server-fetched snapshot the route mounted with.
    pub fn load_snapshot(&mut self, template: Template) {
        self.section_order = template.default_order();
        self.template = Some(template);
    }

    /// Applies whichever of `payload` and `sectionOrder` the message carries.
    /// Returns whether anything was replaced.
    pub fn apply(&mut self, message: PreviewMessage) -> bool {
        let changed = message.carries_update();
        if let Some(payload) = message.payload {
            self.template = Some(payload);
        }
        if let Some(order) = message.section_order {
            self.section_order = order;
        }
        changed
    }

    /// Sections in rendering order. Ids in `section_order` with no matching
    /// section are skipped; an empty order renders the template's own order.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let Some(template) = &self.template else {
            return Vec::new();
        };
        if self.section_order.is_empty() {
            return template
                .default_order()
                .iter()
                .filter_map(|id| template.section(id))
                .collect();
        }
        self.section_order
            .iter()
            .filter_map(|id| template.section(id))
            .collect()
    }
}
