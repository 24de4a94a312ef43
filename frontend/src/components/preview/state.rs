use common::preview::{PreviewBridge, RouteScope};
use gloo_events::EventListener;

use super::helpers::document_origin;
use super::props::TemplatePreviewProps;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// State of one mounted preview route.
pub struct TemplatePreviewComponent {
    /// Filter scope plus the preview state this route exclusively owns.
    pub bridge: PreviewBridge,

    /// The `message` subscription. Dropping it removes the listener.
    pub listener: Option<EventListener>,

    pub status: LoadStatus,

    /// Guard to run first-render initialization once.
    pub loaded: bool,
}

impl TemplatePreviewComponent {
    pub fn new(props: &TemplatePreviewProps) -> Self {
        Self {
            bridge: PreviewBridge::new(scope_for(props)),
            listener: None,
            status: LoadStatus::Loading,
            loaded: false,
        }
    }

    /// Starts over for new props, as if the route had been mounted again.
    /// The listener survives since it only forwards events to this component.
    pub fn remount(&mut self, props: &TemplatePreviewProps) {
        self.bridge = PreviewBridge::new(scope_for(props));
        self.status = LoadStatus::Loading;
    }
}

fn scope_for(props: &TemplatePreviewProps) -> RouteScope {
    RouteScope {
        origin: document_origin().unwrap_or_default(),
        vendor_id: props.vendor_id.clone(),
        page: props.page,
    }
}
