use serde_json::Value;

use crate::error::Rejection;
use crate::model::template::Template;
use crate::preview::filter::{self, Inbound, RouteScope};
use crate::preview::state::PreviewState;

/// The preview route's side of the bridge: the scope it filters against and
/// the state it exclusively owns.
///
/// The frontend feeds every `message` event into `handle`; dropping the
/// listener on unmount is what ends the subscription.
#[derive(Debug, Clone)]
pub struct PreviewBridge {
    scope: RouteScope,
    state: PreviewState,
}

impl PreviewBridge {
    pub fn new(scope: RouteScope) -> Self {
        Self {
            scope,
            state: PreviewState::default(),
        }
    }

    pub fn scope(&self) -> &RouteScope {
        &self.scope
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn load_snapshot(&mut self, template: Template) {
        self.state.load_snapshot(template);
    }

    /// Filters one inbound message and applies it if accepted.
    ///
    /// `Ok(true)` means state changed. A rejection leaves state untouched.
    pub fn handle(&mut self, origin: &str, data: &Value) -> Result<bool, Rejection> {
        let message = filter::accept(&self.scope, &Inbound { origin, data })?;
        Ok(self.state.apply(message))
    }

    /// Like `handle`, but the body is only produced once the origin has been
    /// accepted, so messages from foreign origins are never decoded.
    pub fn handle_with<F>(&mut self, origin: &str, read: F) -> Result<bool, Rejection>
    where
        F: FnOnce() -> Option<Value>,
    {
        filter::check_origin(&self.scope, &Inbound { origin, data: &Value::Null })?;
        let data = read().ok_or_else(|| Rejection::Malformed("data is not JSON".to_string()))?;
        self.handle(origin, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::page::Page;
    use crate::preview::message::PreviewMessage;
    use std::cell::Cell;

    fn bridge() -> PreviewBridge {
        PreviewBridge::new(RouteScope {
            origin: "https://admin.example.com".into(),
            vendor_id: "v1".into(),
            page: Page::Contact,
        })
    }

    #[test]
    fn foreign_bodies_are_never_read() {
        let mut bridge = bridge();
        let read = Cell::new(false);
        let result = bridge.handle_with("https://evil.test", || {
            read.set(true);
            Some(Value::Null)
        });
        assert!(matches!(result, Err(Rejection::OriginMismatch { .. })));
        assert!(!read.get());
    }

    #[test]
    fn undecodable_bodies_are_malformed() {
        let mut bridge = bridge();
        let result = bridge.handle_with("https://admin.example.com", || None);
        assert!(matches!(result, Err(Rejection::Malformed(_))));
    }

    #[test]
    fn accepted_bodies_update_state() {
        let mut bridge = bridge();
        let message = PreviewMessage::new("v1").with_section_order(["a", "b"]);
        let result = bridge.handle_with("https://admin.example.com", || {
            serde_json::to_value(&message).ok()
        });
        assert_eq!(result, Ok(true));
        assert_eq!(bridge.state().section_order, vec!["a", "b"]);
    }
}
