//! Update function for the preview route.
//!
//! Snapshot results set the load status; inbound messages go through the
//! bridge. Rejected messages only ever reach the console at debug level.

use yew::prelude::*;

use crate::toast::show_toast;

use super::helpers::js_to_json;
use super::messages::Msg;
use super::state::{LoadStatus, TemplatePreviewComponent};

pub fn update(
    component: &mut TemplatePreviewComponent,
    _ctx: &Context<TemplatePreviewComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SnapshotLoaded(template) => {
            let scope = component.bridge.scope();
            if template.vendor_id != scope.vendor_id || template.page != scope.page {
                // Response to a fetch issued before the props changed.
                return false;
            }
            component.bridge.load_snapshot(template);
            component.status = LoadStatus::Ready;
            true
        }
        Msg::SnapshotFailed(err) => {
            gloo_console::error!(format!("preview snapshot failed: {err}"));
            show_toast("Could not load the template snapshot.");
            component.status = LoadStatus::Failed(err);
            true
        }
        Msg::Inbound { origin, data } => {
            match component.bridge.handle_with(&origin, || js_to_json(&data)) {
                Ok(changed) => changed,
                Err(rejection) => {
                    gloo_console::debug!(format!("preview message ignored: {rejection}"));
                    false
                }
            }
        }
    }
}
