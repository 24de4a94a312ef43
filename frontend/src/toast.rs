use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::TOAST_MILLIS;

/// Shows `message` as a status notice that removes itself after
/// `TOAST_MILLIS`. The text is never parsed as HTML; styling lives in the
/// `.toast` rule of `index.html`.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_class_name("toast");
    toast.set_attribute("role", "status").ok();
    toast.set_attribute("aria-live", "polite").ok();
    toast.set_text_content(Some(message));

    if body.append_child(&toast).is_ok() {
        dismiss_later(toast);
    }
}

fn dismiss_later(toast: Element) {
    Timeout::new(TOAST_MILLIS, move || toast.remove()).forget();
}
