//! Browser plumbing for the preview route: the `message` subscription, the
//! snapshot fetch, and markdown rendering of section bodies.

use common::model::auth::PreviewAuth;
use common::model::page::Page;
use common::model::template::Template;
use common::requests::template_snapshot_path;
use common::storage::{preview_auth_key, KeyValueStore};
use gloo_events::EventListener;
use gloo_net::http::Request;
use pulldown_cmark::{html, CowStr, Event, Parser, Tag};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MessageEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::config::API_BASE;
use crate::storage::BrowserStore;

use super::messages::Msg;
use super::state::TemplatePreviewComponent;

/// Origin of the hosting document, `None` outside a browsing context.
pub fn document_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

/// Subscribes to every `message` posted to this window.
///
/// Returns `None` when the document origin is unknown: without it no message
/// could pass the origin check, so there is nothing to listen for.
pub fn subscribe(ctx: &Context<TemplatePreviewComponent>) -> Option<EventListener> {
    document_origin()?;
    let window = web_sys::window()?;
    let link = ctx.link().clone();
    Some(EventListener::new(&window, "message", move |event| {
        let Some(event) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        link.send_message(Msg::Inbound {
            origin: event.origin(),
            data: event.data(),
        });
    }))
}

/// Converts posted structured-clone data to JSON. Non-serializable data
/// (functions, cyclic objects) yields `None`.
pub fn js_to_json(data: &JsValue) -> Option<Value> {
    let text = js_sys::JSON::stringify(data).ok()?.as_string()?;
    serde_json::from_str(&text).ok()
}

/// Fetches the mount-time snapshot and reports back through the link.
pub fn load_snapshot(ctx: &Context<TemplatePreviewComponent>) {
    let link = ctx.link().clone();
    let vendor_id = ctx.props().vendor_id.clone();
    let page = ctx.props().page;
    spawn_local(async move {
        match fetch_snapshot(&vendor_id, page).await {
            Ok(template) => link.send_message(Msg::SnapshotLoaded(template)),
            Err(err) => link.send_message(Msg::SnapshotFailed(err)),
        }
    });
}

async fn fetch_snapshot(vendor_id: &str, page: Page) -> Result<Template, String> {
    let url = format!("{}{}", API_BASE, template_snapshot_path(vendor_id, page));
    let mut request = Request::get(&url);
    if let Some(auth) = stored_preview_auth(vendor_id) {
        request = request.header("Authorization", &auth.bearer());
    }

    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        ));
    }
    response.json::<Template>().await.map_err(|e| e.to_string())
}

fn stored_preview_auth(vendor_id: &str) -> Option<PreviewAuth> {
    let raw = BrowserStore.get_or_absent(&preview_auth_key(vendor_id));
    PreviewAuth::from_stored(raw.as_deref())
        .filter(|auth| auth.is_valid_at(js_sys::Date::now() as i64))
}

/// Renders a section body from markdown.
///
/// Bodies are vendor-authored and the preview runs inside the admin origin:
/// raw HTML is emitted as text, and link or image destinations with a scheme
/// other than http, https or mailto are replaced by `#`.
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new(body).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Keeps relative destinations and allowed schemes, anything else becomes `#`.
///
/// Browsers drop ASCII whitespace and control characters inside a scheme
/// (`java\tscript:`), so those are removed before the scheme is read.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = dest
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    let scheme_end = normalized.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if normalized[end..].starts_with(':') => {
            let scheme = normalized[..end].to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                dest
            } else {
                CowStr::Borrowed("#")
            }
        }
        _ => dest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_links_are_neutralized() {
        let output = render_markdown(
            "[Shop now](javascript:alert(localStorage.getItem('auth_user')))",
        );
        assert_eq!(output, "<p><a href=\"#\">Shop now</a></p>\n");
    }

    #[test]
    fn other_schemes_are_replaced_in_links_and_images() {
        for body in [
            "[x](JavaScript:alert(1))",
            "[x](vbscript:msgbox)",
            "![x](data:text/html;base64,PHNjcmlwdD4=)",
            "<javascript:alert(1)>",
        ] {
            let output = render_markdown(body);
            assert!(
                output.contains("href=\"#\"") || output.contains("src=\"#\""),
                "{output}"
            );
        }
    }

    #[test]
    fn whitespace_inside_a_scheme_does_not_hide_it() {
        assert_eq!(&*safe_destination(CowStr::Borrowed("java\tscript:alert(1)")), "#");
        assert_eq!(&*safe_destination(CowStr::Borrowed(" \njavascript:x")), "#");
        assert_eq!(
            &*safe_destination(CowStr::Borrowed("HTTPS://a.test")),
            "HTTPS://a.test"
        );
    }

    #[test]
    fn web_mail_and_relative_destinations_are_kept() {
        assert!(render_markdown("[a](https://shop.example.com/sale)")
            .contains("href=\"https://shop.example.com/sale\""));
        assert!(render_markdown("[a](mailto:hello@example.com)")
            .contains("href=\"mailto:hello@example.com\""));
        assert!(render_markdown("[a](/products?id=1)").contains("href=\"/products?id=1\""));
        assert!(render_markdown("![a](img/logo.png)").contains("src=\"img/logo.png\""));
    }

    #[test]
    fn raw_html_is_escaped() {
        let output = render_markdown("<img src=x onerror=alert(1)>");
        assert!(!output.contains("<img"), "{output}");
    }
}
