//! Acceptance chain for inbound preview messages.
//!
//! Each guard is an independent predicate over the raw message body; `accept`
//! runs them in `GUARDS` order and only decodes the body once all pass. The
//! origin check comes first so that foreign messages are never read past
//! their origin.

use serde_json::Value;

use crate::error::Rejection;
use crate::model::page::Page;
use crate::preview::message::{PREVIEW_MESSAGE_TYPE, PreviewMessage};

/// What a preview route filters against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteScope {
    /// Origin of the hosting document, e.g. `https://admin.example.com`.
    pub origin: String,
    pub vendor_id: String,
    pub page: Page,
}

/// One `message` event: the sender origin and the posted data.
#[derive(Debug, Clone, Copy)]
pub struct Inbound<'a> {
    pub origin: &'a str,
    pub data: &'a Value,
}

pub type Guard = fn(&RouteScope, &Inbound<'_>) -> Result<(), Rejection>;

/// The chain, in evaluation order.
pub const GUARDS: [Guard; 4] = [check_origin, check_type, check_vendor, check_page];

/// Runs every guard, then decodes the message.
pub fn accept(scope: &RouteScope, inbound: &Inbound<'_>) -> Result<PreviewMessage, Rejection> {
    for guard in GUARDS {
        guard(scope, inbound)?;
    }
    serde_json::from_value(inbound.data.clone()).map_err(|e| Rejection::Malformed(e.to_string()))
}

pub fn check_origin(scope: &RouteScope, inbound: &Inbound<'_>) -> Result<(), Rejection> {
    if inbound.origin == scope.origin {
        Ok(())
    } else {
        Err(Rejection::OriginMismatch {
            expected: scope.origin.clone(),
            actual: inbound.origin.to_string(),
        })
    }
}

pub fn check_type(_scope: &RouteScope, inbound: &Inbound<'_>) -> Result<(), Rejection> {
    match str_field(inbound.data, "type") {
        Some(PREVIEW_MESSAGE_TYPE) => Ok(()),
        other => Err(Rejection::UnexpectedType(other.map(str::to_string))),
    }
}

pub fn check_vendor(scope: &RouteScope, inbound: &Inbound<'_>) -> Result<(), Rejection> {
    match str_field(inbound.data, "vendorId") {
        Some(vendor_id) if vendor_id == scope.vendor_id => Ok(()),
        other => Err(Rejection::VendorMismatch {
            expected: scope.vendor_id.clone(),
            actual: other.map(str::to_string),
        }),
    }
}

pub fn check_page(scope: &RouteScope, inbound: &Inbound<'_>) -> Result<(), Rejection> {
    let page = match inbound.data.get("page") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::String(page)) => page.as_str(),
        Some(other) => return Err(Rejection::Malformed(format!("page is not a string: {other}"))),
    };
    match page.parse::<Page>() {
        Ok(page) if page.applies_to(scope.page) => Ok(()),
        _ => Err(Rejection::PageMismatch {
            expected: scope.page,
            actual: page.to_string(),
        }),
    }
}

fn str_field<'v>(data: &'v Value, key: &str) -> Option<&'v str> {
    data.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: &str = "https://admin.example.com";

    fn scope() -> RouteScope {
        RouteScope {
            origin: ORIGIN.to_string(),
            vendor_id: "v1".to_string(),
            page: Page::Home,
        }
    }

    fn run(guard: Guard, origin: &str, data: Value) -> Result<(), Rejection> {
        guard(&scope(), &Inbound { origin, data: &data })
    }

    #[test]
    fn origin_must_match_exactly() {
        let data = json!({});
        assert!(run(check_origin, ORIGIN, data.clone()).is_ok());
        assert!(matches!(
            run(check_origin, "https://admin.example.com:8443", data.clone()),
            Err(Rejection::OriginMismatch { .. })
        ));
        assert!(run(check_origin, "null", data).is_err());
    }

    #[test]
    fn type_tag_is_required() {
        assert!(run(check_type, ORIGIN, json!({ "type": PREVIEW_MESSAGE_TYPE })).is_ok());
        assert_eq!(
            run(check_type, ORIGIN, json!({ "type": "webpackOk" })),
            Err(Rejection::UnexpectedType(Some("webpackOk".into())))
        );
        assert_eq!(
            run(check_type, ORIGIN, json!("just a string")),
            Err(Rejection::UnexpectedType(None))
        );
    }

    #[test]
    fn vendor_must_match_route_vendor() {
        assert!(run(check_vendor, ORIGIN, json!({ "vendorId": "v1" })).is_ok());
        assert!(run(check_vendor, ORIGIN, json!({ "vendorId": "v2" })).is_err());
        assert!(run(check_vendor, ORIGIN, json!({ "vendorId": 1 })).is_err());
        assert!(run(check_vendor, ORIGIN, json!({})).is_err());
    }

    #[test]
    fn page_filter_passes_unset_full_and_own_page() {
        assert!(run(check_page, ORIGIN, json!({})).is_ok());
        assert!(run(check_page, ORIGIN, json!({ "page": null })).is_ok());
        assert!(run(check_page, ORIGIN, json!({ "page": "full" })).is_ok());
        assert!(run(check_page, ORIGIN, json!({ "page": "home" })).is_ok());
        assert_eq!(
            run(check_page, ORIGIN, json!({ "page": "about" })),
            Err(Rejection::PageMismatch {
                expected: Page::Home,
                actual: "about".into()
            })
        );
        assert!(run(check_page, ORIGIN, json!({ "page": "blog" })).is_err());
    }

    #[test]
    fn origin_is_checked_before_anything_else() {
        let data = json!({ "type": "other", "vendorId": "v2", "page": "about" });
        let err = accept(&scope(), &Inbound { origin: "https://evil.test", data: &data });
        assert!(matches!(err, Err(Rejection::OriginMismatch { .. })));
    }

    #[test]
    fn passing_guards_with_bad_body_is_malformed() {
        let data = json!({
            "type": PREVIEW_MESSAGE_TYPE,
            "vendorId": "v1",
            "sectionOrder": "hero,footer",
        });
        let err = accept(&scope(), &Inbound { origin: ORIGIN, data: &data });
        assert!(matches!(err, Err(Rejection::Malformed(_))));
    }
}
