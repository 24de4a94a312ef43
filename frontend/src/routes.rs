//! Maps the location path to the screen the app shows.

use common::model::page::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// `/` or `/analytics`
    Analytics,
    /// `/preview/{vendor_id}` or `/preview/{vendor_id}/{page}`
    Preview { vendor_id: String, page: Page },
    NotFound,
}

impl Route {
    /// Segments are percent-decoded, so ids match the decoded values that
    /// arrive in preview messages.
    pub fn from_path(path: &str) -> Self {
        let segments: Option<Vec<String>> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).ok().map(|s| s.into_owned()))
            .collect();
        let Some(segments) = segments else {
            return Route::NotFound;
        };
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] | ["analytics"] => Route::Analytics,
            ["preview", vendor_id] => Route::Preview {
                vendor_id: vendor_id.to_string(),
                page: Page::Home,
            },
            ["preview", vendor_id, page] => match page.parse::<Page>() {
                Ok(page) if page != Page::Full => Route::Preview {
                    vendor_id: vendor_id.to_string(),
                    page,
                },
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or(Route::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_ids_are_percent_decoded() {
        assert_eq!(
            Route::from_path("/preview/Caf%C3%A9%20Luna%2550/about"),
            Route::Preview {
                vendor_id: "Café Luna%50".to_string(),
                page: Page::About,
            }
        );
    }

    #[test]
    fn invalid_encoding_is_not_found() {
        assert_eq!(Route::from_path("/preview/%FF%FE"), Route::NotFound);
    }

    #[test]
    fn full_is_not_a_route_page() {
        assert_eq!(Route::from_path("/preview/v1/full"), Route::NotFound);
        assert_eq!(Route::from_path("/"), Route::Analytics);
        assert_eq!(
            Route::from_path("/preview/v1"),
            Route::Preview {
                vendor_id: "v1".to_string(),
                page: Page::Home,
            }
        );
    }
}
