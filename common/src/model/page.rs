use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A storefront page a template snapshot describes.
///
/// `Full` never names a rendered page of its own; in preview messages it acts
/// as a wildcard matching every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Contact,
    Full,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Full => "full",
        }
    }

    /// Whether a message addressed to `self` applies to a route rendering `route_page`.
    pub fn applies_to(self, route_page: Page) -> bool {
        self == Page::Full || self == route_page
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "contact" => Ok(Page::Contact),
            "full" => Ok(Page::Full),
            other => Err(format!("unknown page `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_a_wildcard() {
        assert!(Page::Full.applies_to(Page::Home));
        assert!(Page::Full.applies_to(Page::Contact));
        assert!(Page::About.applies_to(Page::About));
        assert!(!Page::About.applies_to(Page::Home));
    }

    #[test]
    fn parses_lowercase_names_only() {
        assert_eq!("contact".parse::<Page>(), Ok(Page::Contact));
        assert!("Contact".parse::<Page>().is_err());
        assert!("landing".parse::<Page>().is_err());
    }
}
