use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::role::RoleScope;

/// Analytics query boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsSource {
    /// Platform-wide.
    #[default]
    All,
    /// The single Ophmart storefront.
    Ophmart,
    /// One vendor template, qualified by the template id.
    Template,
}

impl AnalyticsSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalyticsSource::All => "all",
            AnalyticsSource::Ophmart => "ophmart",
            AnalyticsSource::Template => "template",
        }
    }
}

impl fmt::Display for AnalyticsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AnalyticsSource::All),
            "ophmart" => Ok(AnalyticsSource::Ophmart),
            "template" => Ok(AnalyticsSource::Template),
            other => Err(format!("unknown analytics source `{other}`")),
        }
    }
}

/// One entry of the scope selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOption {
    pub value: AnalyticsSource,
    pub label: &'static str,
}

const ALL: SourceOption = SourceOption {
    value: AnalyticsSource::All,
    label: "All sources",
};
const OPHMART: SourceOption = SourceOption {
    value: AnalyticsSource::Ophmart,
    label: "Ophmart storefront",
};
const TEMPLATE: SourceOption = SourceOption {
    value: AnalyticsSource::Template,
    label: "Vendor template",
};

const VENDOR_OPTIONS: &[SourceOption] = &[TEMPLATE];
const STAFF_OPTIONS: &[SourceOption] = &[ALL, OPHMART, TEMPLATE];

/// Selectable scopes for a role.
pub fn source_options(scope: RoleScope) -> &'static [SourceOption] {
    match scope {
        RoleScope::Vendor => VENDOR_OPTIONS,
        RoleScope::Other => STAFF_OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendors_get_only_the_template_scope() {
        let options = source_options(RoleScope::Vendor);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, AnalyticsSource::Template);
    }

    #[test]
    fn everyone_else_gets_three_scopes() {
        let values: Vec<_> = source_options(RoleScope::Other)
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(
            values,
            vec![
                AnalyticsSource::All,
                AnalyticsSource::Ophmart,
                AnalyticsSource::Template
            ]
        );
    }

    #[test]
    fn round_trips_through_storage_strings() {
        for option in source_options(RoleScope::Other) {
            assert_eq!(option.value.as_str().parse::<AnalyticsSource>(), Ok(option.value));
        }
        assert!("".parse::<AnalyticsSource>().is_err());
        assert!("ALL".parse::<AnalyticsSource>().is_err());
    }
}
