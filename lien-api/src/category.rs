use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Search category as submitted to the registry API. Closed set; anything
/// else coming off the wire is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SearchCategory {
    SerialNumber,
    IndividualDebtor,
    BusinessDebtor,
    MhrNumber,
    Aircraft,
    RegistrationNumber,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 6] = [
        SearchCategory::SerialNumber,
        SearchCategory::IndividualDebtor,
        SearchCategory::BusinessDebtor,
        SearchCategory::MhrNumber,
        SearchCategory::Aircraft,
        SearchCategory::RegistrationNumber,
    ];

    /// Wire tag used by the search API.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchCategory::SerialNumber => "SERIAL_NUMBER",
            SearchCategory::IndividualDebtor => "INDIVIDUAL_DEBTOR",
            SearchCategory::BusinessDebtor => "BUSINESS_DEBTOR",
            SearchCategory::MhrNumber => "MHR_NUMBER",
            SearchCategory::Aircraft => "AIRCRAFT",
            SearchCategory::RegistrationNumber => "REGISTRATION_NUMBER",
        }
    }

    /// Display label, as it appears in the no-results notice.
    pub fn label(self) -> &'static str {
        match self {
            SearchCategory::SerialNumber => "Serial Number",
            SearchCategory::IndividualDebtor => "Individual Debtor",
            SearchCategory::BusinessDebtor => "Business Debtor",
            SearchCategory::MhrNumber => "Manufactured Home Registration Number",
            SearchCategory::Aircraft => "Aircraft Airframe D.O.T. Number",
            SearchCategory::RegistrationNumber => "Registration Number",
        }
    }

    /// Categories keyed by a single criteria value. `IndividualDebtor` is
    /// the exception; it takes a structured debtor name instead.
    pub fn is_value_keyed(self) -> bool {
        !matches!(self, SearchCategory::IndividualDebtor)
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for SearchCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SERIAL_NUMBER" => Ok(SearchCategory::SerialNumber),
            "INDIVIDUAL_DEBTOR" => Ok(SearchCategory::IndividualDebtor),
            "BUSINESS_DEBTOR" => Ok(SearchCategory::BusinessDebtor),
            "MHR_NUMBER" => Ok(SearchCategory::MhrNumber),
            "AIRCRAFT" => Ok(SearchCategory::Aircraft),
            "REGISTRATION_NUMBER" => Ok(SearchCategory::RegistrationNumber),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
