use crate::category::SearchCategory;

/// Structured debtor name used by individual debtor searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct PersonName {
    pub first: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub second: Option<String>,
    pub last: String,
}

impl PersonName {
    /// "LAST, FIRST SECOND" order used when echoing the search back.
    pub fn display(&self) -> String {
        match &self.second {
            Some(second) => format!("{}, {} {}", self.last, self.first, second),
            None => format!("{}, {}", self.last, self.first),
        }
    }
}

/// What the user searched for. Value-keyed categories fill `value`;
/// individual debtor searches fill `debtor_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct SearchCriteria {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub debtor_name: Option<PersonName>,
}

impl SearchCriteria {
    pub fn for_value(value: impl Into<String>) -> Self {
        Self { value: Some(value.into()), debtor_name: None }
    }

    pub fn for_debtor_name(name: PersonName) -> Self {
        Self { value: None, debtor_name: Some(name) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct SearchQuery {
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub category: SearchCategory,
    pub criteria: SearchCriteria,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub client_reference_id: Option<String>,
}
