use crate::query::{PersonName, SearchQuery};

/// Serial-numbered collateral attached to a registration. Which fields are
/// populated depends on the collateral type; absent fields render blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct VehicleCollateral {
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub vehicle_type: Option<String>,
    pub serial_number: Option<String>,
    pub year: Option<u32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub manufactured_home_registration_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct Debtor {
    pub business_name: Option<String>,
    pub person_name: Option<PersonName>,
    pub birth_date: Option<String>,
}

/// One row of a search response. Polymorphic over the search category via
/// optional payloads, as on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct SearchResult {
    pub registration_number: Option<String>,
    pub base_registration_number: Option<String>,
    pub registration_type: Option<String>,
    pub create_date_time: Option<String>,
    pub vehicle_collateral: Option<VehicleCollateral>,
    pub debtor: Option<Debtor>,
}

/// Response envelope for one executed search. `returned_results_size` is
/// expected to equal `results.len()`; `total_results_size` may exceed it
/// when the backend truncates at `max_results_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct SearchResponse {
    pub search_id: Option<String>,
    pub search_date_time: Option<String>,
    pub max_results_size: u32,
    pub returned_results_size: u32,
    pub total_results_size: u64,
    pub search_query: SearchQuery,
    #[cfg_attr(feature = "json", serde(default))]
    pub results: Vec<SearchResult>,
}
