use lien_api::category::SearchCategory;
use lien_api::response::{SearchResult, VehicleCollateral};

/// One results-table column: the header label plus the accessor that pulls
/// the displayed cell text out of a row. Rows missing the payload render a
/// blank cell.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub value: fn(&SearchResult) -> String,
}

/// Column set for a search category. Fixed tables, never mutated; the match
/// is exhaustive, so every category resolves to a header set.
pub fn table_headers(category: SearchCategory) -> &'static [Column] {
    match category {
        SearchCategory::SerialNumber => &SERIAL_NUMBER,
        SearchCategory::IndividualDebtor => &INDIVIDUAL_DEBTOR,
        SearchCategory::BusinessDebtor => &BUSINESS_DEBTOR,
        SearchCategory::MhrNumber => &MHR_NUMBER,
        SearchCategory::Aircraft => &AIRCRAFT_DOT,
        SearchCategory::RegistrationNumber => &REGISTRATION_NUMBER,
    }
}

static SERIAL_NUMBER: [Column; 5] = [
    Column { label: "Serial Number", value: serial_number },
    Column { label: "Type", value: vehicle_type },
    Column { label: "Year", value: year },
    Column { label: "Make", value: make },
    Column { label: "Model", value: model },
];

static MHR_NUMBER: [Column; 5] = [
    Column { label: "MHR Number", value: mhr_number },
    Column { label: "Serial Number", value: serial_number },
    Column { label: "Year", value: year },
    Column { label: "Make", value: make },
    Column { label: "Model", value: model },
];

static AIRCRAFT_DOT: [Column; 4] = [
    Column { label: "D.O.T. Number", value: serial_number },
    Column { label: "Year", value: year },
    Column { label: "Make", value: make },
    Column { label: "Model", value: model },
];

static BUSINESS_DEBTOR: [Column; 3] = [
    Column { label: "Business Debtor Name", value: business_name },
    Column { label: "Registration Number", value: base_registration_number },
    Column { label: "Registration Type", value: registration_type },
];

static INDIVIDUAL_DEBTOR: [Column; 3] = [
    Column { label: "Debtor Name", value: debtor_name },
    Column { label: "Birthdate", value: birth_date },
    Column { label: "Registration Number", value: base_registration_number },
];

static REGISTRATION_NUMBER: [Column; 3] = [
    Column { label: "Registration Number", value: registration_number },
    Column { label: "Registration Type", value: registration_type },
    Column { label: "Date Registered", value: create_date_time },
];

fn vehicle(row: &SearchResult) -> Option<&VehicleCollateral> {
    row.vehicle_collateral.as_ref()
}

fn serial_number(row: &SearchResult) -> String {
    vehicle(row).and_then(|v| v.serial_number.clone()).unwrap_or_default()
}

fn vehicle_type(row: &SearchResult) -> String {
    vehicle(row).and_then(|v| v.vehicle_type.clone()).unwrap_or_default()
}

fn year(row: &SearchResult) -> String {
    vehicle(row)
        .and_then(|v| v.year)
        .map(|y| y.to_string())
        .unwrap_or_default()
}

fn make(row: &SearchResult) -> String {
    vehicle(row).and_then(|v| v.make.clone()).unwrap_or_default()
}

fn model(row: &SearchResult) -> String {
    vehicle(row).and_then(|v| v.model.clone()).unwrap_or_default()
}

fn mhr_number(row: &SearchResult) -> String {
    vehicle(row)
        .and_then(|v| v.manufactured_home_registration_number.clone())
        .unwrap_or_default()
}

fn business_name(row: &SearchResult) -> String {
    row.debtor
        .as_ref()
        .and_then(|d| d.business_name.clone())
        .unwrap_or_default()
}

fn debtor_name(row: &SearchResult) -> String {
    row.debtor
        .as_ref()
        .and_then(|d| d.person_name.as_ref())
        .map(|n| n.display())
        .unwrap_or_default()
}

fn birth_date(row: &SearchResult) -> String {
    row.debtor
        .as_ref()
        .and_then(|d| d.birth_date.clone())
        .unwrap_or_default()
}

fn registration_number(row: &SearchResult) -> String {
    row.registration_number.clone().unwrap_or_default()
}

fn base_registration_number(row: &SearchResult) -> String {
    row.base_registration_number.clone().unwrap_or_default()
}

fn registration_type(row: &SearchResult) -> String {
    row.registration_type.clone().unwrap_or_default()
}

fn create_date_time(row: &SearchResult) -> String {
    row.create_date_time.clone().unwrap_or_default()
}
