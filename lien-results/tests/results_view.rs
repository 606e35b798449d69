use lien_results::api::category::SearchCategory;
use lien_results::api::query::{PersonName, SearchCriteria, SearchQuery};
use lien_results::api::response::{
    Debtor, SearchResponse, SearchResult, VehicleCollateral,
};
use lien_results::columns::table_headers;
use lien_results::presenter::{present, PresentError, ResultsBody, ResultsTable};

fn response(
    category: SearchCategory,
    criteria: SearchCriteria,
    results: Vec<SearchResult>,
) -> SearchResponse {
    SearchResponse {
        search_id: Some("1294373".into()),
        search_date_time: Some("2021-01-06T16:56:20Z".into()),
        max_results_size: 1000,
        returned_results_size: results.len() as u32,
        total_results_size: results.len() as u64,
        search_query: SearchQuery { category, criteria, client_reference_id: None },
        results,
    }
}

fn vehicle_row(serial: &str, year: u32, make: &str, model: &str) -> SearchResult {
    SearchResult {
        base_registration_number: Some("023001B".into()),
        vehicle_collateral: Some(VehicleCollateral {
            vehicle_type: Some("MV".into()),
            serial_number: Some(serial.into()),
            year: Some(year),
            make: Some(make.into()),
            model: Some(model.into()),
            manufactured_home_registration_number: None,
        }),
        ..Default::default()
    }
}

fn table<'a, 'b>(body: &'a ResultsBody<'b>) -> &'a ResultsTable<'b> {
    match body {
        ResultsBody::Table(table) => table,
        ResultsBody::NoMatches { .. } => panic!("expected a table body"),
    }
}

fn labels(columns: &[lien_results::columns::Column]) -> Vec<&'static str> {
    columns.iter().map(|c| c.label).collect()
}

#[test]
fn zero_results_shows_the_notice_and_no_table() {
    let resp = response(
        SearchCategory::SerialNumber,
        SearchCriteria::for_value("T1234"),
        vec![],
    );
    let view = present(&resp).expect("view");
    assert!(view.searched);
    assert_eq!(view.search_value, "T1234");
    assert_eq!(view.total_results, 0);
    match view.body {
        ResultsBody::NoMatches { category_label } => {
            assert_eq!(category_label, "Serial Number")
        }
        ResultsBody::Table(_) => panic!("zero results must not build a table"),
    }
}

#[test]
fn serial_number_results_preselect_exact_matches() {
    let resp = response(
        SearchCategory::SerialNumber,
        SearchCriteria::for_value("KM8J3CA46JU622994"),
        vec![
            vehicle_row("KM8J3CA46JU622994", 2018, "HYUNDAI", "TUCSON"),
            vehicle_row("KM8J3CA46JU622994", 2017, "HYUNDAI", "TUCSON"),
            vehicle_row("KX8J3CA46JU622994", 2020, "TESLA", "MODEL X"),
        ],
    );
    let view = present(&resp).expect("view");
    assert!(view.searched);
    assert_eq!(view.search_value, "KM8J3CA46JU622994");
    assert_eq!(view.total_results, 3);

    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::SerialNumber))
    );
    assert_eq!(table.rows, resp.results.as_slice());
    assert_eq!(table.exact_matches(), 2);
    assert_eq!(table.selected.len(), 2);
    assert!(std::ptr::eq(table.selected[0], &resp.results[0]));
    assert!(std::ptr::eq(table.selected[1], &resp.results[1]));
}

#[test]
fn business_debtor_results_match_ignoring_case() {
    let debtor_row = |name: &str| SearchResult {
        base_registration_number: Some("023001B".into()),
        registration_type: Some("SA".into()),
        debtor: Some(Debtor {
            business_name: Some(name.into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let resp = response(
        SearchCategory::BusinessDebtor,
        SearchCriteria::for_value("Gamma Distributors Inc."),
        vec![
            debtor_row("GAMMA DISTRIBUTORS INC."),
            debtor_row("Gamma  Distributors Inc."),
            debtor_row("Gamma Holdings Ltd."),
        ],
    );
    let view = present(&resp).expect("view");
    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::BusinessDebtor))
    );
    assert_eq!(table.exact_matches(), 2);
    assert!(std::ptr::eq(table.selected[0], &resp.results[0]));
    assert!(std::ptr::eq(table.selected[1], &resp.results[1]));
}

#[test]
fn mhr_results_match_on_the_home_registration_number() {
    let mhr_row = |number: &str| SearchResult {
        vehicle_collateral: Some(VehicleCollateral {
            vehicle_type: Some("MH".into()),
            serial_number: Some("9493X".into()),
            year: Some(1995),
            make: Some("MODULINE".into()),
            model: Some("CLASSIC".into()),
            manufactured_home_registration_number: Some(number.into()),
        }),
        ..Default::default()
    };
    let resp = response(
        SearchCategory::MhrNumber,
        SearchCriteria::for_value("022911"),
        vec![mhr_row("022911"), mhr_row("022911"), mhr_row("099482")],
    );
    let view = present(&resp).expect("view");
    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::MhrNumber))
    );
    assert_eq!(table.exact_matches(), 2);
}

#[test]
fn aircraft_results_match_the_dot_number_ignoring_case() {
    let resp = response(
        SearchCategory::Aircraft,
        SearchCriteria::for_value("CFYPW"),
        vec![
            vehicle_row("CFYPW", 1998, "CESSNA", "172"),
            vehicle_row("cfypw", 2004, "PIPER", "PA-28"),
            vehicle_row("CGXQT", 2010, "CESSNA", "182"),
        ],
    );
    let view = present(&resp).expect("view");
    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::Aircraft))
    );
    assert_eq!(table.exact_matches(), 2);
}

#[test]
fn registration_number_results_match_the_number() {
    let reg_row = |number: &str| SearchResult {
        registration_number: Some(number.into()),
        registration_type: Some("SA".into()),
        create_date_time: Some("2021-01-06T16:56:20Z".into()),
        ..Default::default()
    };
    let resp = response(
        SearchCategory::RegistrationNumber,
        SearchCriteria::for_value("223456B"),
        vec![reg_row("223456B"), reg_row("223456b"), reg_row("198374A")],
    );
    let view = present(&resp).expect("view");
    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::RegistrationNumber))
    );
    assert_eq!(table.exact_matches(), 2);
    assert!(std::ptr::eq(table.selected[0], &resp.results[0]));
    assert!(std::ptr::eq(table.selected[1], &resp.results[1]));
}

#[test]
fn individual_debtor_results_match_on_the_person_name() {
    let person_row = |first: &str, last: &str| SearchResult {
        base_registration_number: Some("023001B".into()),
        debtor: Some(Debtor {
            person_name: Some(PersonName {
                first: first.into(),
                second: None,
                last: last.into(),
            }),
            birth_date: Some("1974-08-20".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let resp = response(
        SearchCategory::IndividualDebtor,
        SearchCriteria::for_debtor_name(PersonName {
            first: "Astrid".into(),
            second: None,
            last: "Olsen".into(),
        }),
        vec![
            person_row("ASTRID", "OLSEN"),
            person_row("Astrid", "Olsen"),
            person_row("Bror", "Olsen"),
        ],
    );
    let view = present(&resp).expect("view");
    assert_eq!(view.search_value, "Olsen, Astrid");
    let table = table(&view.body);
    assert_eq!(
        labels(table.headers),
        labels(table_headers(SearchCategory::IndividualDebtor))
    );
    assert_eq!(table.exact_matches(), 2);
}

#[test]
fn total_size_is_echoed_even_when_results_are_truncated() {
    let mut resp = response(
        SearchCategory::SerialNumber,
        SearchCriteria::for_value("T1234"),
        vec![vehicle_row("T1234", 2018, "HYUNDAI", "TUCSON")],
    );
    resp.total_results_size = 1000;
    let view = present(&resp).expect("view");
    assert_eq!(view.total_results, 1000);
    assert_eq!(table(&view.body).rows.len(), 1);
}

#[test]
fn missing_criteria_fails_closed() {
    let resp = response(
        SearchCategory::SerialNumber,
        SearchCriteria::default(),
        vec![],
    );
    assert_eq!(
        present(&resp).unwrap_err(),
        PresentError::MissingCriteria(SearchCategory::SerialNumber)
    );

    // a debtor-name category cannot fall back to a plain value
    let resp = response(
        SearchCategory::IndividualDebtor,
        SearchCriteria::for_value("Olsen"),
        vec![],
    );
    assert_eq!(
        present(&resp).unwrap_err(),
        PresentError::MissingCriteria(SearchCategory::IndividualDebtor)
    );
}

#[test]
fn presenting_twice_derives_the_same_view() {
    let resp = response(
        SearchCategory::SerialNumber,
        SearchCriteria::for_value("KM8J3CA46JU622994"),
        vec![
            vehicle_row("KM8J3CA46JU622994", 2018, "HYUNDAI", "TUCSON"),
            vehicle_row("KX8J3CA46JU622994", 2020, "TESLA", "MODEL X"),
        ],
    );
    let first = present(&resp).expect("view");
    let second = present(&resp).expect("view");
    assert_eq!(first.search_value, second.search_value);
    assert_eq!(first.total_results, second.total_results);
    assert_eq!(
        table(&first.body).exact_matches(),
        table(&second.body).exact_matches()
    );
}
