use lien_api::category::SearchCategory;
use lien_api::query::PersonName;
use thiserror::Error;

pub const MAX_SERIAL_LEN: usize = 25;
pub const MHR_NUMBER_LEN: usize = 6;
pub const MIN_DEBTOR_NAME_LEN: usize = 2;
pub const MAX_DEBTOR_NAME_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("search criteria is empty")]
    Empty,
    #[error("search criteria exceeds {max} characters")]
    TooLong { max: usize },
    #[error("search criteria must be at least {min} characters")]
    TooShort { min: usize },
    #[error("manufactured home registration numbers are up to {MHR_NUMBER_LEN} digits")]
    InvalidMhrNumber,
    #[error("registration numbers are 6 digits with an optional letter suffix")]
    InvalidRegistrationNumber,
    #[error("{0} searches take a structured debtor name, not a single value")]
    NotValueKeyed(SearchCategory),
    #[error("debtor first and last names are required")]
    IncompleteName,
}

/// Normalize raw criteria input for a value-keyed search category.
/// - Serial numbers: uppercased, interior whitespace removed.
/// - Aircraft D.O.T. numbers: uppercased, spaces and hyphens removed.
/// - MHR numbers: digits only, left-padded with zeros to six.
/// - Registration numbers: uppercased, shape-checked.
/// - Business debtor names: whitespace runs collapsed to one space.
pub fn normalize_criteria(
    category: SearchCategory,
    raw: &str,
) -> Result<String, CriteriaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CriteriaError::Empty);
    }
    match category {
        SearchCategory::SerialNumber => {
            let value: String = trimmed
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_uppercase();
            check_len(&value, MAX_SERIAL_LEN)?;
            Ok(value)
        }
        SearchCategory::Aircraft => {
            let value: String = trimmed
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '-')
                .collect::<String>()
                .to_ascii_uppercase();
            if value.is_empty() {
                return Err(CriteriaError::Empty);
            }
            check_len(&value, MAX_SERIAL_LEN)?;
            Ok(value)
        }
        SearchCategory::MhrNumber => {
            if trimmed.len() > MHR_NUMBER_LEN
                || !trimmed.chars().all(|c| c.is_ascii_digit())
            {
                return Err(CriteriaError::InvalidMhrNumber);
            }
            Ok(format!("{:0>width$}", trimmed, width = MHR_NUMBER_LEN))
        }
        SearchCategory::RegistrationNumber => {
            let value = trimmed.to_ascii_uppercase();
            if !is_registration_number(&value) {
                return Err(CriteriaError::InvalidRegistrationNumber);
            }
            Ok(value)
        }
        SearchCategory::BusinessDebtor => {
            let value = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
            if value.chars().count() < MIN_DEBTOR_NAME_LEN {
                return Err(CriteriaError::TooShort { min: MIN_DEBTOR_NAME_LEN });
            }
            check_len(&value, MAX_DEBTOR_NAME_LEN)?;
            Ok(value)
        }
        SearchCategory::IndividualDebtor => Err(CriteriaError::NotValueKeyed(category)),
    }
}

/// Trim the parts of a debtor name and drop an empty middle name. First and
/// last names are required.
pub fn normalize_person_name(name: &PersonName) -> Result<PersonName, CriteriaError> {
    let first = name.first.trim();
    let last = name.last.trim();
    if first.is_empty() || last.is_empty() {
        return Err(CriteriaError::IncompleteName);
    }
    let second = name
        .second
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Ok(PersonName { first: first.to_string(), second, last: last.to_string() })
}

fn check_len(value: &str, max: usize) -> Result<(), CriteriaError> {
    if value.chars().count() > max {
        return Err(CriteriaError::TooLong { max });
    }
    Ok(())
}

fn is_registration_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        6 => bytes.iter().all(u8::is_ascii_digit),
        7 => {
            bytes[..6].iter().all(u8::is_ascii_digit) && bytes[6].is_ascii_uppercase()
        }
        _ => false,
    }
}
