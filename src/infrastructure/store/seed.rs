//! Startup data for the employee store.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::{Department, NewEmployee, Position};
use crate::domain::validation::EmployeeDraft;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

const FIRST_NAMES: [&str; 8] = [
    "Ahmet", "Ayse", "Mehmet", "Elif", "Can", "Zeynep", "Emre", "Selin",
];
const LAST_NAMES: [&str; 6] = ["Sourtimes", "Yilmaz", "Kaya", "Demir", "Sahin", "Celik"];

/// Generates `count` deterministic demo employees, all of which pass
/// validation.
#[must_use]
pub fn demo_employees(count: usize) -> Vec<NewEmployee> {
    (0..count)
        .map(|i| {
            let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last_name = LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()];
            let day = i % 28 + 1;
            let month = i % 12 + 1;
            NewEmployee {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                date_of_employment: format!("{day:02}/{month:02}/{}", 2015 + i % 10),
                date_of_birth: format!("{day:02}/{month:02}/{}", 1970 + i % 30),
                phone: format!("53066{:05}", 26742 + i),
                email: format!(
                    "{}.{}{}@sourtimes.org",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    i
                ),
                department: Department::ALL[i % Department::ALL.len()],
                position: Position::ALL[i % Position::ALL.len()],
            }
        })
        .collect()
}

/// Loads employees from a JSON array of camelCase records without ids.
///
/// Records that fail validation against `current_year` are skipped with a
/// warning.
///
/// # Errors
/// Returns `SeedError` if the file cannot be read or is not a valid array.
pub fn load_seed_file(path: &Path, current_year: i32) -> Result<Vec<NewEmployee>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<NewEmployee> =
        serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let total = records.len();
    let valid: Vec<NewEmployee> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let errors = draft_of(&record).validate(current_year);
            if errors.is_empty() {
                Some(record)
            } else {
                let fields: Vec<_> = errors.iter().map(|(field, _)| field.key()).collect();
                warn!(index, ?fields, "Skipping invalid seed record");
                None
            }
        })
        .collect();

    info!(path = %path.display(), loaded = valid.len(), total, "Seed file loaded");
    Ok(valid)
}

fn draft_of(record: &NewEmployee) -> EmployeeDraft {
    EmployeeDraft {
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        date_of_employment: record.date_of_employment.clone(),
        date_of_birth: record.date_of_birth.clone(),
        phone: record.phone.clone(),
        email: record.email.clone(),
        department: record.department.to_string(),
        position: record.position.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YEAR: i32 = 2026;

    #[test]
    fn test_demo_employees_are_valid() {
        let employees = demo_employees(40);
        assert_eq!(employees.len(), 40);
        for employee in &employees {
            let errors = draft_of(employee).validate(YEAR);
            assert!(errors.is_empty(), "{employee:?}: {errors:?}");
        }
    }

    #[test]
    fn test_demo_employees_empty() {
        assert!(demo_employees(0).is_empty());
    }

    #[test]
    fn test_load_seed_file_skips_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"firstName": "Ayse", "lastName": "Kaya", "dateOfEmployment": "01/02/2020",
                  "dateOfBirth": "03/04/1985", "phone": "5551234567", "email": "ayse@example.com",
                  "department": "Tech", "position": "Senior"}},
                {{"firstName": "X", "lastName": "Kaya", "dateOfEmployment": "01/02/2020",
                  "dateOfBirth": "03/04/1985", "phone": "5551234567", "email": "x@example.com",
                  "department": "Tech", "position": "Senior"}}
            ]"#
        )
        .unwrap();

        let records = load_seed_file(file.path(), YEAR).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Ayse");
    }

    #[test]
    fn test_load_seed_file_missing() {
        let result = load_seed_file(Path::new("/definitely/not/here.json"), YEAR);
        assert!(matches!(result, Err(SeedError::Read { .. })));
    }

    #[test]
    fn test_load_seed_file_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();

        let result = load_seed_file(file.path(), YEAR);
        assert!(matches!(result, Err(SeedError::Parse { .. })));
    }
}
