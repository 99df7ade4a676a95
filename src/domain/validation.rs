//! Employee form validation.
//!
//! Validation runs over the raw form draft, where every field is still a
//! string, and yields a field-to-message map. An empty map means the draft
//! can be converted into a [`NewEmployee`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::domain::entities::{Department, Employee, NewEmployee, Position};

/// Date format used for both display and storage.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Minimum age in whole calendar years.
pub const MINIMUM_AGE: i32 = 18;

const MIN_NAME_LENGTH: usize = 2;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Editable employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::DateOfEmployment,
        Self::DateOfBirth,
        Self::Phone,
        Self::Email,
        Self::Department,
        Self::Position,
    ];

    /// Machine name of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfEmployment => "Date of Employment",
            Self::DateOfBirth => "Date of Birth",
            Self::Phone => "Phone Number",
            Self::Email => "Email Address",
            Self::Department => "Department",
            Self::Position => "Position",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Field name to error message mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears the error of a single field.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// First failing field in form order.
    #[must_use]
    pub fn first_field(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    /// Pre-fills a draft from a stored record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_employment: employee.date_of_employment.clone(),
            date_of_birth: employee.date_of_birth.clone(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            department: employee.department.to_string(),
            position: employee.position.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfEmployment => &self.date_of_employment,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Department => &self.department,
            Field::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::DateOfEmployment => self.date_of_employment = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Department => self.department = value,
            Field::Position => self.position = value,
        }
    }

    /// Runs the full ruleset against the draft.
    #[must_use]
    pub fn validate(&self, current_year: i32) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.first_name.chars().count() < MIN_NAME_LENGTH {
            errors.insert(
                Field::FirstName,
                "First name must be at least 2 characters",
            );
        }
        if self.last_name.chars().count() < MIN_NAME_LENGTH {
            errors.insert(Field::LastName, "Last name must be at least 2 characters");
        }

        if self.date_of_employment.is_empty() {
            errors.insert(Field::DateOfEmployment, "Employment date is required");
        } else if parse_date(&self.date_of_employment).is_none() {
            errors.insert(
                Field::DateOfEmployment,
                "Employment date must be in DD/MM/YYYY format",
            );
        }

        if self.date_of_birth.is_empty() {
            errors.insert(Field::DateOfBirth, "Date of birth is required");
        } else {
            match parse_date(&self.date_of_birth) {
                None => errors.insert(
                    Field::DateOfBirth,
                    "Date of birth must be in DD/MM/YYYY format",
                ),
                Some(birth) if current_year - birth.year() < MINIMUM_AGE => errors.insert(
                    Field::DateOfBirth,
                    "Employee must be at least 18 years old",
                ),
                Some(_) => {}
            }
        }

        if !PHONE_RE.is_match(&self.phone) {
            errors.insert(
                Field::Phone,
                "Phone number must be 10 digits (e.g., 5306626742)",
            );
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }
        if Department::parse(&self.department).is_none() {
            errors.insert(Field::Department, "Please select a valid department");
        }
        if Position::parse(&self.position).is_none() {
            errors.insert(Field::Position, "Please select a valid position");
        }

        errors
    }

    /// Validates and converts into a record ready for the store.
    ///
    /// # Errors
    /// Returns the full error map if any rule fails.
    pub fn into_new_employee(self, current_year: i32) -> Result<NewEmployee, ValidationErrors> {
        let errors = self.validate(current_year);
        let (Some(department), Some(position)) = (
            Department::parse(&self.department),
            Position::parse(&self.position),
        ) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEmployee {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone: self.phone,
            email: self.email,
            department,
            position,
        })
    }
}

/// Parses a `DD/MM/YYYY` date. Two-digit days and months and a four-digit
/// year are required; surrounding whitespace is rejected.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Year of the local clock, used as the reference for the age rule.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
