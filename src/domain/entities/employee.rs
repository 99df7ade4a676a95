//! Employee entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses identifier from its hyphenated string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Self; 2] = [Self::Analytics, Self::Tech];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Self; 3] = [Self::Junior, Self::Medior, Self::Senior];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee record without an identifier, as produced by a valid form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_employment: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl NewEmployee {
    /// Attaches an identifier, producing a stored record.
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone: self.phone,
            email: self.email,
            department: self.department,
            position: self.position,
        }
    }
}

/// Stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// `DD/MM/YYYY`.
    pub date_of_employment: String,
    /// `DD/MM/YYYY`.
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Partial update merged into an existing record. The identifier is never
/// part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_employment: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

impl EmployeeUpdate {
    /// Merges set fields into `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(date) = self.date_of_employment {
            employee.date_of_employment = date;
        }
        if let Some(date) = self.date_of_birth {
            employee.date_of_birth = date;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
    }
}

impl From<NewEmployee> for EmployeeUpdate {
    fn from(value: NewEmployee) -> Self {
        Self {
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            date_of_employment: Some(value.date_of_employment),
            date_of_birth: Some(value.date_of_birth),
            phone: Some(value.phone),
            email: Some(value.email),
            department: Some(value.department),
            position: Some(value.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewEmployee {
        NewEmployee {
            first_name: "Ahmet".to_string(),
            last_name: "Sourtimes".to_string(),
            date_of_employment: "23/09/2022".to_string(),
            date_of_birth: "23/09/1990".to_string(),
            phone: "5306626742".to_string(),
            email: "ahmet@sourtimes.org".to_string(),
            department: Department::Analytics,
            position: Position::Junior,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(EmployeeId::generate(), EmployeeId::generate());
    }

    #[test]
    fn test_id_display_parse() {
        let id = EmployeeId::generate();
        assert_eq!(EmployeeId::parse(&id.to_string()), Some(id));
        assert_eq!(EmployeeId::parse("not-a-uuid"), None);
    }

    #[test]
    fn test_enum_parse_is_exact() {
        assert_eq!(Department::parse("Tech"), Some(Department::Tech));
        assert_eq!(Department::parse("tech"), None);
        assert_eq!(Position::parse("Medior"), Some(Position::Medior));
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn test_update_merges_only_set_fields() {
        let id = EmployeeId::generate();
        let mut employee = sample().with_id(id);

        EmployeeUpdate {
            last_name: Some("Yilmaz".to_string()),
            position: Some(Position::Senior),
            ..EmployeeUpdate::default()
        }
        .apply_to(&mut employee);

        assert_eq!(employee.id, id);
        assert_eq!(employee.first_name, "Ahmet");
        assert_eq!(employee.last_name, "Yilmaz");
        assert_eq!(employee.position, Position::Senior);
        assert_eq!(employee.department, Department::Analytics);
    }

    #[test]
    fn test_full_name() {
        let employee = sample().with_id(EmployeeId::generate());
        assert_eq!(employee.full_name(), "Ahmet Sourtimes");
    }

    #[test]
    fn test_new_employee_from_camel_case_json() {
        let json = r#"{
            "firstName": "Ayse",
            "lastName": "Kaya",
            "dateOfEmployment": "01/02/2020",
            "dateOfBirth": "03/04/1985",
            "phone": "5551234567",
            "email": "ayse@example.com",
            "department": "Tech",
            "position": "Senior"
        }"#;

        let parsed: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_name, "Ayse");
        assert_eq!(parsed.department, Department::Tech);
        assert_eq!(parsed.position, Position::Senior);
    }
}
