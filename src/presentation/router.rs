//! Screen routes.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::entities::EmployeeId;

const EDIT_PREFIX: &str = "/employee/edit/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
    #[error("invalid employee id in route: {0}")]
    InvalidId(String),
}

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Employee list, `/`.
    #[default]
    List,
    /// New employee form, `/create`.
    Create,
    /// Edit form, `/employee/edit/:id`.
    Edit(EmployeeId),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Create => "/create".to_string(),
            Self::Edit(id) => format!("{EDIT_PREFIX}{id}"),
        }
    }

    /// Heading shown in the header bar.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::List => "Employee List",
            Self::Create => "Add Employee",
            Self::Edit(_) => "Edit Employee",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" => Ok(Self::List),
            "/create" => Ok(Self::Create),
            other => {
                let raw_id = other
                    .strip_prefix(EDIT_PREFIX)
                    .ok_or_else(|| RouteError::Unknown(path.to_string()))?;
                EmployeeId::parse(raw_id)
                    .map(Self::Edit)
                    .ok_or_else(|| RouteError::InvalidId(raw_id.to_string()))
            }
        }
    }
}
