//! Users who take vehicles on trips

use uuid::Uuid;

use crate::guard;
use fuhrpark_types::Result;

/// A fleet user, either a natural person or a company
#[derive(Debug, Clone, PartialEq)]
pub enum User {
    Person {
        id: Uuid,
        first_name: String,
        last_name: String,
    },
    Company {
        id: Uuid,
        name: String,
    },
}

impl User {
    /// Create a validated person; a fresh id is assigned when none is given.
    pub fn person(id: Option<Uuid>, first_name: &str, last_name: &str) -> Result<Self> {
        Ok(User::Person {
            id: id.unwrap_or_else(Uuid::new_v4),
            first_name: guard::not_blank(first_name, "first name")?,
            last_name: guard::not_blank(last_name, "last name")?,
        })
    }

    /// Create a validated company; a fresh id is assigned when none is given.
    pub fn company(id: Option<Uuid>, name: &str) -> Result<Self> {
        Ok(User::Company {
            id: id.unwrap_or_else(Uuid::new_v4),
            name: guard::not_blank(name, "company name")?,
        })
    }

    pub fn id(&self) -> Uuid {
        match self {
            User::Person { id, .. } | User::Company { id, .. } => *id,
        }
    }

    /// "First Last" for persons, the company name otherwise; unique
    /// case-insensitively across all users (enforced by the user service).
    pub fn display_name(&self) -> String {
        match self {
            User::Person {
                first_name,
                last_name,
                ..
            } => format!("{first_name} {last_name}"),
            User::Company { name, .. } => name.clone(),
        }
    }

    /// Type tag as used on disk and in listings
    pub fn kind_label(&self) -> &'static str {
        match self {
            User::Person { .. } => "person",
            User::Company { .. } => "company",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_display_name_joins_names() {
        let p = User::person(None, " Max ", "Mustermann").unwrap();
        assert_eq!(p.display_name(), "Max Mustermann");
        assert_eq!(p.kind_label(), "person");
    }

    #[test]
    fn company_display_name_is_its_name() {
        let c = User::company(None, "ACME GmbH").unwrap();
        assert_eq!(c.display_name(), "ACME GmbH");
        assert_eq!(c.kind_label(), "company");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(User::person(None, "", "Mustermann").is_err());
        assert!(User::person(None, "Max", "  ").is_err());
        assert!(User::company(None, " ").is_err());
    }
}
