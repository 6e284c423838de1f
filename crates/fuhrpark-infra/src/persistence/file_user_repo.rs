//! File-based user repository
//!
//! Stores persons and companies together in `users.json`, discriminated by
//! the `Type` field.

use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fuhrpark_domain::model::User;
use fuhrpark_domain::repository::UserRepository;
use fuhrpark_types::{Error, Result};

use super::json_store;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserRecord {
    id: Uuid,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    company_name: Option<String>,
}

impl UserRecord {
    fn from_user(user: &User) -> Self {
        match user {
            User::Person {
                id,
                first_name,
                last_name,
            } => Self {
                id: *id,
                kind: "person".to_string(),
                first_name: Some(first_name.clone()),
                last_name: Some(last_name.clone()),
                company_name: None,
            },
            User::Company { id, name } => Self {
                id: *id,
                kind: "company".to_string(),
                first_name: None,
                last_name: None,
                company_name: Some(name.clone()),
            },
        }
    }

    fn into_user(self) -> Result<User> {
        match self.kind.trim().to_lowercase().as_str() {
            "person" => User::person(
                Some(self.id),
                self.first_name.as_deref().unwrap_or(""),
                self.last_name.as_deref().unwrap_or(""),
            ),
            "company" => User::company(Some(self.id), self.company_name.as_deref().unwrap_or("")),
            other => Err(Error::UnknownReference(format!(
                "unknown user type '{other}'"
            ))),
        }
    }
}

/// File-based implementation of UserRepository
pub struct FileUserRepository {
    path: PathBuf,
    users: RefCell<Vec<User>>,
}

impl FileUserRepository {
    /// Create or load a user repository backed by the given file
    pub fn open(path: PathBuf) -> Self {
        let users = json_store::load_records(&path)
            .into_iter()
            .filter_map(|value| serde_json::from_value::<UserRecord>(value).ok())
            .filter_map(|record| record.into_user().ok())
            .collect();

        Self {
            path,
            users: RefCell::new(users),
        }
    }

    fn persist(&self) -> Result<()> {
        let records: Vec<UserRecord> = self.users.borrow().iter().map(UserRecord::from_user).collect();
        json_store::save(&self.path, &records)
    }
}

impl UserRepository for FileUserRepository {
    fn all(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.borrow().iter().find(|u| u.id() == id).cloned()
    }

    fn add(&self, user: User) -> Result<()> {
        // an add with an already-stored id is ignored
        if self.find_by_id(user.id()).is_some() {
            return Ok(());
        }
        self.users.borrow_mut().push(user);
        self.persist()
    }

    fn remove(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.borrow_mut();
        let Some(idx) = users.iter().position(|u| u.id() == id) else {
            return Ok(false);
        };
        users.remove(idx);
        drop(users);
        self.persist()?;
        Ok(true)
    }
}
