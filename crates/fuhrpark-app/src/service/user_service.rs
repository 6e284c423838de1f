//! User service

use std::rc::Rc;

use uuid::Uuid;

use fuhrpark_domain::model::User;
use fuhrpark_domain::repository::UserRepository;
use fuhrpark_types::{Error, Result};

/// User use cases: registration with display-name uniqueness.
pub struct UserService {
    users: Rc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Rc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// All users, sorted by display name
    pub fn all(&self) -> Vec<User> {
        let mut users = self.users.all();
        users.sort_by_key(|u| u.display_name().to_lowercase());
        users
    }

    pub fn add_person(&self, first_name: &str, last_name: &str) -> Result<Uuid> {
        let person = User::person(None, first_name, last_name)?;
        self.ensure_unique_display_name(&person.display_name())?;
        let id = person.id();
        self.users.add(person)?;
        Ok(id)
    }

    pub fn add_company(&self, name: &str) -> Result<Uuid> {
        let company = User::company(None, name)?;
        self.ensure_unique_display_name(&company.display_name())?;
        let id = company.id();
        self.users.add(company)?;
        Ok(id)
    }

    pub fn get_required(&self, id: Uuid) -> Result<User> {
        self.users
            .find_by_id(id)
            .ok_or_else(|| Error::NotFound(format!("user {id}")))
    }

    pub fn remove(&self, id: Uuid) -> Result<bool> {
        self.users.remove(id)
    }

    fn ensure_unique_display_name(&self, display_name: &str) -> Result<()> {
        let lowered = display_name.to_lowercase();
        let exists = self
            .users
            .all()
            .iter()
            .any(|u| u.display_name().to_lowercase() == lowered);

        if exists {
            return Err(Error::Duplicate(format!("user '{display_name}'")));
        }
        Ok(())
    }
}
