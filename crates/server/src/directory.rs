use std::{collections::HashSet, fs, path::Path, sync::Arc};

use anyhow::{bail, Context};
use shared::domain::User;

const SEED_USERS: &str = include_str!("../data/users.json");

/// The full user list served by `GET /users`, in file order.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Arc<Vec<User>>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.id) {
                bail!("duplicate user id {} in directory", user.id);
            }
        }
        Ok(Self {
            users: Arc::new(users),
        })
    }

    pub fn seed() -> anyhow::Result<Self> {
        Self::from_json(SEED_USERS).context("built-in user seed is invalid")
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let users: Vec<User> = serde_json::from_str(raw).context("malformed user list")?;
        Self::new(users)
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Self::seed();
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset '{}'", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid dataset '{}'", path.display()))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
