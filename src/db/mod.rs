mod meals;
mod memory;
mod migrate;
mod profile;

pub use memory::MemoryStore;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::models::meal::MealEntry;
use crate::models::profile::UserProfile;

/// Typed persistence for the profile and the meal log.
///
/// The analytics engine never touches a `Store`; callers read through it and
/// hand plain slices to the engine.
pub trait Store {
    fn load_profile(&self) -> Result<Option<UserProfile>>;
    /// Overwrites any existing profile.
    fn save_profile(&mut self, profile: &UserProfile) -> Result<()>;
    /// All meals in insertion order.
    fn list_meals(&self) -> Result<Vec<MealEntry>>;
    fn add_meal(&mut self, meal: &MealEntry) -> Result<()>;
    /// Full-record replace of the first entry with `id`. Returns false if absent.
    fn update_meal(&mut self, id: &str, meal: &MealEntry) -> Result<bool>;
    /// Returns false if no entry had `id`.
    fn delete_meal(&mut self, id: &str) -> Result<bool>;
    /// Drop the profile and every meal.
    fn clear_all(&mut self) -> Result<()>;
}

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    /// A throwaway database that lives only as long as the handle.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrate::run(&conn)?;
        Ok(Self { conn })
    }
}

impl Store for Database {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        self.get_profile()
    }

    fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.put_profile(profile)
    }

    fn list_meals(&self) -> Result<Vec<MealEntry>> {
        self.query_meals()
    }

    fn add_meal(&mut self, meal: &MealEntry) -> Result<()> {
        self.insert_meal(meal)
    }

    fn update_meal(&mut self, id: &str, meal: &MealEntry) -> Result<bool> {
        self.replace_meal(id, meal)
    }

    fn delete_meal(&mut self, id: &str) -> Result<bool> {
        self.remove_meal(id)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.conn
            .execute_batch("DELETE FROM profile; DELETE FROM meals;")?;
        tracing::info!("all data cleared");
        Ok(())
    }
}
