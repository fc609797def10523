use anyhow::Result;

use crate::models::meal::MealEntry;
use crate::models::profile::UserProfile;

use super::Store;

/// Vec-backed store with the same semantics as the SQLite one.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    profile: Option<UserProfile>,
    meals: Vec<MealEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(profile: Option<UserProfile>, meals: Vec<MealEntry>) -> Self {
        Self { profile, meals }
    }
}

impl Store for MemoryStore {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.profile.clone())
    }

    fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn list_meals(&self) -> Result<Vec<MealEntry>> {
        Ok(self.meals.clone())
    }

    fn add_meal(&mut self, meal: &MealEntry) -> Result<()> {
        self.meals.push(meal.clone());
        Ok(())
    }

    fn update_meal(&mut self, id: &str, meal: &MealEntry) -> Result<bool> {
        match self.meals.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                *slot = meal.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_meal(&mut self, id: &str) -> Result<bool> {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        Ok(self.meals.len() != before)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.profile = None;
        self.meals.clear();
        Ok(())
    }
}
