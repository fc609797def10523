pub mod analytics;
pub mod meals;
pub mod profile;
pub mod recommend;
pub mod stats;
pub mod targets;
