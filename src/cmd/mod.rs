pub mod analytics;
pub mod clear;
pub mod completions;
pub mod config;
pub mod init;
pub mod meal;
pub mod profile;
pub mod recommend;
pub mod show;
