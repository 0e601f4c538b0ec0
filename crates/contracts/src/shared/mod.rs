pub mod actions;
pub mod config;
pub mod export;
pub mod forms;
pub mod indicators;
pub mod repository;
pub mod submission;
pub mod table;
