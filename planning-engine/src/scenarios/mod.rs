//! Scenario management

pub mod book;

pub use book::ScenarioBook;
