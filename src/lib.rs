//! Emergency Resource Directory (resdir)
//!
//! Searchable list of emergency resources: firefighter units, medical
//! supplies and shelters. The reusable core is [`filter::FilterableList`];
//! the rest hosts it in a terminal UI.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod output;
pub mod state;
pub mod view;
