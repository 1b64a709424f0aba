//! Domain logic for the Inkstone reading/publishing platform.
//!
//! Pure types and functions shared by the database and API layers:
//! error kinds, ID/timestamp aliases, the chapter publication state
//! machine, and dashboard time-window arithmetic. This crate has no
//! knowledge of the storage or transport layers.

pub mod error;
pub mod publishing;
pub mod stats;
pub mod types;
