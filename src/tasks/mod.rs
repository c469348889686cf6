//! Background Tasks Module
//!
//! # Tasks
//! - Maintenance: expires cached avatars

mod maintenance;

pub use maintenance::{run_maintenance, spawn_maintenance_task};
