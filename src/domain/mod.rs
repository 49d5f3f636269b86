//! Domain Layer
//!
//! Pure pipeline concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Target descriptors
//! - `value_objects/` - Bundle names, platform, phases, failure policy
//! - `services/` - HTML rewrite rules
//! - `ports/` - Interfaces for process execution and file access

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
