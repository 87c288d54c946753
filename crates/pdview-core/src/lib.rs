//! # pdview-core - Core Domain Types
//!
//! Foundation crate for pdview. Provides the project model, project file
//! loading, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Project Model (`project`)
//! - [`Project`] - A project graph node (`name` + `data`)
//! - [`ProjectData`] - Root, type, tags and named targets
//! - [`TargetConfiguration`] - Opaque per-target configuration
//! - [`SourceMap`] - Provenance mapping passed through to target sections
//! - [`load_project()`], [`load_source_map()`] - Read documents from disk
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pdview_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod project;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use project::{
    capitalize_first, load_project, load_source_map, Project, ProjectData, SourceMap,
    TargetConfiguration, Targets,
};
