//! pdview-app - Application state and orchestration for pdview
//!
//! This crate contains the project details view model, its target handle
//! registry, the TEA message/update loop and the background services
//! (project reload, file watching, running targets).
//!
//! ## Public API
//!
//! ### View
//! - [`ProjectDetailsView`] - Project input, derived targets and mounted sections
//! - [`ProjectDetailsHandle`] - Imperative collapse/expand by target name
//! - [`TargetHandleRegistry`] - Name-keyed cells of mounted section handles
//! - [`ProjectDetailsCallbacks`] - Optional host callbacks
//!
//! ### TEA Pattern
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events/actions
//! - [`handler::update`] - State transitions
//! - [`UpdateAction`] - Side effects the event loop performs
//!
//! ### Services
//! - [`ProjectWatcher`] - Debounced watcher on the project document
//! - [`process::process_message`] - Update loop driver

pub mod actions;
pub mod callbacks;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod project_details;
pub mod registry;
pub mod state;
pub mod target_section;
pub mod watcher;

pub use callbacks::{
    Affordances, ProjectDetailsCallbacks, ProjectGraphRequest, TargetRequest,
};
pub use config::{IconMode, Settings, Variant};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{HostEvent, Message};
pub use project_details::ProjectDetailsView;
pub use registry::{HandleCell, ProjectDetailsHandle, TargetHandle, TargetHandleRegistry};
pub use state::{AppPhase, AppState, StatusLevel, StatusMessage};
pub use target_section::TargetSectionState;
pub use watcher::{ProjectWatcher, WatcherConfig};
