// src/lib.rs
//! Product-ideation workspace: a catalog of product concepts, a bounded
//! comparison set, view navigation, and AI-generated insight bound to
//! whatever is on screen.

pub mod config;
pub mod file;
pub mod insight;
pub mod search;
pub mod settings;
pub mod state;
pub mod ui;
pub mod app;

pub use config::{Product, ProductId, ProductMetrics, ProductStatus};
pub use state::{Workspace, WorkspaceSnapshot};
