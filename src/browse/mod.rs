//! Browse module - filtering, paging and selection over the catalog
//!
//! This module holds the UI-agnostic browsing logic. The terminal frontend
//! and the non-interactive `list`/`show` commands both drive the same
//! controller.
//!
//! # Architecture
//!
//! - `query`: Filter evaluator (title / author / genre predicates)
//! - `pager`: Page arithmetic for append-only reveals
//! - `selection`: Identifier lookup and detail projection
//! - `controller`: Owns results and pagination cursor for a session

pub mod controller;
pub mod pager;
pub mod query;
pub mod selection;

pub use controller::CatalogController;
pub use pager::Pager;
pub use query::{Choice, FilterQuery};
pub use selection::{DetailView, detail, resolve};
