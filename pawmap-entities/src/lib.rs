#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # pawmap-entities
//!
//! Reusable, agnostic domain entities for the pawmap place panel.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod page;
pub mod place;
pub mod review;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
