//! # pawmap-core
//!
//! The place detail panel: a single-threaded state machine that
//! loads a place with its reviews, keeps a local bookmark flag and
//! reconciles review mutations by refetching.
//!
//! All I/O happens behind the traits in [`gateways`].

pub mod entities {
    pub use pawmap_entities::{id::*, page::*, place::*, review::*, time::*, user::*};
}

mod error;
pub mod gateways;
pub mod panel;
pub mod session;
pub mod util;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
