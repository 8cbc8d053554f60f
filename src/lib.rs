#![deny(missing_docs)]

//! An in-memory movie collection with a text-menu front end.
//!
//! Movies are kept in a [`MovieCollection`] keyed by name. The
//! [`Dispatcher`] reads menu commands line by line and applies them to the
//! collection it owns.

mod collection;
mod command;
mod dispatcher;
mod error;
mod movie;
/// Start-up records for a fresh collection.
pub mod seed;

pub use collection::{AddOutcome, MovieCollection};
pub use command::Command;
pub use dispatcher::Dispatcher;
pub use error::{MovieError, Result};
pub use movie::Movie;
pub use seed::{default_seed, load_seed, SeedEntry};
