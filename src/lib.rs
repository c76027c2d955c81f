//! Locality: rank marketplace listings by how close they are to the viewer.
//!
//! [`geo`] holds the classifier and its reference tables, [`viewer`] works
//! out where the viewer is, and [`server`] exposes both over HTTP.

pub mod config;
pub mod error;
pub mod geo;
pub mod server;
pub mod viewer;

pub use error::{LocalityError, Result};
