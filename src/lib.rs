//! Client library for the interview-preparation tracker API
//!
//! One generic resource client covers the CRUD-plus-actions surface every
//! tracked-item domain shares; thin per-domain bindings name their path
//! segment and extra actions. The [`dashboard`] module assembles the
//! summary view from three independent concurrent reads.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;
