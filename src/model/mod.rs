//! Core data structures flowing through `af-metrics`.
//!
//! - [`atom`] – Decoded `ATOM` records and the [`Structure`](atom::Structure) of one model.
//! - [`profile`] – Per-chain backbone-proxy coordinates and pLDDT arrays.
//! - [`scores`] – pTM/ipTM scores with explicit absent states.
//! - [`metrics`] – Rows of the persistent metrics table.
//!
//! Atom records and chain profiles are transient, rebuilt for every model that is
//! read. Metrics rows are the only durable data; they live in the TSV tables
//! managed by the workflow layer.

pub mod atom;
pub mod metrics;
pub mod profile;
pub mod scores;
