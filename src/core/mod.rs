//! Core domain logic for quell
//!
//! Contains the data model, the ports to external collaborators, and the
//! pure reconciliation/mutation services. Nothing in here performs I/O.

pub mod models;
pub mod ports;
pub mod services;
