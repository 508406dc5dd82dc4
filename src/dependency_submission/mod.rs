//! Translation of component-detection output into dependency manifests.
//!
//! Pure domain code: no I/O, no logging. Anything worth reporting is
//! returned as a [`domain::Diagnostic`] for the caller to forward.

pub mod domain;
pub mod services;
