//! Domain layer: the dependency tree model, package URLs and the flattening logic.
//!
//! Nothing in here performs I/O or reads process state.
pub mod domain;
pub mod services;
