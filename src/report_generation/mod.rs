//! Report generation core: state decoding, asset normalization and
//! assessment reshaping. Everything here is pure and in-memory.

pub mod domain;
pub mod extractors;
pub mod services;
