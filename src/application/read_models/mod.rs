//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod asset_projection;
pub mod report_read_model;
pub mod report_read_model_builder;

pub use asset_projection::{document_projection, tabular_projection};
pub use report_read_model::{ReportMetadataView, ReportReadModel, UNKNOWN_GROUP};
pub use report_read_model_builder::ReportReadModelBuilder;
