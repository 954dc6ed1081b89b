mod artifact_decoder;
mod assessment_reshaper;
mod asset_normalizer;
mod metadata_generator;
mod state_decoder;

pub use artifact_decoder::{ArtifactDecoder, ArtifactFile, ArtifactFileKind, DecodedArtifact};
pub use assessment_reshaper::{AssessmentReshaper, SelectedFramework};
pub use asset_normalizer::AssetNormalizer;
pub use metadata_generator::MetadataGenerator;
pub use state_decoder::{DecodedState, StateDecoder};
