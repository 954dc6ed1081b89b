/// Network adapters for external API calls
mod evidence_client;

pub use evidence_client::{EvidenceApiClient, DEFAULT_API_URL};
