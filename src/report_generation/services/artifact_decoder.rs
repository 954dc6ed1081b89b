use crate::report_generation::domain::ArtifactDescriptor;
use crate::shared::security::validate_artifact_filename;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Extension of the sidecar file holding an artifact's Mermaid diagram
pub const DIAGRAM_EXTENSION: &str = "mmd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFileKind {
    /// Decoded binary payload
    Payload,
    /// Diagram text sidecar
    Diagram,
}

/// A file ready to be written to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub filename: String,
    pub kind: ArtifactFileKind,
    pub contents: Vec<u8>,
    /// Size reported by the service, else the decoded length
    pub reported_size: u64,
}

/// Files and warnings produced from one artifact descriptor
#[derive(Debug, Clone, Default)]
pub struct DecodedArtifact {
    pub files: Vec<ArtifactFile>,
    pub warnings: Vec<String>,
}

/// ArtifactDecoder service turning service artifact descriptors into files
pub struct ArtifactDecoder;

impl ArtifactDecoder {
    /// Decodes the artifact at position `index` of the response.
    ///
    /// A payload that fails to decode is dropped with a warning; the diagram
    /// sidecar of the same artifact is still produced. An unsafe filename
    /// drops the whole artifact.
    pub fn decode(index: usize, artifact: &ArtifactDescriptor) -> DecodedArtifact {
        let filename = artifact
            .filename
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("artifact-{}", index));

        let mut decoded = DecodedArtifact::default();
        if let Err(e) = validate_artifact_filename(&filename) {
            decoded
                .warnings
                .push(format!("Could not save artifact {}: {}", filename, e));
            return decoded;
        }

        if let Some(encoded) = artifact.content_base64.as_deref().filter(|s| !s.is_empty()) {
            match BASE64.decode(encoded.trim()) {
                Ok(contents) => {
                    let reported_size = artifact.size_bytes.unwrap_or(contents.len() as u64);
                    decoded.files.push(ArtifactFile {
                        filename: filename.clone(),
                        kind: ArtifactFileKind::Payload,
                        contents,
                        reported_size,
                    });
                }
                Err(e) => decoded
                    .warnings
                    .push(format!("Could not save artifact {}: {}", filename, e)),
            }
        }

        if let Some(diagram) = artifact.diagram.as_deref().filter(|s| !s.is_empty()) {
            decoded.files.push(ArtifactFile {
                filename: format!("{}.{}", filename, DIAGRAM_EXTENSION),
                kind: ArtifactFileKind::Diagram,
                contents: diagram.as_bytes().to_vec(),
                reported_size: diagram.len() as u64,
            });
        }

        decoded
    }
}
