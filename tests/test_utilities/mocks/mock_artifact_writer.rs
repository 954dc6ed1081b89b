use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tfstate_ssp::prelude::*;

/// Mock ArtifactWriter keeping written files in memory
#[derive(Default, Clone)]
pub struct MockArtifactWriter {
    pub files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    pub order: Arc<Mutex<Vec<String>>>,
}

impl MockArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.order.lock().unwrap().clone()
    }

    pub fn text(&self, filename: &str) -> String {
        let files = self.files.lock().unwrap();
        String::from_utf8(files[filename].clone()).unwrap()
    }

    pub fn bytes(&self, filename: &str) -> Vec<u8> {
        self.files.lock().unwrap()[filename].clone()
    }
}

impl ArtifactWriter for MockArtifactWriter {
    fn write_file(&self, filename: &str, contents: &[u8]) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .insert(filename.to_string(), contents.to_vec());
        self.order.lock().unwrap().push(filename.to_string());
        Ok(PathBuf::from("mock-output").join(filename))
    }
}
