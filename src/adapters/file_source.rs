use crate::core::loader::load_names;
use crate::core::{NameSource, RawName};
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileNameSource {
    path: PathBuf,
}

impl FileNameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NameSource for FileNameSource {
    fn load(&self) -> Result<Vec<RawName>> {
        load_names(&self.path)
    }
}
