use crate::core::emitter::emit_names;
use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

pub struct ScaffoldEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScaffoldEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Loads every name before writing anything, so a missing input leaves `out` untouched.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::info!("Starting scaffold generation");

        let names = self.pipeline.extract()?;
        tracing::info!("Loaded {} names", names.len());

        let blocks = self.pipeline.transform(&names);
        let written = self.pipeline.load(&blocks, out)?;
        tracing::info!("Emitted {} declaration blocks", written);

        Ok(written)
    }

    pub fn list_names<W: Write>(&self, out: &mut W) -> Result<usize> {
        let names = self.pipeline.extract()?;
        tracing::info!("Listing {} names", names.len());
        emit_names(out, &names)
    }
}
