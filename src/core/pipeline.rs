use crate::core::emitter::emit_blocks;
use crate::core::{ConfigProvider, DeclarationBlock, NameSource, Pipeline, RawName};
use crate::utils::error::Result;
use std::io::Write;

pub struct ScaffoldPipeline<S: NameSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: NameSource, C: ConfigProvider> ScaffoldPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: NameSource, C: ConfigProvider> Pipeline for ScaffoldPipeline<S, C> {
    fn extract(&self) -> Result<Vec<RawName>> {
        let names = self.source.load()?;
        if !self.config.skip_blank() {
            return Ok(names);
        }

        let before = names.len();
        let names: Vec<RawName> = names.into_iter().filter(|n| !n.is_blank()).collect();
        if names.len() < before {
            tracing::debug!("Skipped {} blank names", before - names.len());
        }
        Ok(names)
    }

    fn transform(&self, names: &[RawName]) -> Vec<DeclarationBlock> {
        let style = self.config.style();
        let template = self.config.template();

        names
            .iter()
            .map(|name| {
                let identifier = style.apply(name);
                if name.is_blank() {
                    tracing::warn!("Blank name produces degenerate identifier {}", identifier);
                }
                DeclarationBlock {
                    identifier,
                    fields: template.fields.clone(),
                    init_function: template.init_function,
                }
            })
            .collect()
    }

    fn load<W: Write>(&self, blocks: &[DeclarationBlock], out: &mut W) -> Result<usize> {
        emit_blocks(out, blocks)
    }
}
