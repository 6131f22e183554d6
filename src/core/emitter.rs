use crate::core::template::render_block;
use crate::core::{DeclarationBlock, RawName};
use crate::utils::error::Result;
use std::io::Write;

/// Writes every block in order and returns how many were written.
pub fn emit_blocks<W: Write>(out: &mut W, blocks: &[DeclarationBlock]) -> Result<usize> {
    for block in blocks {
        tracing::debug!("Emitting {}", block.identifier);
        out.write_all(render_block(block).as_bytes())?;
    }
    out.flush()?;
    Ok(blocks.len())
}

pub fn emit_names<W: Write>(out: &mut W, names: &[RawName]) -> Result<usize> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    out.flush()?;
    Ok(names.len())
}
