use crate::domain::model::{DeclarationBlock, IdentifierStyle, RawName, Template};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub trait NameSource {
    fn load(&self) -> Result<Vec<RawName>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn style(&self) -> &IdentifierStyle;
    fn template(&self) -> &Template;
    fn skip_blank(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<RawName>>;
    fn transform(&self, names: &[RawName]) -> Vec<DeclarationBlock>;
    fn load<W: Write>(&self, blocks: &[DeclarationBlock], out: &mut W) -> Result<usize>;
}
