pub mod emitter;
pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod template;
pub mod transform;

pub use crate::domain::model::{
    DeclarationBlock, FieldDecl, IdentifierStyle, RawName, StructIdentifier, Template,
};
pub use crate::domain::ports::{ConfigProvider, NameSource, Pipeline};
pub use crate::utils::error::Result;
