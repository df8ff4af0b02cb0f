pub mod column;
pub mod config;
pub mod template;
pub mod view;

pub mod error;

pub use error::DatatableError;
pub use template::{RenderContext, TemplateRenderer, TeraRenderer};
pub use view::{DatatableDefinition, DatatableView, RenderKind, Templates, ViewParts};
