use crate::error::Result;

pub mod context;
pub mod engine;
pub mod filters;

pub use context::RenderContext;
pub use engine::TeraRenderer;

/// Capability for turning a template identifier plus a view context into markup.
///
/// Implementations are shared between per-request views, so they must be
/// `Send + Sync`. Failures are returned as-is to the caller of
/// `DatatableView::render`.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String>;
}
