pub mod ajax;
pub mod datatable;
pub mod features;
pub mod options;
pub mod templates;
pub mod truncate;

pub use ajax::{Ajax, AjaxMethod};
pub use datatable::{DatatableDefinition, DatatableView, LineFormatter, RenderKind, ViewParts};
pub use features::Features;
pub use options::{Options, SortDirection};
pub use templates::{Templates, TemplatesBuilder};
pub use truncate::{DEFAULT_TRUNCATE_CHARS, truncate};
