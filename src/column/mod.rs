pub mod builder;
pub mod column;

pub use builder::ColumnBuilder;
pub use column::{Column, ColumnType};
