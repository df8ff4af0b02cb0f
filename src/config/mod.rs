pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::ConfigLoader;
pub use schema::TableDefinition;
pub use validator::ConfigValidator;
