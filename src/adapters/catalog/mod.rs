//! Catalog adapters implementing the `CatalogSource` port.

mod builtin;
mod yaml_catalog;

pub use builtin::BuiltinCatalog;
pub use yaml_catalog::YamlCatalogSource;
