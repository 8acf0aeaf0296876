pub mod catalog_source;

pub use catalog_source::{
    discover_source, load_embedded, load_reference_data, save_catalog_file, CatalogFile,
    CatalogSource, LoadError, ReferenceData, CATALOG_ENV,
};
