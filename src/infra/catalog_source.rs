//! Loads the reference catalog and region rules from configuration.
//!
//! Lookup order: an explicit path, then `catalog.json` in the per-user config
//! directory, then the copy embedded in the binary.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Catalog, CatalogError, RegionResolver, RegionRule, VehicleRecord};
use crate::util::assets::{load_asset, CATALOG_ASSET};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "UsedCarAnalyzer";
const APP_NAME: &str = "UsedCarAnalyzer";
const CATALOG_FILENAME: &str = "catalog.json";

/// Environment variable naming an override catalog file.
pub const CATALOG_ENV: &str = "USED_CAR_CATALOG";

/// On-disk shape of the reference data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub regions: Vec<RegionRule>,
}

/// Catalog plus the region table built against it. Read-only once loaded.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub catalog: Catalog,
    pub regions: RegionResolver,
    pub source: CatalogSource,
}

impl ReferenceData {
    pub fn from_file(file: CatalogFile, source: CatalogSource) -> Result<Self, CatalogError> {
        let catalog = Catalog::new(file.vehicles)?;
        let regions = RegionResolver::new(file.regions, catalog.len())?;
        Ok(Self {
            catalog,
            regions,
            source,
        })
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            vehicles: self.catalog.records().to_vec(),
            regions: self.regions.rules().cloned().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => f.write_str("built-in catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("embedded asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("invalid reference data: {0}")]
    Invalid(#[from] CatalogError),
}

fn user_catalog_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CATALOG_FILENAME))
}

/// Picks where reference data should come from.
pub fn discover_source(explicit: Option<PathBuf>) -> CatalogSource {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit catalog");
        return CatalogSource::File(path);
    }

    match user_catalog_file() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "using user catalog");
            CatalogSource::File(path)
        }
        Some(path) => {
            debug!(path = %path.display(), "no user catalog, falling back to built-in");
            CatalogSource::Embedded
        }
        None => CatalogSource::Embedded,
    }
}

pub fn load_reference_data(source: CatalogSource) -> Result<ReferenceData, LoadError> {
    let file = match &source {
        CatalogSource::Embedded => {
            let bytes = load_asset(CATALOG_ASSET).ok_or(LoadError::MissingAsset(CATALOG_ASSET))?;
            serde_json::from_slice::<CatalogFile>(&bytes)?
        }
        CatalogSource::File(path) => read_catalog_file(path)?,
    };

    let data = ReferenceData::from_file(file, source)?;
    info!(
        source = %data.source,
        vehicles = data.catalog.len(),
        regions = data.regions.rules().count(),
        "loaded reference data"
    );
    Ok(data)
}

/// Built-in reference data.
pub fn load_embedded() -> Result<ReferenceData, LoadError> {
    load_reference_data(CatalogSource::Embedded)
}

fn read_catalog_file(path: &Path) -> Result<CatalogFile, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes reference data in the same format [`load_reference_data`] reads.
pub fn save_catalog_file(path: &Path, file: &CatalogFile) -> Result<(), LoadError> {
    let io_err = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(file)?;
    fs::write(path, json).map_err(io_err)?;
    info!(path = %path.display(), vehicles = file.vehicles.len(), "saved catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleType;

    #[test]
    fn test_embedded_catalog_loads() {
        let data = load_embedded().unwrap();
        assert_eq!(data.catalog.len(), 14);
        assert_eq!(data.source, CatalogSource::Embedded);

        let names: Vec<_> = data.regions.rules().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["California/West Coast", "Texas/South", "Florida"]);
        assert_eq!(data.catalog.list_records(Some(VehicleType::Suv)).len(), 5);
    }

    #[test]
    fn test_explicit_source_wins() {
        let path = PathBuf::from("/tmp/some-catalog.json");
        assert_eq!(
            discover_source(Some(path.clone())),
            CatalogSource::File(path)
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_reference_data(CatalogSource::File(PathBuf::from(
            "/definitely/not/here/catalog.json",
        )))
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
