//! Catalogs stored as one text file per node signature.
//!
//! The catalog for signature `n_m_g1_g2…[_E]` lives in
//! `<root>/n_m_g1_g2…[_E].dat` and lists one hex code per line, in catalog
//! order. Surrounding whitespace is trimmed and blank lines are skipped.
//!
//! ```text
//! share/logic/
//! ├── 1_1_1.dat
//! ├── 2_1_2.dat
//! └── 2_2_1_1_E.dat
//! ```

use std::io;
use std::path::{Path, PathBuf};

use regnet_parameter::{BoxError, CatalogProvider, NodeSignature};

use crate::LoadError;

/// A [`CatalogProvider`] reading `<root>/<signature>.dat` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    /// Provider rooted at `root`. The directory is not checked until a
    /// catalog is fetched.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The resource directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the catalog for `signature`.
    pub fn resource_path(&self, signature: &NodeSignature) -> PathBuf {
        self.root.join(format!("{signature}.dat"))
    }

    /// Read the catalog for `signature`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingResource`] when the file does not exist
    /// and [`LoadError::Io`] when it cannot be read.
    pub fn load(&self, signature: &NodeSignature) -> Result<Vec<String>, LoadError> {
        let path = self.resource_path(signature);
        tracing::debug!(path = %path.display(), "reading logic resource");
        let text = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::MissingResource { path: path.clone() },
            _ => LoadError::Io {
                path: path.clone(),
                source,
            },
        })?;
        Ok(parse_codes(&text))
    }
}

impl CatalogProvider for DirectoryCatalog {
    fn fetch_catalog(&self, signature: &NodeSignature) -> Result<Vec<String>, BoxError> {
        Ok(self.load(signature)?)
    }
}

fn parse_codes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_path_uses_signature_stem() {
        let catalogs = DirectoryCatalog::new("/data/logic");
        let sig = NodeSignature::new(2, 1, vec![2], false);
        assert_eq!(
            catalogs.resource_path(&sig),
            PathBuf::from("/data/logic/2_1_2.dat")
        );
        let sig = NodeSignature::new(3, 2, vec![1, 2], true);
        assert_eq!(
            catalogs.resource_path(&sig),
            PathBuf::from("/data/logic/3_2_1_2_E.dat")
        );
    }

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let codes = parse_codes("0\r\n 8 \n\nC\nE\n");
        assert_eq!(codes, ["0", "8", "C", "E"]);
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = DirectoryCatalog::new(dir.path());
        let sig = NodeSignature::new(1, 1, vec![1], false);
        let err = catalogs.load(&sig).unwrap_err();
        match &err {
            LoadError::MissingResource { path } => assert!(path.ends_with("1_1_1.dat")),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(catalogs.fetch_catalog(&sig).is_err());
    }

    #[test]
    fn reads_catalog_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2_1_2_E.dat"), "F\n3\nB\n").unwrap();
        let catalogs = DirectoryCatalog::new(dir.path());
        let sig = NodeSignature::new(2, 1, vec![2], true);
        assert_eq!(catalogs.fetch_catalog(&sig).unwrap(), ["F", "3", "B"]);
    }
}
