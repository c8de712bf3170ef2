// crates/geoselect-core/src/loader/file.rs
use super::common_io;
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::traits::LookupSource;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serves lookup resources from a local directory.
///
/// Files are re-read on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The sample dataset bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(SelectorConfig::default_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LookupSource for FileSource {
    async fn fetch(&self, resource: &str) -> Result<String> {
        let path = self.root.join(resource);
        debug!(path = %path.display(), "reading lookup file");
        common_io::read_text(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use futures::executor::block_on;
    use std::fs;

    #[test]
    fn reads_fresh_contents_each_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        fs::write(&path, "[]").unwrap();

        let src = FileSource::new(dir.path());
        assert_eq!(block_on(src.fetch("countries.json")).unwrap(), "[]");

        fs::write(&path, r#"[{"code":"US","name":"United States"}]"#).unwrap();
        assert!(block_on(src.fetch("countries.json")).unwrap().contains("US"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let src = FileSource::new(dir.path());
        assert!(matches!(
            block_on(src.fetch("cities.json")),
            Err(GeoError::NotFound(_))
        ));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn falls_back_to_gzip_sibling() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let file = fs::File::create(dir.path().join("states.json.gz")).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(br#"{"US":[]}"#).unwrap();
        enc.finish().unwrap();

        let src = FileSource::new(dir.path());
        assert_eq!(block_on(src.fetch("states.json")).unwrap(), r#"{"US":[]}"#);
    }

    #[test]
    fn bundled_dataset_is_present() {
        let src = FileSource::bundled();
        let body = block_on(src.fetch("countries.json")).unwrap();
        assert!(body.contains("United States"));
    }
}
