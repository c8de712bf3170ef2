// crates/geoselect-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Reads `path` fully as UTF-8.
///
/// With `compact`, a missing `path` falls back to `path.gz`, gunzipped on
/// the fly.
pub fn read_text(path: &Path) -> Result<String> {
    let mut reader = open_stream(path)?;
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    Ok(body)
}

fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    if path.is_file() {
        let file = File::open(path)?;
        return Ok(Box::new(BufReader::new(file)));
    }

    #[cfg(feature = "compact")]
    {
        let gz = gz_path(path);
        if gz.is_file() {
            let file = File::open(&gz)?;
            return Ok(Box::new(GzDecoder::new(BufReader::new(file))));
        }
    }

    Err(GeoError::NotFound(format!(
        "Lookup data not found at {}",
        path.display()
    )))
}

#[cfg(feature = "compact")]
fn gz_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    std::path::PathBuf::from(name)
}
