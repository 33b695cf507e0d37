// Gzip artifact production

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Compress `src` into `dst` as a second, independent artifact; `src`
/// is retained. Both handles are scope-bound and released on every
/// exit path.
pub fn compress_file(src: &Path, dst: &Path) -> Result<(), String> {
    let mut input = File::open(src).map_err(|e| format!("cannot read {}: {e}", src.display()))?;
    let output = File::create(dst).map_err(|e| format!("cannot create {}: {e}", dst.display()))?;

    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)
        .map_err(|e| format!("cannot compress {}: {e}", src.display()))?;
    encoder
        .finish()
        .map_err(|e| format!("cannot finish {}: {e}", dst.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;

    use flate2::read::GzDecoder;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("out.csv");
        let dst = dir.path().join("out.csv.gz");
        let content = b"osm_id;confidence_score\r\n101;1.0\r\n".to_vec();
        fs::write(&src, &content).unwrap();

        compress_file(&src, &dst).unwrap();

        let mut decoder = GzDecoder::new(fs::File::open(&dst).unwrap());
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn test_source_file_is_retained() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("out.csv");
        let dst = dir.path().join("out.csv.gz");
        fs::write(&src, b"data").unwrap();

        compress_file(&src, &dst).unwrap();

        assert!(src.exists());
        assert!(dst.exists());
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempdir().unwrap();
        let err = compress_file(&dir.path().join("nope.csv"), &dir.path().join("out.gz"));
        assert!(err.is_err());
    }
}
