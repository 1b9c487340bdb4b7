//! Pool Snapshot Loader
//!
//! Reads the static pool-reserve snapshot (`spec.md` §6) from disk. This is
//! the engine's one real fallible boundary — everything downstream treats a
//! loaded snapshot as already valid.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::EngineError;
use crate::pool::PoolRecord;

/// Load and parse a JSON array of pool records from `path`.
pub fn load_snapshot(path: &Path) -> Result<Vec<PoolRecord>, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::SnapshotUnreadable {
        path: path.display().to_string(),
        source,
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| EngineError::SnapshotMalformed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("arb-cycles-loader-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_is_unreadable_error() {
        let path = temp_path("does-not-exist.json");
        let result = load_snapshot(&path);
        assert!(matches!(result, Err(EngineError::SnapshotUnreadable { .. })));
    }

    #[test]
    fn malformed_json_is_malformed_error() {
        let path = temp_path("malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_snapshot(&path);
        assert!(matches!(result, Err(EngineError::SnapshotMalformed { .. })));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_array_loads_to_empty_vec() {
        let path = temp_path("empty.json");
        std::fs::write(&path, "[]").unwrap();
        let result = load_snapshot(&path).unwrap();
        assert!(result.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn well_formed_snapshot_loads_records() {
        let path = temp_path("ok.json");
        std::fs::write(
            &path,
            r#"[{
                "token0": {"id": "0xaaa"},
                "token1": {"id": "0xbbb"},
                "reserve0": "1000",
                "reserve1": "2000000",
                "reserveUSD": "4000000"
            }]"#,
        )
        .unwrap();
        let result = load_snapshot(&path).unwrap();
        assert_eq!(result.len(), 1);
        std::fs::remove_file(&path).ok();
    }
}
