use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    sync::OnceLock,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::TangoError;

const APP_NAME: &str = "tango";

/// Set once from the command line; otherwise the platform data dir is used.
static DATA_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

pub fn set_app_data_dir(path: PathBuf) {
    if DATA_DIR_OVERRIDE.set(path).is_err() {
        warn!("Data directory already set, ignoring override");
    }
}

pub fn get_app_data_dir() -> PathBuf {
    let app_dir = match DATA_DIR_OVERRIDE.get() {
        Some(dir) => dir.clone(),
        None => match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join(APP_NAME),
            None => PathBuf::from("."),
        },
    };
    let _ = fs::create_dir_all(&app_dir);
    app_dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TangoError> {
    write_json(data, &get_data_file_path(filename))
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T, TangoError> {
    read_json(&get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

fn write_json<T: Serialize>(data: &T, file_path: &Path) -> Result<(), TangoError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    info!("Data saved to: {}", file_path.display());
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> Result<T, TangoError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tango-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_missing_file_gives_default() {
        let data: BTreeMap<String, u32> = read_json(&scratch_file("missing.json")).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_written_file_reads_back() {
        let path = scratch_file("written.json");
        let data = BTreeMap::from([("front".to_string(), 1u32)]);

        write_json(&data, &path).unwrap();
        let loaded: BTreeMap<String, u32> = read_json(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = scratch_file("corrupt.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<BTreeMap<String, u32>, _> = read_json(&path);
        assert!(matches!(result, Err(TangoError::Json(_))));
    }
}
