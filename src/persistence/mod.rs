use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::FlashdeckError;

const APP_NAME: &str = "flashdeck";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), FlashdeckError> {
    let file_path = data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let file_path = data_file_path(filename);

    if !file_path.exists() {
        return T::default();
    }

    let loaded = fs::read_to_string(&file_path)
        .map_err(FlashdeckError::from)
        .and_then(|json| Ok(serde_json::from_str::<T>(&json)?));

    match loaded {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
