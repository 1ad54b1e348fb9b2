use serde::{Deserialize, Serialize};

use crate::player::{DEFAULT_COUNTDOWN_SECS, MINIMIZE_DISTANCE, MINIMIZE_VELOCITY};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Error type for settings storage
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to open settings database: {0}")]
    Open(rusqlite::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings query failed: {0}")]
    Query(#[from] rusqlite::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("local storage failed: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "reelview.app_settings";

/// User settings persisted between launches. Playback state itself is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub autoplay_enabled: bool,
    #[serde(default = "default_countdown_secs")]
    pub autoplay_countdown_secs: u32,
    #[serde(default = "default_minimize_distance")]
    pub minimize_distance: f64,
    #[serde(default = "default_minimize_velocity")]
    pub minimize_velocity: f64,
    #[serde(default = "default_true")]
    pub start_muted: bool,
}

fn default_true() -> bool {
    true
}

fn default_countdown_secs() -> u32 {
    DEFAULT_COUNTDOWN_SECS
}

fn default_minimize_distance() -> f64 {
    MINIMIZE_DISTANCE
}

fn default_minimize_velocity() -> f64 {
    MINIMIZE_VELOCITY
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            autoplay_enabled: true,
            autoplay_countdown_secs: default_countdown_secs(),
            minimize_distance: default_minimize_distance(),
            minimize_velocity: default_minimize_velocity(),
            start_muted: true,
        }
    }
}

// Native storage: a key/value table in a local SQLite file.

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), DbError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    let settings_json = serde_json::to_string(&settings)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('app_settings', ?1)",
        [&settings_json],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    LocalStorage::set(SETTINGS_KEY, settings)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'app_settings'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => Ok(parse_settings(&json)?),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(AppSettings::default()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(AppSettings::default()),
        Err(err) => Err(err.into()),
    }
}

pub fn parse_settings(json: &str) -> Result<AppSettings, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let db_path = data_dir.join("reelview.db");
    rusqlite::Connection::open(&db_path).map_err(DbError::Open)
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> Option<std::path::PathBuf> {
    let dir = dirs::data_local_dir()?.join("reelview");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
