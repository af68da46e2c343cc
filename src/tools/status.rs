//! Status Tool
//!
//! Runtime status of the Galactic Cocktails service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::build_info::BuildInfo;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Embedded data
    pub catalog_cocktails: usize,
    pub reference_prices: usize,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub favorites: Option<usize>,

    /// Suggestion backend, if one is configured
    pub suggestion_provider: Option<String>,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            database_path,
        }
    }

    /// Current status. `favorites` and `suggestion_provider` come from the caller,
    /// which owns the database and provider.
    pub fn get_status(&self, favorites: Option<usize>, suggestion_provider: Option<String>) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_cocktails: build_info.catalog_cocktails,
            reference_prices: build_info.reference_prices,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            favorites,
            suggestion_provider,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: std::process::id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database_file() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/galactic.db"));
        let status = tracker.get_status(Some(2), Some("fallback (rules)".into()));
        assert!(status.database_size_bytes.is_none());
        assert_eq!(status.favorites, Some(2));
        assert!(status.catalog_cocktails > 0);
        assert_eq!(status.process_id, std::process::id());
        assert!(status.started_at.ends_with('Z'));
    }
}
