//! Input discovery: use the explicit path when it exists, otherwise pick
//! the newest export matching the configured filename patterns across the
//! candidate directories.

use insights_core::config::DiscoveryConfig;
use insights_core::{InsightsError, InsightsResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::info;

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

fn candidate_dirs(search_dir: Option<&Path>, cfg: &DiscoveryConfig) -> Vec<PathBuf> {
    match search_dir {
        Some(dir) => vec![dir.to_path_buf()],
        None => match home_dir() {
            Some(home) => cfg.search_dirs.iter().map(|d| home.join(d)).collect(),
            None => Vec::new(),
        },
    }
}

fn matches(name: &str, cfg: &DiscoveryConfig) -> bool {
    name.ends_with(".csv") && cfg.patterns.iter().any(|p| name.starts_with(p.as_str()))
}

pub fn resolve_input(
    explicit: Option<&Path>,
    search_dir: Option<&Path>,
    cfg: &DiscoveryConfig,
) -> InsightsResult<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    let dirs = candidate_dirs(search_dir, cfg);
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for dir in &dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if !matches(name, cfg) {
                continue;
            }
            let modified = match entry.metadata().and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(_) => continue,
            };
            if newest.as_ref().is_none_or(|(t, _)| modified > *t) {
                newest = Some((modified, path));
            }
        }
    }

    match newest {
        Some((_, path)) => {
            info!(path = %path.display(), "using latest input file");
            Ok(path)
        }
        None => {
            let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
            Err(InsightsError::Discovery(searched.join(", ")))
        }
    }
}
