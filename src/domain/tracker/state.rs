//! Disk-backed registry of tracked profiles.

use super::TrackedProfile;
use crate::error::StoreError;
use crate::persist;
use std::collections::HashMap;
use std::path::PathBuf;

/// Name → profile map, mirrored to a JSON file the same way the metric
/// store is: mutations persist immediately, persist failures are logged and
/// swallowed, a missing or corrupt file loads as empty.
pub struct ProfileRegistry {
    path: Option<PathBuf>,
    profiles: HashMap<String, TrackedProfile>,
}

impl ProfileRegistry {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let profiles = match persist::read(&path) {
            Ok(profiles) => profiles,
            Err(err) if err.is_missing_file() => HashMap::new(),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load tracked profiles, starting empty"
                );
                HashMap::new()
            }
        };
        Self { path: Some(path), profiles }
    }

    pub fn in_memory() -> Self {
        Self { path: None, profiles: HashMap::new() }
    }

    /// Register (or replace) a profile under `name`.
    pub fn add(&mut self, name: impl Into<String>, profile: TrackedProfile) {
        self.profiles.insert(name.into(), profile);
        self.persist_quietly();
    }

    /// Remove a profile. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.profiles.remove(name).is_some();
        if removed {
            self.persist_quietly();
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&TrackedProfile> {
        self.profiles.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TrackedProfile)> {
        self.profiles.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// True when `post_id` has not been forwarded for `name` yet.
    pub fn is_new(&self, name: &str, post_id: &str) -> bool {
        match self.profiles.get(name) {
            Some(profile) => profile.last_post_id.as_deref() != Some(post_id),
            None => false,
        }
    }

    /// Record `post_id` as forwarded for `name`.
    pub fn mark_seen(&mut self, name: &str, post_id: impl Into<String>) {
        if let Some(profile) = self.profiles.get_mut(name) {
            profile.last_post_id = Some(post_id.into());
            self.persist_quietly();
        }
    }

    /// Write the registry to its backing file, surfacing the error.
    pub fn flush(&self) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => persist::write(path, &self.profiles),
            None => Ok(()),
        }
    }

    fn persist_quietly(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = persist::write(path, &self.profiles) {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to persist tracked profiles"
            );
        }
    }
}
