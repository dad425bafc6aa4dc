//! # File I/O Module
//!
//! Store file operations with safety features:
//! - **Atomic saves**: write to .tmp, fsync, rename so a crash never leaves
//!   a half-written store
//! - **File locking**: prevent concurrent edits on shared drives
//! - **Version validation**: ensure schema compatibility
//!
//! ## File Format
//!
//! Stores are saved as `.fen` files containing JSON. Lock files use the
//! `.fen.lock` extension and hold metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quote_core::file_io::{save_store, load_store, FileLock};
//! use quote_core::project::ProjectStore;
//! use std::path::Path;
//!
//! let store = ProjectStore::new("Acme Fabricators", "sales@acme.example");
//! let path = Path::new("quotes.fen");
//!
//! let lock = FileLock::acquire(path, "sales@acme.example")?;
//! save_store(&store, path)?;
//! drop(lock); // releases the lock
//! # Ok::<(), quote_core::errors::QuoteError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::project::{ProjectStore, SCHEMA_VERSION};

/// Locks older than this are considered abandoned
const LOCK_MAX_AGE_HOURS: i64 = 24;

/// Lock file metadata stored in .fen.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Combines OS-level locking (via fs2) for process safety with a `.lock`
/// metadata file so other users can see who holds the store.
pub struct FileLock {
    store_path: PathBuf,
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock alive)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a store file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - lock acquired
    /// * `Err(QuoteError::FileLocked)` - another live process holds it
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> QuoteResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(QuoteError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Stale lock, take it over
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                QuoteError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            QuoteError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| QuoteError::SerializationError {
                reason: e.to_string(),
            })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            QuoteError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            QuoteError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            store_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check whether a store file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Get the path to the store file this lock protects
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The OS lock is released when _lock_file drops
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut lock_path = store_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> QuoteResult<LockInfo> {
    let mut file = File::open(lock_path).map_err(|e| {
        QuoteError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        QuoteError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| QuoteError::SerializationError {
        reason: e.to_string(),
    })
}

/// A lock is stale when its process is gone (same machine) or it has been
/// held past the maximum age.
fn is_lock_stale(info: &LockInfo) -> bool {
    if hostname().is_some_and(|machine| info.machine == machine) && !process_is_alive(info.pid) {
        return true;
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > LOCK_MAX_AGE_HOURS
}

#[cfg(unix)]
fn process_is_alive(pid: u32) -> bool {
    fs::metadata(format!("/proc/{}", pid)).is_ok()
}

#[cfg(windows)]
fn process_is_alive(pid: u32) -> bool {
    use std::process::Command;
    Command::new("tasklist")
        .args(["/FI", &format!("PID eq {}", pid), "/NH"])
        .output()
        .map(|output| {
            let stdout = String::from_utf8_lossy(&output.stdout);
            !stdout.contains("No tasks") && stdout.contains(&pid.to_string())
        })
        .unwrap_or(true)
}

#[cfg(not(any(unix, windows)))]
fn process_is_alive(_pid: u32) -> bool {
    // Cannot tell; rely on the age cutoff
    true
}

/// Save a store to a file with atomic write semantics.
///
/// Serialize → write `.tmp` → fsync → rename. An interrupted save leaves
/// the previous file intact.
pub fn save_store(store: &ProjectStore, path: &Path) -> QuoteResult<()> {
    let json =
        serde_json::to_string_pretty(store).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("fen.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        QuoteError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        QuoteError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        QuoteError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        QuoteError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a store from a file.
///
/// # Returns
///
/// * `Ok(ProjectStore)` - successfully loaded
/// * `Err(QuoteError::VersionMismatch)` - file schema is incompatible
/// * `Err(QuoteError::SerializationError)` - invalid JSON
/// * `Err(QuoteError::FileError)` - I/O error
pub fn load_store(path: &Path) -> QuoteResult<ProjectStore> {
    let mut file = File::open(path)
        .map_err(|e| QuoteError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| QuoteError::file_error("read", path.display().to_string(), e.to_string()))?;

    let store: ProjectStore =
        serde_json::from_str(&contents).map_err(|e| QuoteError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&store.meta.version)?;

    Ok(store)
}

/// Load a store, also reporting whether another user holds the lock.
pub fn load_store_with_lock_check(path: &Path) -> QuoteResult<(ProjectStore, Option<LockInfo>)> {
    let store = load_store(path)?;
    let lock_info = FileLock::check(path);
    Ok((store, lock_info))
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match; within 0.x, a newer minor is treated as
/// breaking.
fn validate_version(file_version: &str) -> QuoteResult<()> {
    let mismatch = || QuoteError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_store_path(name: &str) -> PathBuf {
        temp_dir().join(format!("fenestra_test_{}.fen", name))
    }

    #[test]
    fn test_lock_path_generation() {
        let store_path = Path::new("/path/to/quotes.fen");
        let lock_path = lock_path_for(store_path);
        assert_eq!(lock_path, Path::new("/path/to/quotes.fen.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_store_path("roundtrip");

        let store = ProjectStore::new("Test Fabricators", "test@example.com");
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded.meta.company, "Test Fabricators");
        assert_eq!(loaded.meta.prepared_by, "test@example.com");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_store_path("atomic");
        let tmp_path = path.with_extension("fen.tmp");

        let store = ProjectStore::new("Test", "tester");
        save_store(&store, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_store_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        assert_eq!(lock.store_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.7").is_ok());

        // Different major fails
        assert!(validate_version("1.0.0").is_err());
        // Newer minor within 0.x fails
        assert!(validate_version("0.2.0").is_err());
        // Garbage fails
        assert!(validate_version("not-a-version").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_store_path("lock_check");

        let store = ProjectStore::new("Test", "tester");
        save_store(&store, &path).unwrap();

        let (loaded, lock_info) = load_store_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.company, "Test");
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
