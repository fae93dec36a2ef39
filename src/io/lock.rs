use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory file lock serializing writes to the store directory.
///
/// Uses platform-native flock (Unix) so the TUI and CLI processes never
/// interleave writes to the same key. Released on drop.
pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not acquire lock on {path}: another spot process may be writing")]
    Timeout { path: PathBuf },
}

impl StoreLock {
    /// Acquire an advisory lock on the store directory.
    /// Blocks up to `timeout` waiting for the lock.
    pub fn acquire(store_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let lock_path = store_dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::Create {
                path: lock_path.clone(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    return Ok(StoreLock {
                        _file: file,
                        path: lock_path,
                    });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => {
                    return Err(LockError::Timeout { path: lock_path });
                }
            }
        }
    }

    /// Acquire with the default timeout (2 seconds; saves are small).
    pub fn acquire_default(store_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(store_dir, Duration::from_secs(2))
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // flock is released when the file handle closes; the file itself is
        // best-effort cleanup
        let _ = fs::remove_file(&self.path);
    }
}

/// Try to acquire an exclusive flock on the file (non-blocking)
#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    // Advisory only on non-Unix platforms
    Ok(())
}
