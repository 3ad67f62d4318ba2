//! Two-level response cache: an in-memory map in front of bincode files on disk.

use crate::request::error::RequestError;
use crate::types::endpoint::CacheExpiry;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use xxhash_rust::xxh3;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// A cached response body together with the moment it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub url: String,
    /// Unix seconds.
    pub stored_at: i64,
    pub body: String,
}

impl CachedResponse {
    fn is_fresh(&self, expiry: CacheExpiry, now: i64) -> bool {
        match expiry {
            CacheExpiry::Never => true,
            CacheExpiry::Disabled => false,
            CacheExpiry::After(max_age) => {
                let age = now.saturating_sub(self.stored_at);
                age >= 0 && (age as u64) < max_age.as_secs()
            }
        }
    }
}

pub struct ResponseCache {
    cache_dir: PathBuf,
    memory: Mutex<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            memory: Mutex::new(HashMap::new()),
        }
    }

    /// File backing the entry for `url`. Names are the XXH3-64 digest of the
    /// full URL, so they stay the same across toolchains and processes.
    pub fn entry_path(&self, url: &str) -> PathBuf {
        self.cache_dir
            .join(format!("response-{:016x}.bin", xxh3::xxh3_64(url.as_bytes())))
    }

    /// Looks up a fresh body for `url`. Stale, unreadable or foreign entries are misses.
    pub async fn get(&self, url: &str, expiry: CacheExpiry) -> Option<String> {
        if expiry == CacheExpiry::Disabled {
            return None;
        }
        let now = Utc::now().timestamp();

        {
            let memory = self.memory.lock().await;
            if let Some(entry) = memory.get(url) {
                if entry.is_fresh(expiry, now) {
                    debug!("Memory cache hit for {}", url);
                    return Some(entry.body.clone());
                }
            }
        }

        let path = self.entry_path(url);
        let entry = match Self::read_entry(path.clone()).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                warn!("Ignoring unusable cache entry: {}", e);
                return None;
            }
        };
        if entry.url != url {
            debug!("Cache file {:?} belongs to a different URL", path);
            return None;
        }
        if !entry.is_fresh(expiry, now) {
            info!("Cache entry for {} is stale", url);
            return None;
        }
        info!("Cache hit for {} at {:?}", url, path);
        let body = entry.body.clone();
        self.memory.lock().await.insert(url.to_string(), entry);
        Some(body)
    }

    /// Stores `body` for `url` in memory and on disk.
    pub async fn put(&self, url: &str, body: &str) -> Result<(), RequestError> {
        let entry = CachedResponse {
            url: url.to_string(),
            stored_at: Utc::now().timestamp(),
            body: body.to_string(),
        };
        self.put_entry(entry).await
    }

    pub(crate) async fn put_entry(&self, entry: CachedResponse) -> Result<(), RequestError> {
        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| RequestError::CacheDirCreation(self.cache_dir.clone(), e))?;

        let path = self.entry_path(&entry.url);
        let dir = self.cache_dir.clone();
        let to_write = entry.clone();
        let written = path.clone();
        tokio::task::spawn_blocking(move || Self::write_entry(&dir, &written, &to_write))
            .await??;
        debug!("Cached response for {} to {:?}", entry.url, path);

        self.memory.lock().await.insert(entry.url.clone(), entry);
        Ok(())
    }

    async fn read_entry(path: PathBuf) -> Result<Option<CachedResponse>, RequestError> {
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RequestError::CacheRead(path, e)),
        };
        let (entry, _) =
            bincode::serde::decode_from_slice::<CachedResponse, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| RequestError::CacheDecode(path, Box::new(e)))?;
        Ok(Some(entry))
    }

    fn write_entry(dir: &Path, path: &Path, entry: &CachedResponse) -> Result<(), RequestError> {
        let bytes = bincode::serde::encode_to_vec(entry, BINCODE_CONFIG)
            .map_err(|e| RequestError::CacheEncode(Box::new(e)))?;
        let mut temp_file = NamedTempFile::new_in(dir)
            .map_err(|e| RequestError::CacheWrite(path.to_path_buf(), e))?;
        temp_file
            .write_all(&bytes)
            .map_err(|e| RequestError::CacheWrite(path.to_path_buf(), e))?;
        temp_file
            .persist(path)
            .map_err(|e| RequestError::CacheWrite(path.to_path_buf(), e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=1&longitude=2";
    const HOUR: CacheExpiry = CacheExpiry::After(Duration::from_secs(3_600));

    #[tokio::test]
    async fn test_put_then_get() -> Result<(), RequestError> {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path());

        assert_eq!(cache.get(URL, HOUR).await, None);
        cache.put(URL, "{\"latitude\":1.0}").await?;
        assert_eq!(
            cache.get(URL, HOUR).await.as_deref(),
            Some("{\"latitude\":1.0}")
        );
        assert!(cache.entry_path(URL).exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_entries_survive_a_new_cache_instance() -> Result<(), RequestError> {
        let dir = tempfile::tempdir().unwrap();
        ResponseCache::new(dir.path()).put(URL, "body").await?;

        let reopened = ResponseCache::new(dir.path());
        assert_eq!(reopened.get(URL, CacheExpiry::Never).await.as_deref(), Some("body"));
        assert_eq!(reopened.get("https://other", CacheExpiry::Never).await, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_entries_are_misses() -> Result<(), RequestError> {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path());
        cache
            .put_entry(CachedResponse {
                url: URL.to_string(),
                stored_at: Utc::now().timestamp() - 7_200,
                body: "old".to_string(),
            })
            .await?;

        assert_eq!(cache.get(URL, HOUR).await, None);
        assert_eq!(cache.get(URL, CacheExpiry::Never).await.as_deref(), Some("old"));
        Ok(())
    }

    #[tokio::test]
    async fn test_disabled_cache_never_hits() -> Result<(), RequestError> {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path());
        cache.put(URL, "body").await?;
        assert_eq!(cache.get(URL, CacheExpiry::Disabled).await, None);
        Ok(())
    }

    #[test]
    fn test_entry_names_are_pinned() {
        let cache = ResponseCache::new(Path::new("/cache"));
        assert_eq!(
            cache.entry_path(""),
            Path::new("/cache/response-2d06800538d394c2.bin")
        );
        assert_eq!(
            cache.entry_path("abc"),
            Path::new("/cache/response-78af5f94892f3950.bin")
        );

        let name = cache.entry_path(URL);
        assert_eq!(name, ResponseCache::new(Path::new("/cache")).entry_path(URL));
        assert_ne!(name, cache.entry_path(&format!("{URL}&hourly=rain")));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path());
        std::fs::write(cache.entry_path(URL), b"\x01\x02").unwrap();
        assert_eq!(cache.get(URL, CacheExpiry::Never).await, None);
    }
}
