use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use crate::error::Result;

/// user id -> pool ids
pub type WatchlistMap = BTreeMap<String, BTreeSet<String>>;

/// Where watchlists live between restarts.
pub trait WatchlistPersistence: Send + Sync {
    fn load_all(&self) -> Result<WatchlistMap>;
    fn save_all(&self, watchlists: &WatchlistMap) -> Result<()>;
}

/// JSON file under the configured data directory.
pub struct LocalStorage {
    watchlist_path: PathBuf,
}

impl LocalStorage {
    pub const WATCHLIST_FILE: &'static str = "watchlists.json";

    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            watchlist_path: data_dir.join(Self::WATCHLIST_FILE),
        })
    }

    pub fn watchlist_path(&self) -> &Path {
        &self.watchlist_path
    }
}

impl WatchlistPersistence for LocalStorage {
    fn load_all(&self) -> Result<WatchlistMap> {
        let file = match File::open(&self.watchlist_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WatchlistMap::new()),
            Err(e) => return Err(e.into()),
        };
        let watchlists: WatchlistMap = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!("Loaded watchlists for {} users from {}",
            watchlists.len(), self.watchlist_path.display());
        Ok(watchlists)
    }

    fn save_all(&self, watchlists: &WatchlistMap) -> Result<()> {
        // write beside the target, then swap in
        let tmp_path = self.watchlist_path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, watchlists)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.watchlist_path)?;
        tracing::debug!("💾 Saved watchlists for {} users", watchlists.len());
        Ok(())
    }
}
