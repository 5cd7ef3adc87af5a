//! User-provided film stocks scanned from a LUT directory.
//!
//! The custom film-emulation variant reads its stock list from a directory
//! of lookup-table files under the user's configuration root. The scan
//! happens once when the catalog is built and the result is read-only for
//! the rest of the session; files added afterwards show up on the next
//! start. A missing directory yields an empty catalog, not an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Environment variable overriding the stock directory location.
pub const STOCK_DIR_ENV: &str = "SCRIPTFX_LUT_DIR";

/// One scanned film stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmStock {
    /// Absolute path handed to the script library's `input_cube` command.
    pub value: String,
    /// Humanized display label derived from the file name.
    pub label: String,
}

/// The scanned, label-sorted stock catalog.
#[derive(Debug, Clone, Default)]
pub struct StockCatalog {
    stocks: Vec<FilmStock>,
}

impl StockCatalog {
    /// Scans `dir` for regular files and builds the catalog.
    ///
    /// Subdirectories, symlinked directories, and anything unreadable are
    /// skipped silently; an absent directory produces an empty catalog.
    pub fn scan(dir: &Path) -> Self {
        let mut stocks = Vec::new();
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("no film stock directory at {}: {err}", dir.display());
                return Self::default();
            }
        };
        for entry in entries.flatten() {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            stocks.push(FilmStock {
                value: entry.path().to_string_lossy().into_owned(),
                label: humanize(name),
            });
        }
        stocks.sort_by(|a, b| a.label.cmp(&b.label));
        Self { stocks }
    }

    /// Scans the default stock directory (see [`default_stock_dir`]).
    pub fn scan_default() -> Self {
        match default_stock_dir() {
            Some(dir) => Self::scan(&dir),
            None => Self::default(),
        }
    }

    /// All stocks, sorted by label.
    #[inline]
    pub fn stocks(&self) -> &[FilmStock] {
        &self.stocks
    }

    /// Whether the scan found anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Number of stocks found.
    #[inline]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// The first stock in label order, used as the variant default.
    pub fn first(&self) -> Option<&FilmStock> {
        self.stocks.first()
    }
}

/// Resolves the stock directory: the [`STOCK_DIR_ENV`] override when set,
/// otherwise `<user config dir>/scriptfx/luts`.
pub fn default_stock_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(STOCK_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "scriptfx").map(|dirs| dirs.config_dir().join("luts"))
}

/// Turns a file name into a display label: extension stripped, underscores
/// replaced with spaces.
pub fn humanize(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    stem.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = StockCatalog::scan(&dir.path().join("nope"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn scans_files_sorted_by_label() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("velvia_50.cube"), b"").expect("write");
        fs::write(dir.path().join("astia_100f.cube"), b"").expect("write");
        fs::create_dir(dir.path().join("subdir")).expect("mkdir");
        let catalog = StockCatalog::scan(dir.path());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stocks()[0].label, "astia 100f");
        assert_eq!(catalog.stocks()[1].label, "velvia 50");
        assert!(catalog.stocks()[0].value.ends_with("astia_100f.cube"));
    }

    #[test]
    fn humanize_strips_extension_and_underscores() {
        assert_eq!(humanize("kodak_gold_200.cube"), "kodak gold 200");
        assert_eq!(humanize("plain"), "plain");
        assert_eq!(humanize(".hidden"), ".hidden");
    }
}
