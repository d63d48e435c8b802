//! repository
//!
//! Loads Advanced Output documents from a directory and merges their
//! screens into one deduplicated, stably-identified list.
//!
//! # Ordering
//!
//! Documents are processed in sorted filename order, and every screen of
//! file N is consumed before file N+1 is opened. Deduplication is
//! first-occurrence-wins and depends on that strict sequential order: a
//! later screen with an already-seen name is dropped, no merge and no
//! warning beyond a `--debug` note.
//!
//! # Identifiers
//!
//! Each kept screen receives a monotonically increasing `LumiverseId`
//! starting at 1, stamped into its element payload for downstream
//! identification. The counter lives on the repository value, not in a
//! global, so independent loads are isolated.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::screen::{Screen, LUMIVERSE_ID_ATTR};
use crate::doc::{self, DocError};
use crate::ui::output::{self, Verbosity};

/// Errors from repository loading. All are fatal.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("cannot read input directory {0}: {1}")]
    UnreadableDir(PathBuf, std::io::Error),

    #[error("no XML documents found in {0}")]
    NoDocuments(PathBuf),

    #[error("failed to parse {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocError,
    },
}

/// Screen store for one merge run.
#[derive(Debug, Default)]
pub struct ScreenRepository {
    screens: Vec<Screen>,
    seen_names: HashSet<String>,
    next_id: u32,
}

impl ScreenRepository {
    /// Load every eligible document under `dir` and return the merged,
    /// deduplicated screen list in discovery order.
    pub fn load_all(dir: &Path, verbosity: Verbosity) -> Result<Vec<Screen>, RepositoryError> {
        let mut repo = ScreenRepository {
            next_id: 1,
            ..Default::default()
        };

        for path in eligible_documents(dir)? {
            repo.load_document(&path, verbosity)?;
        }
        Ok(repo.screens)
    }

    fn load_document(&mut self, path: &Path, verbosity: Verbosity) -> Result<(), RepositoryError> {
        let root = doc::parse_file(path).map_err(|source| RepositoryError::Document {
            path: path.to_path_buf(),
            source,
        })?;
        let source_file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // A document without the screens section simply contributes nothing.
        let Some(screens) = root.descend(&["ScreenSetup", "screens"]) else {
            output::debug(
                format_args!("{}: no screen setup section, skipping", source_file),
                verbosity,
            );
            return Ok(());
        };

        for element in screens.children_named("DmxScreen") {
            let Some(mut screen) = Screen::from_element(element.clone(), &source_file) else {
                output::debug(
                    format_args!("{}: skipping unnamed DmxScreen", source_file),
                    verbosity,
                );
                continue;
            };
            if !self.seen_names.insert(screen.name.clone()) {
                output::debug(
                    format_args!(
                        "{}: dropping duplicate screen \"{}\"",
                        source_file, screen.name
                    ),
                    verbosity,
                );
                continue;
            }
            screen.assigned_id = self.next_id;
            self.next_id += 1;
            screen
                .element
                .set_attr(LUMIVERSE_ID_ATTR, &screen.assigned_id.to_string());
            self.screens.push(screen);
        }
        Ok(())
    }
}

/// XML files under `dir`, sorted by filename.
fn eligible_documents(dir: &Path) -> Result<Vec<PathBuf>, RepositoryError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| RepositoryError::UnreadableDir(dir.to_path_buf(), e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("xml"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(RepositoryError::NoDocuments(dir.to_path_buf()));
    }
    Ok(paths)
}
