use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DuplicatePolicy, StorageConfig, WriteMode};
use crate::core::flatfile::{is_storable_text, parse_movies, serialize_catalog};
use crate::core::fs::{read_catalog_file, write_catalog_file};
use crate::models::Movie;
use crate::utils::{CatalogResult, Error};

fn check_text(field: &'static str, value: &str) -> CatalogResult<()> {
    if is_storable_text(value) {
        Ok(())
    } else {
        Err(Error::UnrepresentableField {
            field,
            value: value.to_string(),
        })
    }
}

/// Refuse movies whose text would not read back the same from the file.
fn check_storable(movie: &Movie) -> CatalogResult<()> {
    check_text("title", &movie.title)?;
    check_text("genre", &movie.genre)?;
    for actor in &movie.actors {
        check_text("actor name", &actor.name)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub duplicate_policy: DuplicatePolicy,
    pub write_mode: WriteMode,
}

impl From<&StorageConfig> for StoreOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            duplicate_policy: config.duplicate_policy,
            write_mode: config.write_mode,
        }
    }
}

/// In-memory movie catalog backed by a single flat file.
///
/// The file is read once in [`CatalogStore::open`] and rewritten in full after
/// every mutating call. Nothing else is expected to touch it meanwhile.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    options: StoreOptions,
    movies: Vec<Movie>,
}

impl CatalogStore {
    /// Open the catalog at `path`, loading it when the file exists.
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> CatalogResult<Self> {
        let mut store = Self {
            path: path.into(),
            options,
            movies: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> CatalogResult<()> {
        let Some(text) = read_catalog_file(&self.path)? else {
            info!("No catalog at '{}', starting empty", self.path.display());
            return Ok(());
        };
        self.movies = parse_movies(&text);
        info!(
            "Loaded {} movies from '{}'",
            self.movies.len(),
            self.path.display()
        );
        Ok(())
    }

    fn save(&self) -> CatalogResult<()> {
        let text = serialize_catalog(&self.movies);
        write_catalog_file(&self.path, &text, self.options.write_mode)?;
        debug!(
            "Saved {} movies to '{}'",
            self.movies.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append `movie` and save. Under [`DuplicatePolicy::Allow`] an existing id
    /// is not checked, so two movies may end up sharing it.
    pub fn create(&mut self, movie: Movie) -> CatalogResult<()> {
        check_storable(&movie)?;
        if self.options.duplicate_policy == DuplicatePolicy::Reject && self.find(movie.id).is_some()
        {
            return Err(Error::DuplicateMovie(movie.id));
        }
        debug!("Creating movie {} '{}'", movie.id, movie.title);
        self.movies.push(movie);
        self.save()
    }

    /// All movies, in insertion order.
    pub fn read_all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find(&self, id: i32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Replace the first movie with this id, then save. Returns whether a movie
    /// was replaced; an unknown id changes nothing but the file is still rewritten.
    pub fn update(&mut self, id: i32, movie: Movie) -> CatalogResult<bool> {
        check_storable(&movie)?;
        let replaced = match self.movies.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                *slot = movie;
                true
            }
            None => false,
        };
        if !replaced {
            debug!("No movie with id {} to update", id);
        }
        self.save()?;
        Ok(replaced)
    }

    /// Remove every movie with this id, then save. Returns how many were removed.
    pub fn delete(&mut self, id: i32) -> CatalogResult<usize> {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        let removed = before - self.movies.len();
        debug!("Deleted {} movie(s) with id {}", removed, id);
        self.save()?;
        Ok(removed)
    }
}
