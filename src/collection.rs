use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::seed::SeedEntry;
use crate::{Movie, Result};

/// Result of adding a movie to a [`MovieCollection`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The movie was inserted.
    Added,
    /// A movie with the same name was already stored; nothing changed.
    AlreadyExists,
}

impl AddOutcome {
    /// Returns `true` when the name was already taken and nothing was added.
    pub fn already_exists(self) -> bool {
        self == AddOutcome::AlreadyExists
    }
}

/// An in-memory collection of movies keyed by name.
///
/// Names are case-sensitive keys. Listing order is unspecified and may
/// differ from insertion order.
#[derive(Debug, Default)]
pub struct MovieCollection {
    movies: HashMap<String, Movie>,
}

impl MovieCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding the given seed entries.
    ///
    /// Later entries with an already-seen name are skipped.
    pub fn from_seed(entries: impl IntoIterator<Item = SeedEntry>) -> Result<Self> {
        let mut collection = Self::new();
        for entry in entries {
            let name = entry.name.clone();
            let outcome =
                collection.add(entry.name, entry.category, entry.release_date, entry.runtime)?;
            if outcome.already_exists() {
                warn!("Skipping duplicate seed entry '{}'", name);
            }
        }
        info!("Seeded collection with {} movies", collection.len());
        Ok(collection)
    }

    /// Adds a movie built from the given fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any field is empty. The store itself
    /// performs no further validation.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        release_date: NaiveDate,
        runtime: impl Into<String>,
    ) -> Result<AddOutcome> {
        let movie = Movie::new(name, category, release_date, runtime)?;
        Ok(self.insert(movie))
    }

    /// Inserts an already constructed movie unless its name is taken.
    pub fn insert(&mut self, movie: Movie) -> AddOutcome {
        if self.movies.contains_key(movie.name()) {
            debug!("'{}' already exists", movie.name());
            return AddOutcome::AlreadyExists;
        }
        debug!("Adding '{}'", movie.name());
        self.movies.insert(movie.name().to_owned(), movie);
        AddOutcome::Added
    }

    /// Removes a movie by name. Returns `false` if it was not stored.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.movies.remove(name).is_some();
        debug!("Remove '{}': {}", name, removed);
        removed
    }

    /// Empties the collection. Returns `false` if it was already empty.
    pub fn clear_all(&mut self) -> bool {
        if self.movies.is_empty() {
            return false;
        }
        debug!("Clearing {} movies", self.movies.len());
        self.movies.clear();
        true
    }

    /// Looks up a movie by name.
    pub fn get(&self, name: &str) -> Option<&Movie> {
        self.movies.get(name)
    }

    /// Returns `true` if a movie with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.movies.contains_key(name)
    }

    /// Number of stored movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns `true` if no movies are stored.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Describes a movie, or reports that it was not found.
    pub fn details(&self, name: &str) -> String {
        match self.movies.get(name) {
            Some(movie) => movie.to_string(),
            None => format!("Movie not found: {name}"),
        }
    }

    /// Iterates over the names of all stored movies, in no particular order.
    pub fn list_all(&self) -> impl Iterator<Item = &str> + '_ {
        self.movies.keys().map(String::as_str)
    }

    /// Iterates over the names of movies whose category matches, ignoring
    /// case. Order is unspecified.
    pub fn list_by_category(&self, category: &str) -> impl Iterator<Item = &str> + '_ {
        let wanted = category.to_owned();
        self.movies
            .values()
            .filter(move |movie| eq_ignore_case(movie.category(), &wanted))
            .map(Movie::name)
    }
}

/// Compares two strings character by character, treating characters as
/// equal when their upper or lower case mappings agree. A character never
/// matches a sequence of several, so `ß` does not equal `SS`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
        })
}
