use std::fmt;

use chrono::NaiveDate;

use crate::{MovieError, Result};

/// A single catalog entry.
///
/// Every field is non-empty for any live `Movie`; construction and the
/// setters reject empty text with [`MovieError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    name: String,
    category: String,
    release_date: NaiveDate,
    runtime: String,
}

impl Movie {
    /// Creates a movie, validating name, category and runtime in that order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first empty field.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        release_date: NaiveDate,
        runtime: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: non_empty("name", name.into())?,
            category: non_empty("category", category.into())?,
            release_date,
            runtime: non_empty("runtime", runtime.into())?,
        })
    }

    /// The name, which is also the collection key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-form category label, e.g. `Fantasy`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The release date.
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// The runtime as entered, e.g. `152`.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = non_empty("name", name.into())?;
        Ok(())
    }

    /// Replaces the category.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<()> {
        self.category = non_empty("category", category.into())?;
        Ok(())
    }

    /// Replaces the release date.
    pub fn set_release_date(&mut self, release_date: NaiveDate) {
        self.release_date = release_date;
    }

    /// Replaces the runtime.
    pub fn set_runtime(&mut self, runtime: impl Into<String>) -> Result<()> {
        self.runtime = non_empty("runtime", runtime.into())?;
        Ok(())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Category: {}, Release Date: {}, Run Time: {} minutes",
            self.name, self.category, self.release_date, self.runtime
        )
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String> {
    if value.is_empty() {
        Err(MovieError::InvalidArgument { field })
    } else {
        Ok(value)
    }
}
