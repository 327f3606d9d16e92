use std::fmt;

use chrono::NaiveDate;

/// A catalog entry. The movie owns its actors outright; they are only ever
/// replaced together with the movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
    pub duration_hours: f64,
    pub genre: String,
    pub actors: Vec<Actor>,
}

/// Actor ids are only unique within the parent movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub is_lead: bool,
    pub salary: f64,
}

impl Movie {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        release_date: NaiveDate,
        duration_hours: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            release_date,
            duration_hours,
            genre: genre.into(),
            actors: Vec::new(),
        }
    }

    pub fn with_actors(mut self, actors: Vec<Actor>) -> Self {
        self.actors = actors;
        self
    }
}

impl Actor {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        birth_date: NaiveDate,
        is_lead: bool,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
            is_lead,
            salary,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Release date: {}", self.release_date)?;
        writeln!(f, "Duration: {} hours", self.duration_hours)?;
        writeln!(f, "Genre: {}", self.genre)?;
        writeln!(f, "Actors:")?;
        if self.actors.is_empty() {
            return writeln!(f, "  No actors registered.");
        }
        for actor in &self.actors {
            write!(f, "{actor}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  - ID: {}", self.id)?;
        writeln!(f, "    Name: {}", self.name)?;
        writeln!(f, "    Birth date: {}", self.birth_date)?;
        writeln!(f, "    Lead: {}", self.is_lead)?;
        writeln!(f, "    Salary: {}", self.salary)
    }
}
