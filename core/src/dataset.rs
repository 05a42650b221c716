use crate::error::{Error, Result};
use crate::graph::{Graph, build_graph};
use crate::string_normalization::clean_str;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, de::DeserializeOwned};
use std::path::Path;
use tracing::debug;

pub type PersonId = String;
pub type MovieId = String;

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<i32>,
    pub movies: FxHashSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    pub stars: FxHashSet<PersonId>,
}

#[derive(Deserialize)]
struct PersonRow {
    id: PersonId,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<i32>,
}

#[derive(Deserialize)]
struct MovieRow {
    id: MovieId,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

#[derive(Deserialize)]
struct StarRow {
    person_id: PersonId,
    movie_id: MovieId,
}

/// People, movies and the credits linking them, plus a normalised name index.
#[derive(Debug, Default)]
pub struct Dataset {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
    names: FxHashMap<String, Vec<PersonId>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `people.csv`, `movies.csv` and `stars.csv` from `directory`.
    ///
    /// Credits that point at an unknown person or movie are skipped.
    pub fn load(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::MissingDirectory(directory.to_path_buf()));
        }

        let mut dataset = Self::new();

        for row in read_rows::<PersonRow>(&directory.join(PEOPLE_FILE))? {
            dataset.add_person(row.id, row.name, row.birth);
        }

        for row in read_rows::<MovieRow>(&directory.join(MOVIES_FILE))? {
            dataset.add_movie(row.id, row.title, row.year);
        }

        let mut skipped_credits = 0usize;
        for row in read_rows::<StarRow>(&directory.join(STARS_FILE))? {
            if !dataset.add_star(&row.person_id, &row.movie_id) {
                skipped_credits += 1;
            }
        }

        debug!(
            people = dataset.person_count(),
            movies = dataset.movie_count(),
            skipped_credits,
            "loaded dataset from {:?}",
            directory
        );

        Ok(dataset)
    }

    /// Registers a person. Returns `false` and keeps the first record if the
    /// id is already known.
    pub fn add_person(
        &mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: Option<i32>,
    ) -> bool {
        let id = id.into();
        if self.people.contains_key(&id) {
            return false;
        }

        let name = name.into();
        self.names.entry(clean_str(&name)).or_default().push(id.clone());
        self.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                movies: FxHashSet::default(),
            },
        );
        true
    }

    pub fn add_movie(
        &mut self,
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: Option<i32>,
    ) -> bool {
        let id = id.into();
        if self.movies.contains_key(&id) {
            return false;
        }

        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year,
                stars: FxHashSet::default(),
            },
        );
        true
    }

    /// Links a person to a movie they starred in. Returns `false` when either
    /// side is unknown.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) else {
            return false;
        };

        person.movies.insert(movie_id.to_string());
        movie.stars.insert(person_id.to_string());
        true
    }

    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.people.get(person_id)
    }

    pub fn movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.get(movie_id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every `(movie_id, person_id)` credit shared with `person_id`, the
    /// person themself included.
    pub fn neighbors_for_person(&self, person_id: &str) -> FxHashSet<(MovieId, PersonId)> {
        let mut neighbors = FxHashSet::default();

        let Some(person) = self.people.get(person_id) else {
            return neighbors;
        };

        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star_id in &movie.stars {
                    neighbors.insert((movie_id.clone(), star_id.clone()));
                }
            }
        }

        neighbors
    }

    /// Ids of everyone whose normalised name matches, in load order.
    pub fn person_ids_for_name(&self, name: &str) -> &[PersonId] {
        self.names
            .get(&clean_str(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn build_graph(&self) -> Graph {
        build_graph(self.people.keys().map(String::as_str), |person_id| {
            self.neighbors_for_person(person_id)
        })
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::csv(path, e))?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| Error::csv(path, e))
}
