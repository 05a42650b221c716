use degrees_core::{Algorithm, Dataset};
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub algorithm: Algorithm,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonPerson>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPerson {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,
    /// Movie shared with the previous person; absent for the first one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_movie: Option<JsonMovie>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonMovie {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
}

fn json_person(person_id: &str, via_movie: Option<&str>, dataset: &Dataset) -> JsonPerson {
    let person = dataset.person(person_id);

    JsonPerson {
        id: person_id.to_string(),
        name: person
            .map(|person| person.name.clone())
            .unwrap_or_else(|| person_id.to_string()),
        birth: person.and_then(|person| person.birth),
        via_movie: via_movie.map(|movie_id| {
            let movie = dataset.movie(movie_id);
            JsonMovie {
                id: movie_id.to_string(),
                title: movie
                    .map(|movie| movie.title.clone())
                    .unwrap_or_else(|| movie_id.to_string()),
                year: movie.and_then(|movie| movie.year),
            }
        }),
    }
}

pub fn create_json_output(result: &SearchResult, dataset: &Dataset) -> JsonOutput {
    let json_path = result.path.as_ref().map(|path| {
        std::iter::once(json_person(&result.source, None, dataset))
            .chain(path.iter().map(|(movie_id, person_id)| {
                json_person(person_id, Some(movie_id.as_str()), dataset)
            }))
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.source_name.clone(),
            to: result.target_name.clone(),
            options: JsonOptions {
                algorithm: result.config.algorithm,
            },
        },
        result: JsonResult {
            found: result.path.is_some(),
            degrees: result.path.as_ref().map(Vec::len),
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_explored: result.people_explored,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
