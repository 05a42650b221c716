use degrees_core::{Algorithm, Dataset, Graph, PathStep, PathfindingConfig, PersonId, find_path};
use std::io::{BufRead, Write};

use crate::args::Args;

pub struct SearchRequest {
    pub source: PersonId,
    pub target: PersonId,
    pub source_name: String,
    pub target_name: String,
    pub config: PathfindingConfig,
    pub search_args: Args,
}

pub struct SearchResult {
    pub path: Option<Vec<PathStep>>,
    pub people_explored: usize,
    pub search_duration: f64,
    pub source: PersonId,
    pub source_name: String,
    pub target_name: String,
    pub config: PathfindingConfig,
    pub display_options: Args,
}

fn io_error(error: std::io::Error) -> String {
    format!("Failed to read input: {}", error)
}

fn not_found(name: &str) -> String {
    format!("Person '{}' not found.", name)
}

pub fn prompt_for_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, String> {
    write!(output, "Name: ").map_err(io_error)?;
    output.flush().map_err(io_error)?;

    let mut name = String::new();
    input.read_line(&mut name).map_err(io_error)?;
    Ok(name.trim().to_string())
}

/// Resolves a typed name to a person id, asking which one is meant when
/// several people share the name.
pub fn person_id_for_name<R: BufRead, W: Write>(
    name: &str,
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId, String> {
    match dataset.person_ids_for_name(name) {
        [] => Err(not_found(name)),
        [person_id] => Ok(person_id.clone()),
        candidates => {
            writeln!(output, "Which '{}'?", name).map_err(io_error)?;
            for person_id in candidates {
                if let Some(person) = dataset.person(person_id) {
                    let birth = person.birth.map(|year| year.to_string()).unwrap_or_default();
                    writeln!(
                        output,
                        "ID: {}, Name: {}, Birth: {}",
                        person_id, person.name, birth
                    )
                    .map_err(io_error)?;
                }
            }

            write!(output, "Intended Person ID: ").map_err(io_error)?;
            output.flush().map_err(io_error)?;

            let mut answer = String::new();
            input.read_line(&mut answer).map_err(io_error)?;
            let answer = answer.trim();

            candidates
                .iter()
                .find(|person_id| person_id.as_str() == answer)
                .cloned()
                .ok_or_else(|| not_found(name))
        }
    }
}

fn resolve_person<R: BufRead, W: Write>(
    name: Option<&str>,
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<(PersonId, String), String> {
    let query = match name {
        Some(name) => name.to_string(),
        None => prompt_for_name(input, output)?,
    };

    let person_id = person_id_for_name(&query, dataset, input, output)?;
    let display_name = dataset
        .person(&person_id)
        .map(|person| person.name.clone())
        .unwrap_or(query);

    Ok((person_id, display_name))
}

pub fn create_search_request<R: BufRead, W: Write>(
    args: Args,
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<SearchRequest, String> {
    let (source, source_name) = resolve_person(args.from.as_deref(), dataset, input, output)?;
    let (target, target_name) = resolve_person(args.to.as_deref(), dataset, input, output)?;

    Ok(SearchRequest {
        source,
        target,
        source_name,
        target_name,
        config: PathfindingConfig::new(Algorithm::from(args.algorithm.as_str())),
        search_args: args,
    })
}

pub fn execute_search(request: SearchRequest, graph: &Graph) -> SearchResult {
    let (path, people_explored, search_duration) =
        find_path(graph, &request.source, &request.target, &request.config);

    SearchResult {
        path,
        people_explored,
        search_duration,
        source: request.source,
        source_name: request.source_name,
        target_name: request.target_name,
        config: request.config,
        display_options: request.search_args,
    }
}
