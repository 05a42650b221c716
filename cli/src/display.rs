use degrees_core::{Algorithm, Dataset, PathStep};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding path from {} to {}",
        colors.person_name(&format!("\"{}\"", request.source_name)),
        colors.person_name(&format!("\"{}\"", request.target_name))
    );

    match request.config.algorithm {
        Algorithm::UniformCost => println!("⚙️  Using uniform-cost search"),
        Algorithm::Bfs => println!("⚙️  Using breadth-first search"),
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, dataset: &Dataset, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => {
            display_successful_path(&result.source, path, &result.display_options, dataset, colors);
        }
        None => {
            println!("{}", colors.error("Not connected."));
        }
    }

    if is_verbose {
        display_search_statistics(result.people_explored, result.search_duration, colors);
    }
}

fn display_successful_path(
    source: &str,
    path: &[PathStep],
    display_options: &Args,
    dataset: &Dataset,
    colors: &ColorScheme,
) {
    println!(
        "{} degrees of separation.",
        colors.number(&path.len().to_string())
    );

    // Show path flow only in quiet mode
    if display_options.quiet {
        let names: Vec<&str> = std::iter::once(source)
            .chain(path.iter().map(|(_, person_id)| person_id.as_str()))
            .map(|person_id| person_name(dataset, person_id))
            .collect();
        println!("{}", format_path_flow(&names, colors));
        return;
    }

    let mut previous = source;
    for (step_index, (movie_id, person_id)) in path.iter().enumerate() {
        let ids = display_options
            .show_ids
            .then_some((person_id.as_str(), movie_id.as_str()));

        let formatted_line = format_path_step(
            step_index + 1,
            person_name(dataset, previous),
            person_name(dataset, person_id),
            movie_title(dataset, movie_id),
            ids,
            colors,
        );

        println!("{}", formatted_line);
        previous = person_id.as_str();
    }
}

pub fn format_path_step(
    step_number: usize,
    previous_name: &str,
    person_name: &str,
    movie_title: &str,
    ids: Option<(&str, &str)>,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{}: {} and {} starred in {}",
        colors.step_number(&step_number.to_string()),
        colors.person_name(previous_name),
        colors.person_name(person_name),
        colors.movie_title(movie_title)
    );

    if let Some((person_id, movie_id)) = ids {
        formatted_line.push_str(&format!(
            " {}",
            colors.id(&format!("[person {}, movie {}]", person_id, movie_id))
        ));
    }

    formatted_line
}

pub fn format_path_flow(names: &[&str], colors: &ColorScheme) -> String {
    names
        .iter()
        .map(|name| colors.person_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn person_name<'a>(dataset: &'a Dataset, person_id: &'a str) -> &'a str {
    dataset
        .person(person_id)
        .map(|person| person.name.as_str())
        .unwrap_or(person_id)
}

fn movie_title<'a>(dataset: &'a Dataset, movie_id: &'a str) -> &'a str {
    dataset
        .movie(movie_id)
        .map(|movie| movie.title.as_str())
        .unwrap_or(movie_id)
}

fn display_search_statistics(people_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(people_explored)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
