use degrees_core::dataset::{MOVIES_FILE, PEOPLE_FILE, STARS_FILE};
use degrees_core::{Dataset, Graph};
use indicatif::{ProgressBar, ProgressStyle};
use std::{error::Error, path::PathBuf, time::Duration};
use tracing::info;

pub const DATA_DIR_ENV: &str = "DEGREES_DATA";
pub const DEFAULT_DATA_DIR: &str = "large";

pub struct DegreesApp {
    pub data_dir: PathBuf,
}

impl DegreesApp {
    pub fn new(data_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let data_dir = data_path
            .or_else(|| std::env::var(DATA_DIR_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        if !data_dir.exists() {
            return Err(format!("Data path does not exist: {:?}", data_dir).into());
        }

        // Verify data files exist
        for file_name in [PEOPLE_FILE, MOVIES_FILE, STARS_FILE] {
            if !data_dir.join(file_name).exists() {
                return Err(format!(
                    "Data files not found in {:?}. Expected {}, {} and {}",
                    data_dir, PEOPLE_FILE, MOVIES_FILE, STARS_FILE
                )
                .into());
            }
        }

        Ok(Self { data_dir })
    }

    /// Loads the CSV tables and builds the co-starring graph.
    pub fn load_data(&self, show_progress: bool) -> Result<(Dataset, Graph), Box<dyn Error>> {
        let spinner = if show_progress {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        } else {
            ProgressBar::hidden()
        };

        spinner.set_message("Loading data...");
        let dataset = Dataset::load(&self.data_dir)?;

        spinner.set_message("Building graph...");
        let graph = dataset.build_graph();
        spinner.finish_and_clear();

        info!(
            people = dataset.person_count(),
            movies = dataset.movie_count(),
            edges = graph.edge_count(),
            "data loaded"
        );

        Ok((dataset, graph))
    }
}
