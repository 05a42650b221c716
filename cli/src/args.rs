use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "degrees")]
#[command(about = "Find the degrees of separation between any two actors")]
pub struct Args {
    /// Directory containing people.csv, movies.csv and stars.csv
    /// [default: $DEGREES_DATA, then "large"]
    pub directory: Option<String>,

    /// Name of the first person (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub from: Option<String>,

    /// Name of the second person (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub to: Option<String>,

    /// Search algorithm: uniform-cost or bfs
    #[arg(short, long, value_name = "ALGORITHM", default_value = "uniform-cost")]
    pub algorithm: String,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Show person and movie ids in output
    #[arg(short = 'i', long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the degree count and the chain of names
    #[arg(short, long)]
    pub quiet: bool,
}
