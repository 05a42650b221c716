use clap::Parser;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_info, display_search_results};
use degrees::json_output::{create_json_output, print_json_output};
use degrees::logging::init_logging;
use degrees::{Args, DegreesApp, create_search_request, execute_search};
use std::error::Error;
use std::io::{self, Write};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = DegreesApp::new(args.directory.clone())?;
    let (dataset, graph) = app.load_data(!args.json && !args.quiet)?;

    // Keep stdout clean for JSON consumers
    let mut prompt_output: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut input = io::stdin().lock();

    let search_request = create_search_request(args, &dataset, &mut input, &mut prompt_output)?;

    if search_request.search_args.json {
        let search_result = execute_search(search_request, &graph);
        print_json_output(&create_json_output(&search_result, &dataset));
        return Ok(());
    }

    if search_request.search_args.verbose {
        display_search_info(&search_request, colors);
    }

    let search_result = execute_search(search_request, &graph);
    display_search_results(search_result, &dataset, colors);

    Ok(())
}
