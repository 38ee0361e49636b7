/*!
The command-line driver: parses a `.horn` file, runs the search, and prints a
report.
*/

mod config_io;
mod parse;
mod print;

use meets_core::{
    config::Config,
    procedures::search::check_with_config,
    reports::Report,
};

use config_io::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();
    let config_io = ConfigIO::from_args(&matches);

    let input = match parse::parse_file(&config_io.path) {
        Ok(Ok(input)) => input,
        Ok(Err(parse_error)) => {
            eprintln!("parse error: {parse_error:?}");
            std::process::exit(1);
        }
        Err(io_error) => {
            eprintln!("could not read {}: {io_error}", config_io.path.display());
            std::process::exit(1);
        }
    };

    print::print_input(&input);

    let mut config = Config::default();
    if let Some(multiplier) = config_io.max_d_multiplier {
        config.max_d_multiplier = multiplier;
    }

    let model = check_with_config(&input, config_io.case, &config);
    let report = Report::from(&model);

    println!("{report}");
    if config_io.show_model {
        print::print_model(&input, &model);
    }

    match report {
        Report::Satisfiable | Report::Unsatisfiable => std::process::exit(0),
    }
}
