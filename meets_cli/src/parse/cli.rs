/*!
Command-line argument definitions.
*/

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("meets")
        .about("Decides satisfiability of a Horn-fragment interval temporal formula")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("path")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The .horn source file to parse."),
        )
        .arg(
            Arg::new("case")
                .short('c')
                .long("case")
                .value_parser(["FINITE", "NATURAL", "DISCRETE"])
                .default_value("DISCRETE")
                .help("The class of temporal structure to search over."),
        )
        .arg(
            Arg::new("max_d_multiplier")
                .long("max-d-multiplier")
                .value_parser(value_parser!(usize))
                .help("Overrides the default search-bound multiplier on the clause count."),
        )
        .arg(
            Arg::new("show_model")
                .short('m')
                .long("show-model")
                .action(ArgAction::SetTrue)
                .help("Print the closed interval state of a satisfying model."),
        )
}
