use std::path::PathBuf;

use meets_core::structures::case::Case;

/// The CLI-facing configuration gathered from argument parsing: orthogonal to
/// [meets_core::config::Config], which only ever sees the case and the
/// search-bound multiplier.
pub struct ConfigIO {
    pub path: PathBuf,
    pub case: Option<Case>,
    pub max_d_multiplier: Option<usize>,
    pub show_model: bool,
}

impl ConfigIO {
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let path = matches
            .get_one::<PathBuf>("path")
            .expect("path is required")
            .clone();

        let case = match matches.get_one::<String>("case").map(String::as_str) {
            Some("FINITE") => Some(Case::Finite),
            Some("NATURAL") => Some(Case::Natural),
            Some("DISCRETE") => Some(Case::Discrete),
            _ => None,
        };

        let max_d_multiplier = matches.get_one::<usize>("max_d_multiplier").copied();
        let show_model = matches.get_flag("show_model");

        ConfigIO {
            path,
            case,
            max_d_multiplier,
            show_model,
        }
    }
}
