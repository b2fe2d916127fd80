//! Parsing command-line arguments.

use crate::file::load_config;
use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Command, Error};
use sparselife_lib::{parse_iterations, Config, Format, Pattern};
use std::{error::Error as _, path::PathBuf};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) list: bool,
    pub(crate) final_only: bool,
    pub(crate) stats: bool,
    #[cfg(feature = "tui")]
    pub(crate) tui: bool,
}

fn app() -> Command {
    let app = command!()
        .long_about(
            "Conway's Game of Life on an unbounded grid\n\
             \n\
             Starts from a named pattern and prints every generation up to \
             the given iteration count, each bounded by the smallest box \
             enclosing its living cells.\n\
             * Living cells are represented by `▣` (`o` in plaintext);\n\
             * Dead cells are represented by `▢` (`.` in plaintext);\n\
             * The top row has the largest y-coordinate.\n",
        )
        .arg(
            Arg::new("PATTERN")
                .help("Starting pattern: rpentomino, glider or square")
                .index(1)
                .required_unless_present_any(["CONFIG", "LIST"])
                .value_parser(|s: &str| s.parse::<Pattern>()),
        )
        .arg(
            Arg::new("ITERATIONS")
                .help("Number of generations to compute")
                .index(2)
                .required_unless_present_any(["CONFIG", "LIST"])
                .allow_negative_numbers(true)
                .value_parser(parse_iterations),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Reads the configuration from a JSON, YAML or TOML file\n\
                     The format is chosen by the file extension. \
                     Arguments given on the command line take precedence.\n",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("How to draw the cells: glyph or plaintext")
                .short('f')
                .long("format")
                .value_parser(|s: &str| s.parse::<Format>()),
        )
        .arg(
            Arg::new("LIST")
                .help("Prints the names of the built-in patterns")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("FINAL")
                .help("Prints only the last generation")
                .long("final-only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("STATS")
                .help("Prints the population and bounding box after each generation")
                .long("stats")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    let app = app.arg(
        Arg::new("TUI")
            .help("Browses the generations in an interactive viewer")
            .long_help(
                "Browses the generations in an interactive viewer\n\
                 Use the arrow keys to step through the generations and [q] to quit. \
                 The generation on screen is printed when the viewer exits.\n",
            )
            .short('t')
            .long("tui")
            .action(ArgAction::SetTrue)
            .conflicts_with_all(["FINAL", "STATS"]),
    );

    app
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = app().try_get_matches().map_err(|e| match e.kind() {
            // Rendered again so that the usage follows the message.
            ErrorKind::ValueValidation => {
                let message = e
                    .source()
                    .map_or_else(|| e.to_string(), |source| source.to_string());
                app().error(ErrorKind::ValueValidation, message)
            }
            _ => e,
        })?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_config(path).map_err(|e| {
                app().error(ErrorKind::Io, format!("{}: {}", path.display(), e))
            })?,
            None => Config::default(),
        };

        if let Some(&pattern) = matches.get_one::<Pattern>("PATTERN") {
            config.pattern = pattern;
            config.cells = None;
        }
        if let Some(&iterations) = matches.get_one::<u64>("ITERATIONS") {
            config = config.set_iterations(iterations);
        }
        if let Some(&format) = matches.get_one::<Format>("FORMAT") {
            config = config.set_format(format);
        }

        Ok(Args {
            config,
            list: matches.get_flag("LIST"),
            final_only: matches.get_flag("FINAL"),
            stats: matches.get_flag("STATS"),
            #[cfg(feature = "tui")]
            tui: matches.get_flag("TUI"),
        })
    }
}
