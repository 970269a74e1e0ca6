//! Parsing command-line arguments.

use crate::error::Error;
use clap::{
    builder::PossibleValue, command, value_parser, Arg, ArgAction, Command, Error as ClapError,
    ValueEnum,
};
use log::Level;
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};
use ternca_lib::Config;

/// How to print the spacetime field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// One digit per cell.
    Digits,
    /// `.` for state 0, `o` for state 1, uppercase letters from `A` for the others.
    Symbols,
    /// A JSON array of rows.
    Json,
    /// A YAML sequence of rows.
    Yaml,
    /// A PNG image with one pixel row per generation.
    Png,
}

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Format::Digits,
            Format::Symbols,
            Format::Json,
            Format::Yaml,
            Format::Png,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Format::Digits => PossibleValue::new("digits"),
            Format::Symbols => PossibleValue::new("symbols"),
            Format::Json => PossibleValue::new("json"),
            Format::Yaml => PossibleValue::new("yaml"),
            Format::Png => PossibleValue::new("png"),
        })
    }
}

/// A struct to store the parse results.
///
/// Values given on the command line override those in the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    config_file: Option<PathBuf>,
    rule: Option<u64>,
    length: Option<isize>,
    steps: Option<isize>,
    num_states: Option<usize>,
    neighborhood_size: Option<usize>,
    seed: Option<u64>,
    initial: Option<Vec<usize>>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) format: Format,
    pub(crate) verbosity: u8,
}

/// Parses an initial condition such as `0120`.
fn parse_initial(s: &str) -> Result<Vec<usize>, String> {
    s.chars()
        .map(|c| {
            c.to_digit(36)
                .map(|d| d as usize)
                .ok_or_else(|| format!("'{}' is not a cell state", c))
        })
        .collect()
}

fn app() -> Command {
    command!()
        .long_about(
            "Runs a one-dimensional cellular automaton\n\
             \n\
             Each cell reads its left neighbors and itself, and the cells wrap \
             around at the ends. The rule identifier, written in base k with the \
             least significant digit first, lists the next states of all \
             neighborhoods in lexicographic order.\n\
             \n\
             The spacetime field is printed with one line per generation.\n",
        )
        .arg(
            Arg::new("RULE")
                .help("Rule identifier [default: 235]")
                .index(1)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("LENGTH")
                .help("Number of cells [default: 100]")
                .long_help(
                    "Number of cells [default: 100]\n\
                     Ignored when an initial condition is given.",
                )
                .index(2)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("STEPS")
                .help("Number of steps [default: 100]")
                .index(3)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("STATES")
                .help("Number of states [default: 3]")
                .short('k')
                .long("states")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("NEIGHBORHOOD")
                .help("Number of cells in a neighborhood [default: 2]")
                .long_help(
                    "Number of cells in a neighborhood [default: 2]\n\
                     A neighborhood of size n is made of the n - 1 cells to the \
                     left of a cell, and the cell itself.",
                )
                .short('n')
                .long("neighborhood")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for the random initial condition")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("INITIAL")
                .help("Initial condition, one digit per cell, e.g. 0120")
                .short('i')
                .long("initial")
                .value_parser(parse_initial),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(value_parser!(Format))
                .default_value("digits"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Writes the output to a file instead of stdout")
                .long_help(
                    "Writes the output to a file instead of stdout\n\
                     Required for the png format.",
                )
                .short('o')
                .long("output")
                .required_if_eq("FORMAT", "png")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Prints more logs; may be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, ClapError> {
        Args::parse_from(std::env::args_os())
    }

    /// Parses the given arguments. The first one is the program name.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, ClapError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(args)?;

        Ok(Args {
            config_file: matches.get_one::<PathBuf>("CONFIG").cloned(),
            rule: matches.get_one::<u64>("RULE").copied(),
            length: matches.get_one::<isize>("LENGTH").copied(),
            steps: matches.get_one::<isize>("STEPS").copied(),
            num_states: matches.get_one::<usize>("STATES").copied(),
            neighborhood_size: matches.get_one::<usize>("NEIGHBORHOOD").copied(),
            seed: matches.get_one::<u64>("SEED").copied(),
            initial: matches.get_one::<Vec<usize>>("INITIAL").cloned(),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
            format: matches
                .get_one::<Format>("FORMAT")
                .copied()
                .unwrap_or(Format::Digits),
            verbosity: matches.get_count("VERBOSE"),
        })
    }

    /// The log level chosen by the number of `-v` flags.
    pub(crate) fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    /// The run configuration: the config file if any,
    /// overridden by the values given on the command line.
    pub(crate) fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config_file {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(num_states) = self.num_states {
            config.num_states = num_states;
        }
        if let Some(neighborhood_size) = self.neighborhood_size {
            config.neighborhood_size = neighborhood_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(initial) = &self.initial {
            config.initial = Some(initial.clone());
        }
        Ok(config)
    }
}

/// Reads a config file, choosing the format by the file extension.
fn load_config(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(OsStr::to_str) {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
        Some("toml") => Ok(toml::from_str(&text)?),
        _ => Err(Error::UnknownFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["ternca"]).unwrap();
        assert_eq!(args.format, Format::Digits);
        assert_eq!(args.output, None);
        assert_eq!(args.log_level(), Level::Warn);
        assert_eq!(args.config().unwrap(), Config::default());
    }

    #[test]
    fn positional() {
        let args = Args::parse_from(["ternca", "8229", "16", "-2"]).unwrap();
        let config = args.config().unwrap();
        assert_eq!(config, Config::new(8229, 16, -2));
    }

    #[test]
    fn options() {
        let args = Args::parse_from([
            "ternca", "13", "-k", "2", "-n", "3", "-s", "7", "-i", "0110", "-f", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.log_level(), Level::Debug);
        let config = args.config().unwrap();
        assert_eq!(
            config,
            Config::default()
                .set_rule(13)
                .set_shape(2, 3)
                .set_seed(Some(7))
                .set_initial(vec![0, 1, 1, 0])
        );
    }

    #[test]
    fn formats() {
        for (name, format) in [
            ("digits", Format::Digits),
            ("symbols", Format::Symbols),
            ("json", Format::Json),
            ("yaml", Format::Yaml),
        ] {
            let args = Args::parse_from(["ternca", "-f", name]).unwrap();
            assert_eq!(args.format, format);
        }
        let args = Args::parse_from(["ternca", "-f", "png", "-o", "out.png"]).unwrap();
        assert_eq!(args.format, Format::Png);
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn bad_arguments() {
        assert!(Args::parse_from(["ternca", "-f", "gif"]).is_err());
        assert!(Args::parse_from(["ternca", "-f", "png"]).is_err());
        assert!(Args::parse_from(["ternca", "-i", "01-2"]).is_err());
        assert!(Args::parse_from(["ternca", "twelve"]).is_err());
    }

    #[test]
    fn config_file_overridden() {
        let path = std::env::temp_dir().join("ternca-args-test.toml");
        fs::write(&path, "rule = 8229\nlength = 8\nsteps = 3\nseed = 1\n").unwrap();
        let path_arg = path.to_str().unwrap().to_string();
        let args = Args::parse_from(["ternca", "-c", path_arg.as_str(), "--seed", "5"]).unwrap();
        let config = args.config().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, Config::new(8229, 8, 3).set_seed(Some(5)));
    }

    #[test]
    fn json_config_file() {
        let path = std::env::temp_dir().join("ternca-args-test.json");
        fs::write(
            &path,
            r#"{"rule": 13, "num_states": 2, "initial": [0, 1, 1, 0], "steps": 4}"#,
        )
        .unwrap();
        let path_arg = path.to_str().unwrap().to_string();
        let args = Args::parse_from(["ternca", "-c", path_arg.as_str()]).unwrap();
        let config = args.config().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            config,
            Config::default()
                .set_rule(13)
                .set_shape(2, 2)
                .set_steps(4)
                .set_initial(vec![0, 1, 1, 0])
        );
    }

    #[test]
    fn yaml_config_file() {
        let path = std::env::temp_dir().join("ternca-args-test.yml");
        fs::write(&path, "rule: 8229\nlength: 12\nseed: 3\n").unwrap();
        let path_arg = path.to_str().unwrap().to_string();
        let args = Args::parse_from(["ternca", "-c", path_arg.as_str(), "1", "-k", "3"]).unwrap();
        let config = args.config().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, Config::new(1, 12, 100).set_seed(Some(3)));

        let path = std::env::temp_dir().join("ternca-args-bad.yaml");
        fs::write(&path, "rule: [1, 2]\n").unwrap();
        let path_arg = path.to_str().unwrap().to_string();
        let args = Args::parse_from(["ternca", "-c", path_arg.as_str()]).unwrap();
        let result = args.config();
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn unknown_config_format() {
        let args = Args::parse_from(["ternca", "-c", "config.ini"]).unwrap();
        assert!(matches!(args.config(), Err(Error::Io(_))));
        let path = std::env::temp_dir().join("ternca-args-test.ini");
        fs::write(&path, "rule = 1\n").unwrap();
        let path_arg = path.to_str().unwrap().to_string();
        let args = Args::parse_from(["ternca", "-c", path_arg.as_str()]).unwrap();
        let result = args.config();
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }
}
