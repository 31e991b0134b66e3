//! CLI argument parsing.
//!
//! The parser accepts any iterator of strings rather than reading
//! `std::env::args()` directly, which keeps parsing logic testable.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Analyze a scenario file.
    Analyze {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional Kendall notation override (`M/M/7//100`).
        kendall: Option<String>,
        /// Whether to attach the built-in characterization.
        characterize: bool,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "analyze" => Self::parse_analyze_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'analyze' command arguments.
    fn parse_analyze_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'analyze' command requires a scenario path");
            return Command::Help;
        }

        let mut kendall = None;
        let mut characterize = true;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--kendall" => {
                    if i + 1 < args.len() {
                        kendall = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--no-characterization" => {
                    characterize = false;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Analyze {
            scenario_path: PathBuf::from(&args[2]),
            kendall,
            characterize,
        }
    }
}
