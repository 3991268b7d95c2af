//! src/bin/app.rs
//! Command line surface of the testrig demo binary: flag parsing, logger
//! wiring and the demonstration plan.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use is_terminal::IsTerminal;
use logging::{Color, ColorMode, Detail, Logger, VerbosityOptions};

const USAGE: &str = "\
Usage: testrig [OPTIONS]

Run the demonstration plan, printing its progress through the logging
pipeline to standard error.

Options:
  -v, --verbose        Increase the verbosity level (repeatable)
  -d, --debug          Increase the debug level (repeatable)
  -q, --quiet          Only print warnings, failures and plain output
      --color <WHEN>   Color output: auto, always or never [default: auto]
  -h, --help           Print this help and exit
  -V, --version        Print the version and exit
";

/// When to emit ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!(
                "invalid --color value '{raw}': expected auto, always or never"
            )),
        }
    }

    fn resolve(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::from(io::stderr().is_terminal()),
            Self::Always => ColorMode::Ansi,
            Self::Never => ColorMode::Plain,
        }
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    verbose: u8,
    debug: u8,
    quiet: bool,
    color: ColorChoice,
}

enum Invocation {
    Run(CliOptions),
    Help,
    Version,
}

fn parse(args: &[String]) -> Result<Invocation, String> {
    let mut options = CliOptions::default();
    let mut index = 0;

    while index < args.len() {
        let arg = args[index].as_str();

        match arg {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "-v" | "--verbose" => options.verbose = options.verbose.saturating_add(1),
            "-d" | "--debug" => options.debug = options.debug.saturating_add(1),
            "-q" | "--quiet" => options.quiet = true,
            "--color" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "--color requires a value".to_owned())?;
                options.color = ColorChoice::parse(value)?;
            }
            _ if arg.starts_with("--color=") => {
                options.color = ColorChoice::parse(&arg["--color=".len()..])?;
            }
            _ if arg.len() > 1 && arg.starts_with('-') && !arg.starts_with("--") => {
                for flag in arg.chars().skip(1) {
                    match flag {
                        'v' => options.verbose = options.verbose.saturating_add(1),
                        'd' => options.debug = options.debug.saturating_add(1),
                        'q' => options.quiet = true,
                        _ => return Err(format!("unknown option '-{flag}'")),
                    }
                }
            }
            _ => return Err(format!("unknown option '{arg}'")),
        }

        index += 1;
    }

    Ok(Invocation::Run(options))
}

/// Entry point called by `main` with the process arguments.
pub fn run(args: &[String]) -> ExitCode {
    match try_run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("testrig: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: &[String]) -> Result<ExitCode, Box<dyn Error>> {
    let options = match parse(args)? {
        Invocation::Help => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Version => {
            println!("testrig {}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Run(options) => options,
    };

    let verbosity = VerbosityOptions {
        verbose: (options.verbose > 0).then_some(options.verbose),
        debug: (options.debug > 0).then_some(options.debug),
        quiet: options.quiet,
    };

    let mut logger =
        Logger::create_with_options(&verbosity)?.with_colors(options.color.resolve());
    logger.add_label("testrig");

    run_plan(&logger);

    Ok(ExitCode::SUCCESS)
}

/// Walks a small fixed plan, exercising every message class.
fn run_plan(logger: &Logger) {
    logger.print("plan run started");
    logger.info(Detail::new("plan").with_value("/plans/smoke"));
    logger.verbose(Detail::new("discovered step definitions").with_value("3"));

    for step in ["discover", "provision", "execute"] {
        let step_logger = logger.descend_named(step);

        step_logger.info(Detail::new("step").with_value(step).with_color(Color::Green));
        step_logger.verbose("configuration resolved");
        step_logger.debug("artifact cache miss");
        step_logger.debug_at(
            2,
            Detail::new("environment").with_value("PATH=/usr/bin\nLANG=C.UTF-8"),
        );

        if step == "execute" {
            step_logger.warn("no tests were selected, selecting all of them");
            step_logger.fail("test /tests/smoke/basic failed");
        }
    }

    logger.print("plan run finished");
}
