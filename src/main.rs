use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap_stdin::MaybeStdin;
use tracing::{error, Level};

use inclang::error::Error;
use inclang::lexer::Lexer;
use inclang::RunOptions;

const DEMOS: [(&str, &str); 3] = [
    ("valid program", "x=10;print(inc(x));print(inc(15));"),
    ("undeclared variable", "a=1;print(inc(y));"),
    ("syntax error", "print(inc());"),
];

/// Run programs written in the inc toy language
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Program text, or '-' to read it from stdin
    #[arg(required_unless_present = "demo")]
    source: Option<MaybeStdin<String>>,

    /// Run the built-in demo programs
    #[arg(long, conflicts_with = "source")]
    demo: bool,

    /// Print the token stream before running
    #[arg(long)]
    tokens: bool,

    /// Print the parsed AST before running
    #[arg(long)]
    ast: bool,

    /// Skip semantic analysis
    #[arg(long)]
    no_check: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_source(cli: &Cli, source: &str) -> Result<(), Error> {
    if cli.tokens {
        for token in Lexer::tokenize(source) {
            println!("{:?}", token);
        }
    }

    let program = inclang::parse(source)?;
    if cli.ast {
        println!("{:#?}", program);
    }

    let options = RunOptions {
        check: !cli.no_check,
    };
    inclang::execute(&program, io::stdout().lock(), &options)
}

fn report(err: &Error) {
    error!(stage = err.stage(), "program rejected");
    eprintln!("{}", err);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.demo {
        for (name, source) in DEMOS {
            println!("== {}\n{}", name, source);
            if let Err(err) = run_source(&cli, source) {
                report(&err);
            }
        }
        return ExitCode::SUCCESS;
    }

    let Some(source) = cli.source.as_deref() else {
        eprintln!("No program given");
        return ExitCode::FAILURE;
    };

    match run_source(&cli, source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
