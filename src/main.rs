use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use iodine::{
    Session,
    interpreter::parser::core::{FloatKind, ParseOptions},
    repl::{self, Flow, ReplConfig},
};
use tracing_subscriber::EnvFilter;

/// Kind given to real literals such as `1.5` that carry no `f` suffix.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FloatArg {
    F32,
    F64,
}

impl From<FloatArg> for FloatKind {
    fn from(arg: FloatArg) -> Self {
        match arg {
            FloatArg::F32 => Self::F32,
            FloatArg::F64 => Self::F64,
        }
    }
}

/// iodine is an interactive evaluator for typed arithmetic expressions with
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Value kind of unsuffixed real literals.
    #[arg(long, value_enum, default_value_t = FloatArg::F64)]
    float: FloatArg,

    /// Print the tokens of every line before evaluating it.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree of every line before evaluating it.
    #[arg(long)]
    ast: bool,

    /// Prompt shown before each line.
    #[arg(long, default_value = ">")]
    prompt: String,

    /// Evaluate these lines in order and exit instead of reading stdin.
    #[arg(short, long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut session = Session::with_options(ParseOptions { float_kind: args.float.into() });
    let config = ReplConfig { prompt:      args.prompt,
                              show_tokens: args.tokens,
                              show_ast:    args.ast, };

    let result = if args.commands.is_empty() {
        repl::run(&mut session, io::stdin().lock(), &mut io::stdout(), &config)
    } else {
        run_commands(&mut session, &args.commands, &config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_commands(session: &mut Session, commands: &[String], config: &ReplConfig) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in commands {
        if repl::handle_line(session, line, &mut stdout, config)? == Flow::Quit {
            break;
        }
    }
    stdout.flush()
}
