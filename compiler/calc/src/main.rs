use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use calc::repl::ReplSession;
use calc::service;
use calc_eval::{Evaluator, EvaluatorConfig, RecordingTrace};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "calc evaluates infix arithmetic expressions with + - * /, parentheses,\n\
        implicit multiplication (2(3+4)) and signed numbers (3*-2).\n\n\
        EXAMPLES:\n\
        \n  calc eval '2(3+4)'                       Print 14\n\
        \n  calc eval --json '4/0'                   Print the error as a JSON body\n\
        \n  echo '{\"expression\":\"1+1\"}' | calc request   Answer a request body\n\
        \n  calc repl                                Start interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one expression
    Eval(EvalArgs),

    /// Answer a JSON request body of the form {"expression": "..."}
    Request(RequestArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(long_about = "Start an interactive session, one expression per line.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :trace  Toggle printing of intermediate stages\n\
            \n  :quit   Exit the REPL (also :q, :exit)")]
    Repl(LimitArgs),
}

#[derive(Debug, Args, Clone, Default)]
struct LimitArgs {
    /// Longest accepted expression, in characters
    #[arg(long = "max-len", value_name = "CHARS")]
    max_len: Option<usize>,

    /// Deepest accepted parenthesis nesting
    #[arg(long = "max-depth", value_name = "DEPTH")]
    max_depth: Option<usize>,
}

impl LimitArgs {
    fn evaluator(&self) -> Evaluator {
        let mut config = EvaluatorConfig::default();
        if let Some(len) = self.max_len {
            config = config.with_max_expression_len(len);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        Evaluator::new(config)
    }
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expression: Option<String>,

    /// Print the response body as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Print intermediate stages to stderr
    #[arg(long)]
    trace: bool,

    #[command(flatten)]
    limits: LimitArgs,
}

#[derive(Debug, Args, Clone)]
struct RequestArgs {
    /// File holding the request body (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    limits: LimitArgs,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;
    Ok(buf)
}

fn run_eval(args: &EvalArgs) -> i32 {
    let expression = match &args.expression {
        Some(e) => e.clone(),
        None => match read_stdin() {
            Ok(s) => s.trim_end_matches(['\n', '\r']).to_string(),
            Err(e) => {
                eprintln!("error: {e}");
                return 2;
            }
        },
    };

    let evaluator = args.limits.evaluator();

    if args.json {
        let response = service::respond(&evaluator, &expression);
        println!("{}", response.body_json());
        return if response.is_success() { 0 } else { 1 };
    }

    let mut trace = RecordingTrace::new();
    let result = evaluator.evaluate_traced(&expression, &mut trace);
    if args.trace {
        for event in trace.events() {
            eprintln!("{event}");
        }
    }
    match result {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn run_request(args: &RequestArgs) -> i32 {
    let body = match &args.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: failed to read '{}': {e}", path.display());
                return 2;
            }
        },
        None => match read_stdin() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return 2;
            }
        },
    };

    let response = service::handle_request_with(&args.limits.evaluator(), &body);
    log::info!("request answered with status {}", response.status);
    println!("{}", response.body_json());
    if response.is_success() {
        0
    } else {
        1
    }
}

fn run_repl(args: &LimitArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(args.evaluator());
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Eval(args) => run_eval(&args),
        Command::Request(args) => run_request(&args),
        Command::Repl(args) => run_repl(&args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
