use std::fs;

use booltree::get_result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// booltree builds a boolean expression tree from a script of edit commands
/// and evaluates it against the variables the script defines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells booltree to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the result of the finished tree.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log to stderr; repeat for more detail (-d info, -dd debug, -ddd
    /// trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    setup_logging(args.debug);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` directives take precedence; `-d` only sets the default level.
fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder().with_default_directive(level_for(verbosity).into())
                                     .from_env_lossy();

    let fmt_layer = fmt::layer().with_writer(std::io::stderr)
                                .with_target(true)
                                .with_thread_names(false)
                                .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry().with(fmt_layer.with_filter(filter))
                                  .init();

    tracing::debug!(verbosity, "logging initialised");
}
