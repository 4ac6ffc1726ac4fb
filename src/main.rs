use readmegen::cli::{Args, Command};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_logging(&args);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Install the tracing subscriber; `RUST_LOG` overrides the flag-derived level
fn init_logging(args: &Args) {
    let filter = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!args.no_colors)
                .with_target(false),
        )
        .init();
}
