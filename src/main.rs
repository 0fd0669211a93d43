use anyhow::Result;
use clap::Parser;
use tracing::error;

use wordtally::report::{print_json_report, print_report};
use wordtally::utils::{setup_logging, validate_args};
use wordtally::{analyze_corpus, init_sample_file, Args, CancelToken};

fn run(args: &Args) -> Result<()> {
    validate_args(args)?;

    if args.init {
        return init_sample_file(&args.input);
    }

    let result = analyze_corpus(args, &CancelToken::new())?;
    if args.json {
        print_json_report(&result, args)
    } else {
        print_report(&result, args)
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!(error = %format!("{e:#}"), "Word count failed");
        std::process::exit(1);
    }
}
