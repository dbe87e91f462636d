use anyhow::Result;
use serde_json::json;
use tracing::debug;

mod args;
use args::Cli;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // The subscriber has to be up before parsing, or the parser's events are lost
    init_tracing(debug_requested(&args));

    let cli = Cli::parse(&args)?;
    debug!(count = args.len(), "parsed arguments");

    if cli.json.as_bool() {
        let output = json!({
            "verbose": cli.verbose,
            "message": cli.message,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing flags: {}", e),
        }
        return Ok(());
    }

    println!("Verbose: {}", cli.verbose.as_bool());
    println!("Message: {}", cli.message.as_str().unwrap_or_default());

    Ok(())
}

/// Whether `--debug` appears anywhere after the program name.
fn debug_requested(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == "--debug")
}

fn log_filter(debug: bool) -> &'static str {
    if debug {
        "dashflag=debug,dashflag_core=debug"
    } else {
        "dashflag=warn,dashflag_core=warn"
    }
}

fn init_tracing(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(std::io::stderr)
        .init();
}
