use std::io::{self, Read};
use std::process;

use clap::{Parser, Subcommand};

use singlish_engine::rules::RuleTrie;
use singlish_engine::tokenizer::tokenize;
use singlish_engine::{convert, script};

#[derive(Parser)]
#[command(name = "singlishtool", about = "Singlish conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Singlish text to Sinhala (reads stdin when TEXT is omitted)
    Convert {
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Dump the tokenizer's classification for a text
    Tokens {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run only the script guard and report offending spans
    Check { text: String },

    /// Look up a romanized cluster in the grapheme rule table
    Lookup { cluster: String },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, json } => cmd_convert(read_text(text), json),
        Command::Tokens { text, json } => cmd_tokens(&text, json),
        Command::Check { text } => cmd_check(&text),
        Command::Lookup { cluster } => cmd_lookup(&cluster),
    }
}

fn read_text(text: Option<String>) -> String {
    match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("failed to read stdin: {e}");
                process::exit(1);
            }
            buf
        }
    }
}

fn cmd_convert(text: String, json: bool) {
    match convert(&text) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::json!({ "output": result.output }));
            } else {
                println!("{}", result.output);
            }
        }
        Err(err) => {
            if json {
                let spans: Vec<_> = err.spans.iter().map(|s| [s.start, s.end]).collect();
                println!(
                    "{}",
                    serde_json::json!({ "error": "mixed-script", "spans": spans })
                );
            } else {
                eprintln!("{err}");
            }
            process::exit(1);
        }
    }
}

fn cmd_tokens(text: &str, json: bool) {
    let tokens = tokenize(text);
    if json {
        let entries: Vec<_> = tokens
            .iter()
            .map(|t| {
                serde_json::json!({
                    "kind": format!("{:?}", t.kind),
                    "text": t.text,
                    "span": [t.span.start, t.span.end],
                })
            })
            .collect();
        println!("{}", serde_json::json!(entries));
    } else {
        for t in &tokens {
            println!("{:>4}..{:<4} {:10?} {:?}", t.span.start, t.span.end, t.kind, t.text);
        }
    }
}

fn cmd_check(text: &str) {
    match script::check(text) {
        Ok(()) => println!("ok"),
        Err(err) => {
            println!("{err}");
            for span in &err.spans {
                println!("  {}..{} {:?}", span.start, span.end, &text[span.clone()]);
            }
            process::exit(1);
        }
    }
}

fn cmd_lookup(cluster: &str) {
    println!("{:?}", RuleTrie::global().lookup(cluster));
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("singlish_engine=debug")),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}
