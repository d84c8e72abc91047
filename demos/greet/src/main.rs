//! Greet Example
//!
//! A tiny command-line tool whose arguments are bound by argbind.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package greet                          # prints usage
//! cargo run --package greet -- Ferris --times 2 -l   # "HELLO, FERRIS!" twice
//! cargo run --package greet -- /?
//! ```
//!
//! An `argbind.toml` next to the binary (or `ARGBIND_*` environment variables)
//! configures logging and matching, e.g. `ARGBIND_MATCHING__IGNORE_CASE=true`.

use anyhow::Result;
use argbind::prelude::*;
use argbind::runtime::logging;
use tracing::{debug, info};

const USAGE: &str = "usage: greet <name> [--greeting <text>] [--times <n>] [-l|--loud] [/?]";

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Default, Arguments)]
#[arguments(lifecycle)]
struct GreetArgs {
    /// Who to greet.
    #[arg(position = 0, key = "--name")]
    name: Option<String>,

    /// Greeting word.
    #[arg(key = "--greeting", key = "-g")]
    greeting: Option<String>,

    /// How many times to print the greeting.
    #[arg(key = "--times", key = "-n")]
    times: Option<u32>,

    /// Shout.
    #[arg(switch = "-l", switch = "--loud")]
    loud: bool,

    #[arg(switch = "/?", switch = "--help", help = "Print usage")]
    help: bool,

    usage_printed: bool,
}

#[lifecycle]
impl GreetArgs {
    #[on_omitted]
    fn usage(&mut self) {
        print_usage();
        self.usage_printed = true;
    }

    #[on_error]
    fn rejected(&mut self) {
        eprintln!("greet: invalid arguments");
        print_usage();
        self.usage_printed = true;
    }

    #[on_bound]
    fn bound(&mut self) {
        if self.help {
            print_usage();
            self.usage_printed = true;
        }
    }
}

fn print_usage() {
    println!("{USAGE}");
    for property in GreetArgs::properties() {
        let marker = property.marker();
        println!(
            "  {:<28} {}",
            marker.label(),
            marker.description.unwrap_or_default()
        );
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let config = ConfigLoader::new().load()?;
    logging::init_from_config(&config.logging);

    let mut args = GreetArgs::default();
    let outcome = config
        .analyzer::<GreetArgs>()
        .analyze_os(&mut args, std::env::args_os().skip(1))?;
    debug!(?outcome, "Arguments analyzed");

    if args.usage_printed {
        return Ok(());
    }

    let Some(name) = args.name.as_deref() else {
        print_usage();
        return Ok(());
    };

    let greeting = args.greeting.as_deref().unwrap_or("Hello");
    let mut line = format!("{greeting}, {name}!");
    if args.loud {
        line = line.to_uppercase();
    }

    let times = args.times.unwrap_or(1);
    info!(times, loud = args.loud, "Greeting");
    for _ in 0..times {
        println!("{line}");
    }

    Ok(())
}
