use clap::Parser;
use colored::Colorize;
use ui::TuiOptions;

#[derive(Debug, Parser)]
#[command(
    name = "knobs",
    about = "Terminal demo of the knobs widget kit",
    version,
    long_about = "A terminal demo of the knobs widget kit: a click-counter button and a controlled toggle switch.\n\nExamples:\n  knobs                          # Launch the demo\n  knobs --checked                # Start with the toggle on\n  knobs --on yes --off no        # Custom toggle labels\n  knobs --verbose                # Echo info-level logs to the console\n  knobs --debug                  # Echo everything, including debug logs"
)]
struct Knobs {
    /// Start with the toggle in the checked position
    #[arg(long)]
    checked: bool,

    /// Label shown for the toggle's checked state
    #[arg(long, default_value = "on")]
    on: String,

    /// Label shown for the toggle's unchecked state
    #[arg(long, default_value = "off")]
    off: String,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Run in debug mode with extensive execution details
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Knobs::parse();

    // Console echo is quiet by default; the logs live in the TUI's
    // logs tab either way
    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    let options = TuiOptions {
        checked: cli.checked,
        on: cli.on,
        off: cli.off,
    };

    match ui::run_knobs_tui(options) {
        Ok(summary) => {
            println!();
            println!("{}", "Session summary".cyan().bold());
            println!(
                "  {} {}",
                "Clicks:".white(),
                summary.clicks.to_string().green().bold()
            );
            println!(
                "  {} {}",
                "Toggle:".white(),
                if summary.toggle_on {
                    summary.toggle_position.green().bold()
                } else {
                    summary.toggle_position.yellow().bold()
                }
            );
        }
        Err(e) => {
            logging::error(&format!("Failed to start UI: {}", e));
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
