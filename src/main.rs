use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use revenue_scorecard::config::Config;
use revenue_scorecard::content::CtaLink;
use revenue_scorecard::log_info;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_BROWSER: i32 = 2;
const EXIT_TERMINAL: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LinkArg {
    /// Book Strategy Audit
    Audit,
    /// Register Live Masterclass
    Masterclass,
}

impl From<LinkArg> for CtaLink {
    fn from(arg: LinkArg) -> Self {
        match arg {
            LinkArg::Audit => CtaLink::StrategyAudit,
            LinkArg::Masterclass => CtaLink::Masterclass,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive scorecard (default if no subcommand)
    Tui,
    /// Score answers given on the command line and print the result
    Score {
        /// Up to six ratings (1-5) in category order; 0 or - leaves one unanswered
        answers: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the six categories with their traditional and AI-powered flows
    Categories,
    /// Open a call-to-action link in the browser
    Open {
        #[arg(value_enum)]
        link: LinkArg,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "revenue-scorecard")]
#[command(about = "AI-First Sales & Marketing Readiness Scorecard", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/revenue-scorecard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Load and validate the config, exiting with `EXIT_CONFIG` on any problem
fn load_validated_config(path: Option<PathBuf>) -> Config {
    let config = match revenue_scorecard::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = revenue_scorecard::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    log_info!(
        "Theme: {}, flash duration: {}",
        config.theme.as_str(),
        config.flash_duration
    );
    config
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    revenue_scorecard::stderr_log::set_verbose(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Tui);
    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Init => {
            if let Err(e) = revenue_scorecard::config::init::run_init_wizard(config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Commands::Tui => {
            let config = load_validated_config(config_path);
            let theme = revenue_scorecard::tui::resolve_theme(config.theme);
            let app = revenue_scorecard::tui::App::new(theme, config.flash_duration());
            if let Err(e) = revenue_scorecard::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_TERMINAL);
            }
        }
        Commands::Score { answers, json } => {
            let scores = match revenue_scorecard::scoring::parse_answers(answers.as_slice()) {
                Ok(s) => s,
                Err(errors) => {
                    eprintln!("Invalid answers:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_INPUT);
                }
            };
            let scorer = revenue_scorecard::scoring::Scorer::with_scores(scores);
            log_info!(
                "Scored {} of {} categories",
                scorer.answered_count(),
                revenue_scorecard::scoring::CATEGORY_COUNT
            );

            if json {
                match revenue_scorecard::output::format_json(&scorer) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = revenue_scorecard::output::should_use_colors();
                println!("{}", revenue_scorecard::output::format_report(&scorer, use_colors));
            }
        }
        Commands::Categories => {
            let use_colors = revenue_scorecard::output::should_use_colors();
            println!("{}", revenue_scorecard::output::format_categories(use_colors));
        }
        Commands::Open { link } => {
            let link = CtaLink::from(link);
            if let Err(e) = revenue_scorecard::browser::open_link(link) {
                eprintln!("Failed to open browser: {:#}", e);
                std::process::exit(EXIT_BROWSER);
            }
            println!("Opening {} in browser: {}", link.label(), link.url());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("revenue-scorecard").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_score_json_flag_after_answers() {
        let cli = parse(&["score", "3", "-", "--json"]);
        match cli.command {
            Some(Commands::Score { answers, json }) => {
                assert_eq!(answers, vec!["3", "-"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_score_global_flag_after_answers() {
        let cli = parse(&["score", "3", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Score { answers, json }) => {
                assert_eq!(answers, vec!["3"]);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_open_link_argument() {
        let cli = parse(&["open", "masterclass"]);
        match cli.command {
            Some(Commands::Open { link }) => {
                assert_eq!(CtaLink::from(link), CtaLink::Masterclass);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
