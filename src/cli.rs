use anyhow::{Context, Result};
use cardcalc::card::{Card, cards_from_json, parse_cards};
use cardcalc::hand::{Deck, normalize_hand};
use cardcalc::solver::{HandSolver, SolverConfig, TargetMatch, evaluate_single};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cardcalc - Solve hands of the card arithmetic game
#[derive(Parser, Debug)]
#[command(name = "cardcalc")]
#[command(about = "Find the card arithmetic expressions closest to the target numbers")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shuffle a deck, deal a hand, resolve its wildcards and solve it
    Deal {
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Search every ordering of the cards for the closest expressions
    Best {
        /// Card tokens (7, 7:gold, +, -, /, x, sqrt) or one JSON array of card records
        #[arg(required = true)]
        cards: Vec<String>,

        /// Target value; may be repeated (default: 1 and 20)
        #[arg(short, long = "target")]
        targets: Vec<f64>,
    },
    /// Evaluate the cards in exactly the given order
    Eval {
        /// Card tokens or one JSON array of card records
        #[arg(required = true)]
        cards: Vec<String>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
    pub json: bool,
}

#[derive(Serialize)]
struct DealReport<'a> {
    dealt: &'a [Card],
    hand: &'a [Card],
    matches: &'a [TargetMatch],
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        command: args.command,
        log_level: args.log_level,
        json: args.json,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Read a hand from card tokens, or from a single JSON array of card records
pub fn parse_hand(tokens: &[String]) -> Result<Vec<Card>> {
    match tokens {
        [json] if json.trim_start().starts_with('[') => {
            cards_from_json(json).context("Invalid card records")
        }
        _ => parse_cards(tokens).context("Invalid card"),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_match(target_match: &TargetMatch) -> String {
    match &target_match.best {
        Some(best) => format!(
            "{}: {} = {}",
            target_match.target, best.expression, best.value
        ),
        None => format!("{}: Unknown.", target_match.target),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
    println!("{}", text);
    Ok(())
}

fn print_matches(matches: &[TargetMatch]) {
    if matches.iter().all(|m| m.best.is_none()) {
        warn!("No valid expression found");
    }
    for target_match in matches {
        println!("{}", format_match(target_match));
    }
}

fn run_deal(seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut deck = Deck::shuffled(&mut rng);
    let dealt = deck.deal_hand();
    let hand = normalize_hand(&dealt, &mut deck);
    info!(
        "Dealt [{}], resolved to [{}]",
        format_cards(&dealt),
        format_cards(&hand)
    );

    let matches = HandSolver::default()
        .find_best(&hand)
        .context("Failed to solve dealt hand")?;

    if json {
        return print_json(&DealReport {
            dealt: &dealt,
            hand: &hand,
            matches: &matches,
        });
    }

    println!("Hand: {}", format_cards(&hand));
    print_matches(&matches);
    Ok(())
}

fn run_best(cards: &[String], targets: Vec<f64>, json: bool) -> Result<()> {
    let hand = parse_hand(cards)?;
    let mut config = SolverConfig::default();
    if !targets.is_empty() {
        config.targets = targets;
    }
    let solver = HandSolver::new(config);

    info!(
        "Searching expressions for [{}] near {:?}",
        format_cards(&hand),
        solver.config().targets
    );

    let matches = solver.find_best(&hand).context("Invalid hand")?;
    if json {
        return print_json(&matches);
    }
    print_matches(&matches);
    Ok(())
}

fn run_eval(cards: &[String], json: bool) -> Result<()> {
    let hand = parse_hand(cards)?;
    let evaluation = evaluate_single(&hand);
    if json {
        return print_json(&evaluation);
    }

    match evaluation {
        Some(eval) => match eval.value {
            Some(value) => println!("{} = {}", eval.expression, value),
            None => println!("{} = Unknown.", eval.expression),
        },
        None => {
            warn!("Cards do not form an expression in this order");
            println!("Unknown.");
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match &config.command {
        Command::Deal { seed } => run_deal(*seed, config.json),
        Command::Best { cards, targets } => run_best(cards, targets.clone(), config.json),
        Command::Eval { cards } => run_eval(cards, config.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcalc::card::{Operator, Wildcard};
    use cardcalc::solver::Solution;

    #[test]
    fn test_parse_hand_tokens() {
        let tokens: Vec<String> = ["3", "+", "sqrt", "4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = parse_hand(&tokens);
        assert!(result.is_ok());
        if let Ok(cards) = result {
            assert_eq!(cards.len(), 4);
            assert_eq!(cards[1], Card::Operator(Operator::Add));
            assert_eq!(cards[2], Card::Wildcard(Wildcard::Sqrt));
        }

        let tokens = vec!["3".to_string(), "^".to_string()];
        assert!(parse_hand(&tokens).is_err());
    }

    #[test]
    fn test_parse_hand_json() {
        let json = r#"[{"kind": "number", "value": 5}, {"kind": "wildcard", "value": "×"}]"#;
        let tokens = vec![json.to_string()];
        let result = parse_hand(&tokens);
        assert!(result.is_ok());
        if let Ok(cards) = result {
            assert_eq!(cards.len(), 2);
            assert!(cards[1].is_multiply());
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "cardcalc", "best", "3", "-", "4", "--target", "7", "--json",
        ]);
        assert!(args.is_ok(), "unexpected error: {:?}", args.err());
        if let Ok(args) = args {
            assert!(args.json);
            assert!(matches!(args.log_level, LogLevel::Warn));
            match args.command {
                Command::Best { cards, targets } => {
                    assert_eq!(cards, vec!["3", "-", "4"]);
                    assert_eq!(targets, vec![7.0]);
                }
                other => panic!("expected best command, got {:?}", other),
            }
        }

        let args = CliArgs::try_parse_from(["cardcalc", "-l", "debug", "deal", "--seed", "9"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert!(matches!(args.command, Command::Deal { seed: Some(9) }));
        }

        assert!(CliArgs::try_parse_from(["cardcalc", "eval"]).is_err());
    }

    #[test]
    fn test_format_match() {
        let found = TargetMatch {
            target: 20.0,
            best: Some(Solution {
                expression: "((10+10)-(0/1))".to_string(),
                value: 20.0,
            }),
        };
        assert_eq!(format_match(&found), "20: ((10+10)-(0/1)) = 20");

        let missing = TargetMatch {
            target: 1.0,
            best: None,
        };
        assert_eq!(format_match(&missing), "1: Unknown.");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
