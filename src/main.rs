//! tokensplit 命令行：打印规则表 / 检查单个候选串的拆分结果

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tokensplit::{build_rule_table, ConfigManager, GrammarConfig, LetterCase, RuleKind, RuleTable};

#[derive(Debug, Parser)]
#[command(name = "tokensplit", version, about = "English token split grammar")]
struct Cli {
    /// 输出调试日志（-v debug，-vv trace）
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// 字母规则同时接受小写字母
    #[arg(long, global = true)]
    mixed_case: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every rule name with its anchored pattern
    Table {
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },
    /// Split one candidate token under each matching rule
    Split {
        token: String,
        /// Only try this rule (rule name or export key)
        #[arg(short, long)]
        rule: Option<RuleKind>,
    },
}

impl Cli {
    fn grammar_config(&self) -> GrammarConfig {
        let letter_case = if self.mixed_case {
            LetterCase::Mixed
        } else {
            LetterCase::Upper
        };
        ConfigManager::custom()
            .letter_case(letter_case)
            .verbose(self.verbose > 0)
            .build()
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_table(table: &RuleTable, json: bool) -> Result<()> {
    if json {
        println!("{}", table.to_json_pretty()?);
    } else {
        for rule in table.iter() {
            println!("{:<36} {}", rule.kind, rule.pattern);
        }
    }
    Ok(())
}

/// 返回是否至少有一条规则命中
fn print_splits(table: &RuleTable, token: &str, rule: Option<RuleKind>) -> Result<bool> {
    let kinds = match rule {
        Some(kind) => vec![kind],
        None => table.matching(token)?,
    };

    let mut hit = false;
    for kind in kinds {
        if let Some(split) = table.split(kind, token) {
            println!("{}\t{}\t{}", kind, split.head, split.tail);
            hit = true;
        }
    }
    if !hit {
        eprintln!("no rule matches {:?}", token);
    }
    Ok(hit)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let table = build_rule_table(&cli.grammar_config()).context("failed to build rule table")?;

    let matched = match &cli.command {
        Commands::Table { json } => {
            print_table(&table, *json)?;
            true
        }
        Commands::Split { token, rule } => print_splits(&table, token, *rule)?,
    };

    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split_with_rule() {
        let cli = Cli::try_parse_from(["tokensplit", "split", "$4", "--rule", "currency-amount"]).unwrap();
        match cli.command {
            Commands::Split { token, rule } => {
                assert_eq!(token, "$4");
                assert_eq!(rule, Some(RuleKind::CurrencyAmount));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_rule() {
        assert!(Cli::try_parse_from(["tokensplit", "split", "$4", "-r", "nope"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tokensplit", "table", "--json", "--mixed-case", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let config = cli.grammar_config();
        assert_eq!(config.letter_case, LetterCase::Mixed);
        assert!(config.verbose);
    }

    #[test]
    fn test_print_splits_reports_miss() {
        let table = build_rule_table(&ConfigManager::get_default()).unwrap();
        assert!(print_splits(&table, "$12.50", None).unwrap());
        assert!(!print_splits(&table, "hello", None).unwrap());
        assert!(!print_splits(&table, "$4", Some(RuleKind::LeadingQuote)).unwrap());
    }
}
