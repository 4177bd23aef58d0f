use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

use crate::cli::output::{
    format_check_report, format_occurrences, format_resolved_days, format_weekdays, format_year_page,
    format_yearly_codes,
};
use crate::config::Config;
use crate::expiry::{is_active_at, resolve_expiry};
use crate::models::{AutoRemovePolicy, MonthIndex, RecurrenceRule, TimeOfDay};
use crate::recur::{occurrences_in_month, resolve_monthly, resolve_yearly};
use crate::utils::{
    date_string, elapsed_between, format_time_12h_with, max_iso_weeks_in_year, page_years, parse_time_12h,
};

#[derive(Parser)]
#[command(name = "gamify")]
#[command(about = "Recurrence and time arithmetic for habit tracking")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time-of-day conversions
    Time {
        #[command(subcommand)]
        subcommand: TimeCommands,
    },
    /// Resolve a recurrence rule for a month (monthly rules) or a year (yearly rules)
    Resolve {
        /// Rule as JSON, e.g. '{"type":"MONTHLY","dates":[31],"invalidDateStrategy":"SKIP"}'
        #[arg(long)]
        rule: String,
        #[arg(long)]
        year: i32,
        /// Month number, 1 (January) to 12 (December)
        #[arg(long)]
        month: Option<u32>,
    },
    /// Check whether a recurrence rule selection is complete
    Check {
        /// Rule as JSON
        #[arg(long)]
        rule: String,
    },
    /// List every date a rule hits in a month
    Occurrences {
        /// Rule as JSON
        #[arg(long)]
        rule: String,
        #[arg(long)]
        year: i32,
        /// Month number, 1 (January) to 12 (December)
        #[arg(long)]
        month: u32,
    },
    /// Compute when a task expires under an auto-remove policy
    Expiry {
        /// Creation time, UTC milliseconds
        #[arg(long)]
        created: i64,
        /// Policy as JSON, e.g. '{"type":"AFTER_GIVEN_DURATION","unit":"MONTH","count":1}'
        #[arg(long)]
        policy: String,
        /// Reference time for the active check, UTC milliseconds (defaults to now)
        #[arg(long, allow_hyphen_values = true)]
        now: Option<i64>,
    },
    /// Number of ISO weeks in a year
    Weeks {
        year: i32,
    },
    /// Page of years containing the anchor year (defaults to the current year)
    Years {
        anchor: Option<i32>,
    },
}

#[derive(Subcommand)]
pub enum TimeCommands {
    /// Show an HHMM value as a 12-hour time
    Format {
        value: u16,
    },
    /// Convert a 12-hour time such as "9:30 PM" to HHMM
    Parse {
        value: String,
    },
    /// Time elapsed from start to end (HHMM values, wraps past midnight)
    Elapsed {
        start: u16,
        end: u16,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    handle_command(cli, &config)
}

fn handle_command(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Time { subcommand } => handle_time(subcommand, config),
        Commands::Resolve { rule, year, month } => handle_resolve(&rule, year, month),
        Commands::Check { rule } => handle_check(&rule),
        Commands::Occurrences { rule, year, month } => handle_occurrences(&rule, year, month),
        Commands::Expiry { created, policy, now } => {
            let now = now.unwrap_or_else(|| Utc::now().timestamp_millis());
            handle_expiry(created, &policy, now)
        }
        Commands::Weeks { year } => {
            println!("{}", max_iso_weeks_in_year(year)?);
            Ok(())
        }
        Commands::Years { anchor } => {
            let anchor = anchor.unwrap_or_else(|| Utc::now().year());
            let page = page_years(anchor, config.year_page_size)?;
            print!("{}", format_year_page(&page, 6));
            Ok(())
        }
    }
}

fn handle_time(cmd: TimeCommands, config: &Config) -> Result<()> {
    match cmd {
        TimeCommands::Format { value } => {
            let time = TimeOfDay::new(value)?;
            println!("{}", format_time_12h_with(Some(time), config.hour_padding));
        }
        TimeCommands::Parse { value } => {
            let time = parse_time_12h(&value)?;
            println!("{}", time.value());
        }
        TimeCommands::Elapsed { start, end } => {
            let start = TimeOfDay::new(start).context("Invalid start time")?;
            let end = TimeOfDay::new(end).context("Invalid end time")?;
            println!("{}", elapsed_between(Some(start), Some(end)));
        }
    }
    Ok(())
}

fn parse_rule(json: &str) -> Result<RecurrenceRule> {
    let rule: RecurrenceRule = serde_json::from_str(json)
        .context("Invalid recurrence rule JSON")?;
    rule.validate()?;
    log::debug!("parsed {} rule: {:?}", rule.kind(), rule);
    Ok(rule)
}

fn handle_resolve(rule_json: &str, year: i32, month: Option<u32>) -> Result<()> {
    let rule = parse_rule(rule_json)?;

    match &rule {
        RecurrenceRule::Daily => println!("every day"),
        RecurrenceRule::Weekly(weekly) => print!("{}", format_weekdays(&weekly.weekdays)),
        RecurrenceRule::Monthly(monthly) => {
            let Some(month) = month else {
                anyhow::bail!("--month is required to resolve a monthly rule");
            };
            let month = MonthIndex::from_number(month)?;
            print!("{}", format_resolved_days(&resolve_monthly(monthly, year, month)));
        }
        RecurrenceRule::Yearly(yearly) => {
            print!("{}", format_yearly_codes(&resolve_yearly(yearly, year))?);
        }
    }
    Ok(())
}

fn handle_check(rule_json: &str) -> Result<()> {
    let rule = parse_rule(rule_json)?;
    print!("{}", format_check_report(&rule));
    Ok(())
}

fn handle_occurrences(rule_json: &str, year: i32, month: u32) -> Result<()> {
    let rule = parse_rule(rule_json)?;
    let month = MonthIndex::from_number(month)?;
    print!("{}", format_occurrences(&occurrences_in_month(&rule, year, month)));
    Ok(())
}

fn handle_expiry(created: i64, policy_json: &str, now: i64) -> Result<()> {
    let policy: AutoRemovePolicy = serde_json::from_str(policy_json)
        .context("Invalid auto-remove policy JSON")?;

    match resolve_expiry(created, &policy)? {
        Some(expiry) => println!("{}\t{}", expiry, date_string(expiry, true)?),
        None => println!("never"),
    }
    let active = is_active_at(created, &policy, now)?;
    println!("active: {}", if active { "yes" } else { "no" });
    Ok(())
}
