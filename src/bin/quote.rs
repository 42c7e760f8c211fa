//! Command-line front end for the quote core
//!
//! Stands in for the site's UI adapter: takes raw form values, prints what
//! the page would render.

use anyhow::{Context, Result};
use broker_quote::claims::{status_progress, StepController};
use broker_quote::commission::{compute_commission, CommissionInputs};
use broker_quote::dashboard::{claims_overview, load_leads_from_reader, monthly_performance, sample_leads, RenewalUrgency};
use broker_quote::estimator::{quote_batch, read_requests, write_quotes, PremiumEstimator, PremiumInputs, RateCard};
use broker_quote::format::format_usd;
use broker_quote::plans::{BillingCycle, Plan, PlanSelector};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "quote", version, about = "Vehicle insurance quote and commission calculator")]
struct Cli {
    #[arg(long, global = true, help = "Rate card JSON overriding the built-in rates")]
    rates: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate a premium from estimator form values
    Estimate {
        #[arg(long, default_value = "car")]
        vehicle_type: String,
        #[arg(long, default_value = "0")]
        value: String,
        #[arg(long, default_value = "basic")]
        coverage: String,
        #[arg(long = "addon")]
        addons: Vec<String>,
    },
    /// Dealer commission for policies sold
    Commission {
        #[arg(long, default_value = "0")]
        policies: String,
        #[arg(long, default_value = "0")]
        avg_premium: String,
        #[arg(long, default_value = "0")]
        rate: String,
    },
    /// Walk the claim form through a sequence of moves
    Steps {
        #[arg(long, default_value_t = 4)]
        total: usize,
        #[arg(value_enum)]
        moves: Vec<Move>,
    },
    /// Plan prices under a billing cycle
    Plan {
        #[arg(long = "price", required = true, help = "Monthly price per plan card")]
        prices: Vec<String>,
        #[arg(long)]
        yearly: bool,
        #[arg(long)]
        select: Option<usize>,
    },
    /// Price a CSV of estimator submissions
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, help = "Output CSV (stdout if omitted)")]
        output: Option<PathBuf>,
    },
    /// Dashboard charts, leads and renewal urgency
    Dashboard {
        #[arg(long, help = "Leads CSV (sample leads if omitted)")]
        leads: Option<PathBuf>,
        #[arg(long, help = "Today's date, YYYY-MM-DD")]
        today: Option<NaiveDate>,
        #[arg(long = "renewal", help = "Renewal date, YYYY-MM-DD")]
        renewals: Vec<NaiveDate>,
        #[arg(long = "claim-status")]
        claim_statuses: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Move {
    Next,
    Previous,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rates = match &cli.rates {
        Some(path) => RateCard::from_json_path(path)
            .with_context(|| format!("loading rate card {}", path.display()))?,
        None => RateCard::default(),
    };

    match cli.command {
        Commands::Estimate { vehicle_type, value, coverage, addons } => {
            let inputs = PremiumInputs::from_form(&vehicle_type, &value, &coverage, &addons);
            let quote = PremiumEstimator::new(rates).estimate(&inputs);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Base premium: {}", format_usd(quote.base));
                for charge in &quote.addon_charges {
                    println!("  + {:<12} {}", charge.addon, format_usd(charge.amount));
                }
                println!("Estimated premium: {}", quote.display());
            }
        }
        Commands::Commission { policies, avg_premium, rate } => {
            let inputs = CommissionInputs::from_form(&policies, &avg_premium, &rate);
            let commission = compute_commission(&inputs);
            if cli.json {
                println!("{}", serde_json::json!({ "inputs": inputs, "commission": commission }));
            } else {
                println!("Commission: {}", format_usd(commission));
            }
        }
        Commands::Steps { total, moves } => {
            let mut steps = StepController::new(total);
            for mv in moves {
                match mv {
                    Move::Next => steps.next(),
                    Move::Previous => steps.previous(),
                };
            }
            if cli.json {
                println!("{}", serde_json::json!({
                    "current_step": steps.current_step(),
                    "total_steps": steps.total_steps(),
                    "progress_percent": steps.progress_percent(),
                }));
            } else {
                println!(
                    "Step {} of {} ({:.0}%)",
                    steps.current_step() + 1,
                    steps.total_steps(),
                    steps.progress_percent()
                );
            }
        }
        Commands::Plan { prices, yearly, select } => {
            let plans = prices
                .iter()
                .enumerate()
                .map(|(i, p)| Plan::from_form(format!("Plan {}", i + 1), p))
                .collect();
            let mut selector = PlanSelector::new(plans);
            selector.set_billing(BillingCycle::from_toggle(yearly));
            if let Some(index) = select {
                selector.select(index);
            }
            for (i, price) in selector.prices().iter().enumerate() {
                let marker = if selector.selected_index() == Some(i) { "*" } else { " " };
                println!("{} Plan {}: ${}", marker, i + 1, price);
            }
        }
        Commands::Batch { input, output } => {
            let start = Instant::now();
            let file = File::open(&input).with_context(|| format!("opening {}", input.display()))?;
            let requests = read_requests(BufReader::new(file))?;
            log::info!("Loaded {} quote requests in {:?}", requests.len(), start.elapsed());

            let rows = quote_batch(&PremiumEstimator::new(rates), &requests);

            match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                    write_quotes(BufWriter::new(file), &rows)?;
                    log::info!("Wrote {} quotes to {}", rows.len(), path.display());
                }
                None => write_quotes(io::stdout().lock(), &rows)?,
            }
            log::info!("Batch complete in {:?}", start.elapsed());
        }
        Commands::Dashboard { leads, today, renewals, claim_statuses } => {
            let leads = match leads {
                Some(path) => {
                    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
                    load_leads_from_reader(BufReader::new(file))?
                }
                None => sample_leads()?,
            };
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let urgencies: Vec<RenewalUrgency> = renewals
                .iter()
                .map(|&date| RenewalUrgency::from_dates(date, today))
                .collect();
            let progress: Vec<u8> = claim_statuses.iter().map(|s| status_progress(s)).collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                    "claims_overview": claims_overview(),
                    "monthly_performance": monthly_performance(),
                    "leads": leads,
                    "renewals": urgencies,
                    "claim_progress": progress,
                }))?);
            } else {
                println!("Claims overview:");
                for slice in claims_overview() {
                    println!("  {:<12} {}", slice.name, slice.value);
                }
                println!("Monthly performance:");
                for point in monthly_performance() {
                    println!("  {} {}", point.month, point.claims_settled);
                }
                println!("Leads:");
                for lead in &leads {
                    println!("  {:>3} {:<16} {:<10} {:>8} {}", lead.id, lead.name, lead.status.as_str(), lead.value, lead.date);
                }
                for (date, urgency) in renewals.iter().zip(&urgencies) {
                    println!("Renewal {}: {:?}", date, urgency);
                }
                for (status, pct) in claim_statuses.iter().zip(&progress) {
                    println!("Claim {}: {}%", status, pct);
                }
            }
        }
    }

    Ok(())
}
