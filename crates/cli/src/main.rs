use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riskreturn_core::service::AnalysisService;

#[derive(Debug, Parser)]
#[command(name = "riskreturn")]
struct Args {
    /// Dataset CSV. Defaults to COMPANIES_DATA_PATH or data/companies_data.csv.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List company names in dataset order.
    List,
    /// Metrics and recommendation for one company.
    Analyze { name: String },
    /// Metrics for several companies, in the order given.
    Compare { names: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = riskreturn_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let data_path = args.data.clone().unwrap_or(settings.data_path);
    let index = riskreturn_core::dataset::load_csv_path(&data_path)
        .with_context(|| format!("loading dataset {}", data_path.display()))?;
    let service = AnalysisService::new(Arc::new(index));

    match run(&service, &args.command) {
        Ok(body) => {
            print_json(&body, args.compact)?;
            Ok(())
        }
        Err(body) => {
            print_json(&body, args.compact)?;
            std::process::exit(1);
        }
    }
}

/// Produces the same JSON bodies as the HTTP API; `Err` carries the error envelope.
fn run(
    service: &AnalysisService,
    command: &Command,
) -> Result<serde_json::Value, serde_json::Value> {
    let result = match command {
        Command::List => {
            let companies = service.get_all();
            Ok(json!({
                "status": "success",
                "companies": companies,
                "total": companies.len(),
            }))
        }
        Command::Analyze { name } => service.analyze(name).map(|a| {
            json!({
                "status": "success",
                "company": a.company,
                "metrics": a.metrics,
                "recommendation": a.recommendation,
            })
        }),
        Command::Compare { names } => service.compare(names.as_slice()).map(|comparison| {
            json!({
                "status": "success",
                "total": comparison.len(),
                "comparison": comparison,
            })
        }),
    };

    result.map_err(|err| {
        tracing::warn!(error = %err, "query failed");
        json!({"status": "error", "message": err.to_string()})
    })
}

fn print_json(value: &serde_json::Value, compact: bool) -> anyhow::Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn init_sentry(settings: &riskreturn_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
