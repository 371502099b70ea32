use std::path::PathBuf;

use clap::Parser;
use covid_stats::{draw, normalize, CaseTable, CovidStats};
use miette::{IntoDiagnostic, Result};

/// Plot COVID-19 trajectories of Polish voivodeships.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Normalize case counts by population size [per 100 000]
    #[arg(long)]
    normalize: bool,

    /// Fetch the case table from this URL
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the case table from a local CSV file instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the chart
    #[arg(long, default_value = "covid.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table: CaseTable = match &args.input {
        Some(path) => {
            println!("opening {}", path.display());
            let csv = std::fs::read_to_string(path).into_diagnostic()?;
            csv.parse().into_diagnostic()?
        }
        None => {
            let stats = match &args.url {
                Some(url) => CovidStats::with_url(url),
                None => CovidStats::new(),
            };
            println!("fetching {}", stats.url());
            stats.get_data().into_diagnostic()?
        }
    };

    let (table, y_desc) = if args.normalize {
        (normalize(&table).into_diagnostic()?, "new cases per 100 000")
    } else {
        (table, "new cases")
    };

    draw(&table, &args.output, y_desc).into_diagnostic()?;
    println!("wrote chart to {}", args.output.display());

    Ok(())
}
