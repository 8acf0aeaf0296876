use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use used_car_analyzer::{
    app::{profit_summary, App, DealPlan, CHART_ROWS},
    domain::{
        profit::DEFAULT_MONTHLY_GOAL,
        valuation::{DEFAULT_MODEL_YEAR, DEFAULT_ODOMETER_MILES},
        ProfitInput, TitleStatus, ValuationInput, VehicleType, CURRENT_YEAR,
    },
    infra::{discover_source, load_reference_data, save_catalog_file, CATALOG_ENV},
    util::version::{version_label, APP_NAME},
};

#[derive(Parser)]
#[command(name = "used-car-analyzer")]
#[command(version, about = "Used vehicle valuation and profit calculator", long_about = None)]
struct Cli {
    /// Reference data file (defaults to the user config dir, then the built-in catalog)
    #[arg(long, global = true, env = CATALOG_ENV)]
    catalog: Option<PathBuf>,

    /// Year used to compute vehicle age
    #[arg(long, global = true, default_value_t = CURRENT_YEAR)]
    current_year: i32,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank models by estimated regional sales
    Market {
        /// Location text, e.g. a ZIP, city or state ("CA", "Texas")
        #[arg(short, long, default_value = "")]
        location: String,

        #[arg(short = 't', long, value_enum, default_value_t = TypeFilter::All)]
        vehicle_type: TypeFilter,

        /// Number of rows to show
        #[arg(long, default_value_t = CHART_ROWS)]
        top: usize,
    },

    /// Estimate market value and days to sell, with a profit projection
    Value {
        /// Model full name, e.g. "Ford F-150"
        model: String,

        #[arg(short, long, default_value_t = DEFAULT_MODEL_YEAR)]
        year: i32,

        #[arg(short, long, default_value_t = DEFAULT_ODOMETER_MILES as i64)]
        miles: i64,

        /// Salvage or rebuilt title
        #[arg(long)]
        salvage: bool,

        #[arg(short = 't', long, value_enum, default_value_t = TypeFilter::All)]
        vehicle_type: TypeFilter,

        /// Buy price (defaults to 85% of the estimated value)
        #[arg(long)]
        buy: Option<u32>,

        /// Sell price (defaults to the estimated value)
        #[arg(long)]
        sell: Option<u32>,

        /// Cars sold per month
        #[arg(long)]
        goal: Option<u32>,
    },

    /// Project profit for a buy/sell price pair
    Profit {
        #[arg(long)]
        buy: u32,

        #[arg(long)]
        sell: u32,

        #[arg(long, default_value_t = DEFAULT_MONTHLY_GOAL)]
        goal: u32,
    },

    /// List region rules and their keywords
    Regions,

    /// Write the active reference data to a JSON file
    ExportCatalog {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TypeFilter {
    All,
    Truck,
    Suv,
    Sedan,
}

impl TypeFilter {
    fn vehicle_type(self) -> Option<VehicleType> {
        match self {
            Self::All => None,
            Self::Truck => Some(VehicleType::Truck),
            Self::Suv => Some(VehicleType::Suv),
            Self::Sedan => Some(VehicleType::Sedan),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(app = APP_NAME, version = %version_label(), "starting");

    let source = discover_source(cli.catalog);
    let data = load_reference_data(source).context("failed to load reference data")?;
    let app = App::new(data, cli.current_year);

    match cli.command {
        Commands::Market {
            location,
            vehicle_type,
            top,
        } => {
            print!("{}", app.market_report(&location, vehicle_type.vehicle_type(), top));
        }
        Commands::Value {
            model,
            year,
            miles,
            salvage,
            vehicle_type,
            buy,
            sell,
            goal,
        } => {
            let title = if salvage {
                TitleStatus::SalvageRebuilt
            } else {
                TitleStatus::Clean
            };
            let input = ValuationInput::new(year, miles, title)?;
            let record = app.select_record(&model, vehicle_type.vehicle_type())?;
            let plan = DealPlan {
                buy_price: buy,
                sell_price: sell,
                monthly_goal: goal,
            };
            print!("{}", app.valuation_report(record, &input, plan)?);
        }
        Commands::Profit { buy, sell, goal } => {
            let input = ProfitInput::new(buy, sell, goal)?;
            print!("{}", profit_summary(&input.compute(), input.monthly_goal));
        }
        Commands::Regions => {
            print!("{}", app.regions_report());
        }
        Commands::ExportCatalog { path } => {
            save_catalog_file(&path, &app.data().to_file())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
