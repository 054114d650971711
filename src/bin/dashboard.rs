use anyhow::Result;
use clap::Parser;
use infohub::client::implementation::DEFAULT_API_URL;
use infohub::{Dashboard, DashboardClient, ModuleState};

/// Loads each InfoHub module once and prints what it shows.
#[derive(Debug, Parser)]
#[command(name = "infohub-dashboard", version)]
struct Args {
    /// InfoHub API base URL (falls back to INFOHUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// City for the weather panel
    #[arg(long)]
    city: Option<String>,

    /// INR amount for the currency panel
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "infohub=warn".into()),
        )
        .init();

    let args = Args::parse();
    let api_url = args
        .api_url
        .or_else(|| std::env::var("INFOHUB_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let mut dashboard = Dashboard::new(DashboardClient::new(api_url));
    dashboard.refresh().await;
    if let Some(city) = args.city {
        dashboard.load_weather(&city).await;
    }
    if let Some(amount) = args.amount {
        dashboard.load_conversion(amount).await;
    }

    print_panel("Weather", dashboard.weather.state(), |w| {
        format!(
            "{}: {}°C (feels like {}°C), {} - {}, humidity {}%, wind {} m/s, {} hPa, visibility {} km",
            w.city,
            w.temperature,
            w.feels_like,
            w.condition,
            w.description,
            w.humidity,
            w.wind_speed,
            w.pressure,
            w.visibility
        )
    });
    print_panel("Currency", dashboard.currency.state(), |c| {
        format!(
            "₹{} = ${} | €{} | £{}",
            c.amount, c.rates.usd.amount, c.rates.eur.amount, c.rates.gbp.amount
        )
    });
    print_panel("Quote", dashboard.quote.state(), |q| {
        format!(
            "\"{}\" - {} ({}/{})",
            q.text,
            q.author,
            q.id + 1,
            q.total_quotes
        )
    });

    Ok(())
}

fn print_panel<T>(title: &str, state: &ModuleState<T>, describe: impl Fn(&T) -> String) {
    match state {
        ModuleState::Idle => println!("{title}: not loaded"),
        ModuleState::Loading => println!("{title}: loading..."),
        ModuleState::Ready(data) => println!("{title}: {}", describe(data)),
        ModuleState::Failed(message) => println!("{title}: error: {message}"),
    }
}
