//! Medalboard CLI
//!
//! Command-line interface for Medalboard:
//! - Show the home view and country detail views from a running server
//! - Inspect a dataset file offline
//! - Export chart data as CSV
//! - Check server status

use clap::{Parser, Subcommand, ValueEnum};
use medalboard::aggregate::{self, CountryDetail, DetailState, HomeSummary};
use medalboard::dataset::{FileSource, SnapshotStore};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medalboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Olympic medals dashboard client")]
#[command(long_about = "Medalboard serves chart-ready views of an Olympic participation dataset.\nQuery a running server, or inspect a dataset file directly.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the home view: counts and medals per country
    Home,

    /// List countries
    Countries,

    /// Show the detail view for one country
    Country {
        /// Country id
        id: String,
    },

    /// Show server status
    Status,

    /// Aggregate a local dataset file without a server
    Inspect {
        /// Path to the JSON dataset
        path: PathBuf,
        /// Show the detail view for this country instead of the home view
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Export chart data as CSV
    Export {
        #[command(subcommand)]
        view: ExportView,
        /// Output file (default: stdout)
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ExportView {
    /// Pie chart data: medals per country
    Home,
    /// Line chart data: medals per year for one country
    Country {
        /// Country id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Home => {
            let summary: HomeSummary = fetch(&client, &format!("{}/api/v1/home", cli.api_url)).await?;
            print_home(&summary, cli.format)?;
        }

        Commands::Countries => {
            let list: serde_json::Value =
                fetch(&client, &format!("{}/api/v1/countries", cli.api_url)).await?;

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                println!("ID     Country");
                println!("{}", "-".repeat(30));
                for country in list["countries"].as_array().into_iter().flatten() {
                    println!(
                        "{:<6} {}",
                        country["id"].as_u64().unwrap_or(0),
                        country["country"].as_str().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Country { id } => {
            let id = parse_id_or_exit(&id);
            let detail: CountryDetail =
                fetch(&client, &format!("{}/api/v1/countries/{}", cli.api_url, id)).await?;
            print_detail(&detail, cli.format)?;
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Medalboard v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Dataset:    {}", health["dataset"].as_str().unwrap_or("unknown"));
                    println!("Source:     {}", health["source"].as_str().unwrap_or("-"));

                    if let Some(countries) = health["countries"].as_u64() {
                        println!("Countries:  {}", countries);
                    }
                    if let Some(loaded_at) = health["loaded_at"].as_str() {
                        println!("Loaded at:  {}", loaded_at);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Medalboard API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Medalboard API server is running:");
                    eprintln!("  cargo run --bin medalboard");
                    std::process::exit(1);
                }
            }
        }

        Commands::Inspect { path, country } => {
            let store = SnapshotStore::new(Box::new(FileSource::new(&path)));

            let Some(snapshot) = store.load().await else {
                eprintln!("No data: failed to load {:?}", path);
                std::process::exit(1);
            };

            match country {
                None => print_home(&aggregate::summarize(snapshot.countries()), cli.format)?,
                Some(raw) => {
                    let id = parse_id_or_exit(&raw);
                    match aggregate::resolve_detail(store.subscribe(), id).await {
                        DetailState::Success { data } => print_detail(&data, cli.format)?,
                        DetailState::NotFound { message } | DetailState::Error { message } => {
                            eprintln!("{}", message);
                            std::process::exit(1);
                        }
                        DetailState::Loading => {
                            eprintln!("Dataset still loading");
                            std::process::exit(1);
                        }
                    }
                }
            }
        }

        Commands::Export { view, output } => {
            let mut writer = csv::Writer::from_writer(open_output(output.as_ref())?);

            match view {
                ExportView::Home => {
                    let summary: HomeSummary =
                        fetch(&client, &format!("{}/api/v1/home", cli.api_url)).await?;
                    write_pie_csv(&mut writer, &summary)?;
                }
                ExportView::Country { id } => {
                    let id = parse_id_or_exit(&id);
                    let detail: CountryDetail =
                        fetch(&client, &format!("{}/api/v1/countries/{}", cli.api_url, id)).await?;
                    write_line_csv(&mut writer, &detail)?;
                }
            }

            writer.flush()?;
            if let Some(path) = output {
                println!("Exported to {:?}", path);
            }
        }

        Commands::Config { output } => {
            let config = medalboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// GET a JSON resource, exiting with the server's message on error statuses
async fn fetch<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"].as_str().unwrap_or("request failed");
        eprintln!("Failed ({}): {}", status, message);
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn parse_id_or_exit(raw: &str) -> u32 {
    match aggregate::parse_country_id(Some(raw)) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn open_output(path: Option<&PathBuf>) -> std::io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    })
}

fn print_home(summary: &HomeSummary, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            write_pie_csv(&mut writer, summary)?;
            writer.flush()?;
        }
        Format::Table => {
            println!("Number of JOs:       {}", summary.total_participations);
            println!("Number of countries: {}", summary.total_countries);
            println!();
            println!("ID     Country                  Medals");
            println!("{}", "-".repeat(40));
            for datum in &summary.pie_chart {
                println!("{:<6} {:<24} {}", datum.id, datum.name, datum.value);
            }
        }
    }
    Ok(())
}

fn print_detail(detail: &CountryDetail, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(detail)?),
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            write_line_csv(&mut writer, detail)?;
            writer.flush()?;
        }
        Format::Table => {
            println!("{}", detail.country);
            println!();
            println!("Number of entries:  {}", detail.totals.distinct_participations);
            println!("Total medals:       {}", detail.totals.medals);
            println!("Total athletes:     {}", detail.totals.athletes);
            println!();
            println!("Year     Medals");
            println!("{}", "-".repeat(20));
            for series in &detail.line_chart {
                for point in &series.series {
                    println!("{:<8} {}", point.name, point.value);
                }
            }
        }
    }
    Ok(())
}

fn write_pie_csv<W: Write>(
    writer: &mut csv::Writer<W>,
    summary: &HomeSummary,
) -> Result<(), csv::Error> {
    writer.write_record(["id", "country", "medals"])?;
    for datum in &summary.pie_chart {
        writer.write_record([datum.id.to_string(), datum.name.clone(), datum.value.to_string()])?;
    }
    Ok(())
}

fn write_line_csv<W: Write>(
    writer: &mut csv::Writer<W>,
    detail: &CountryDetail,
) -> Result<(), csv::Error> {
    writer.write_record(["country", "year", "medals"])?;
    for series in &detail.line_chart {
        for point in &series.series {
            let medals = point.value.to_string();
            writer.write_record([series.name.as_str(), point.name.as_str(), medals.as_str()])?;
        }
    }
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
