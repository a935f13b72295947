use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Report, Result};
use receipt_points::application::processor::in_memory_processor;
use receipt_points::domain::scoring;
use receipt_points::interfaces::csv::points_writer::PointsWriter;
use receipt_points::interfaces::http::server::{ServerConfig, run_server};
use receipt_points::interfaces::json::receipt_reader::ReceiptReader;
use std::fs::File;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the receipt processing HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "RECEIPT_POINTS_LISTEN", default_value = "0.0.0.0:8080")]
        listen: SocketAddr,
    },
    /// Score receipts from a JSON file and print the points as CSV
    Score {
        /// File holding one or more receipt JSON documents
        input: PathBuf,

        /// Print each rule's contribution alongside the total
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Command::Serve { listen } => {
            run_server(ServerConfig { listen }, in_memory_processor())
                .await
                .into_diagnostic()?;
        }
        Command::Score { input, explain } => score(input, explain)?,
    }

    Ok(())
}

fn score(input: PathBuf, explain: bool) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = ReceiptReader::new(file);

    let stdout = io::stdout();
    let mut writer = PointsWriter::new(stdout.lock(), explain).into_diagnostic()?;

    for (index, result) in reader.receipts().enumerate() {
        match result {
            Ok(receipt) => writer
                .write_breakdown(index + 1, &scoring::breakdown(&receipt))
                .into_diagnostic()?,
            Err(e) => eprintln!("Error reading receipt {}: {:?}", index + 1, Report::from_err(e)),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
