use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sui_read_rpc::{
    shared::LoggingUtils, Address, AppConfig, CallContext, ObjectId, ReadObjectApi,
    ReadObjectService,
};
use tracing::{error, info, warn};

/// Query objects and balances from a Sui node
#[derive(Parser, Debug)]
#[command(name = "sui-read", version, about)]
struct Cli {
    /// Node RPC URL (overrides configuration)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Configuration file name (any format supported by `config`)
    #[arg(long, global = true, default_value = "SuiRead")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an object's decoded details
    Object { object_id: String },
    /// List objects owned by an address
    OwnedByAddress { address: String },
    /// List objects owned by another object
    OwnedByObject { object_id: String },
    /// Fetch an object with its raw BCS bytes
    RawObject { object_id: String },
    /// Total native coin balance of an address
    Balance { address: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    info!(rpc_url = %config.rpc.rpc_url, "Starting sui-read");

    if let Err(e) = run(cli.command, &config).await {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> sui_read_rpc::AppResult<AppConfig> {
    let config = AppConfig::load_from(&cli.config)?;
    match &cli.rpc_url {
        Some(url) => config.with_rpc_url(url.clone()),
        None => Ok(config),
    }
}

async fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let client = ReadObjectService::from_config(config).context("building client")?;
    // each request is bounded by the client timeout; the command as a whole is not
    let ctx = CallContext::background();

    match command {
        Command::Object { object_id } => {
            print_json(&client.get_object(&ctx, &ObjectId::new(object_id)).await?)
        }
        Command::OwnedByAddress { address } => print_json(
            &client
                .get_objects_owned_by_address(&ctx, &Address::new(address))
                .await?,
        ),
        Command::OwnedByObject { object_id } => print_json(
            &client
                .get_objects_owned_by_object(&ctx, &ObjectId::new(object_id))
                .await?,
        ),
        Command::RawObject { object_id } => {
            print_json(&client.get_raw_object(&ctx, &ObjectId::new(object_id)).await?)
        }
        Command::Balance { address } => {
            let address = Address::new(address);
            let balance = client
                .get_balance(&ctx, &address)
                .await
                .with_context(|| format!("computing balance of {}", address))?;
            println!("{}", balance);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
