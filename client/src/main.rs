use anchor_client::solana_sdk::{native_token::lamports_to_sol, pubkey::Pubkey};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use token_launchpad::models::config::UpdateConfigParams;
use token_launchpad_client::{
    config::{COMMITMENT_ENV, PROVIDER_URL_ENV, WALLET_ENV},
    LaunchpadClient, ProviderConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "launchpad-cli",
    version,
    about = "Configure and inspect the token launchpad program",
    long_about = None
)]
struct Cli {
    /// RPC endpoint or cluster moniker
    #[arg(long, env = PROVIDER_URL_ENV, global = true)]
    url: Option<String>,

    /// Keypair file of the signer
    #[arg(long, env = WALLET_ENV, global = true)]
    wallet: Option<String>,

    #[arg(long, env = COMMITMENT_ENV, global = true)]
    commitment: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the global config with default parameters
    Initialize,
    /// Create or reset the global config
    InitConfig {
        #[arg(long)]
        treasury: Pubkey,
        /// Graduation threshold in lamports
        #[arg(long)]
        threshold: u64,
    },
    /// Change selected config fields
    UpdateConfig {
        #[arg(long)]
        new_authority: Option<Pubkey>,
        #[arg(long)]
        treasury: Option<Pubkey>,
        #[arg(long)]
        buy_fee_bps: Option<u16>,
        #[arg(long)]
        sell_fee_bps: Option<u16>,
        #[arg(long)]
        creation_fee: Option<u64>,
        #[arg(long)]
        threshold: Option<u64>,
        #[arg(long)]
        relayer: Option<Pubkey>,
        #[arg(long)]
        paused: Option<bool>,
    },
    /// Print the global config
    ShowConfig,
    /// Print a bonding curve
    ShowCurve {
        #[arg(long)]
        mint: Pubkey,
        #[arg(long)]
        creator: Pubkey,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // .env values must be in the environment before clap reads its `env` fallbacks
    dotenv().ok();
    let cli = Cli::parse();
    let provider = ProviderConfig::from_values(cli.url, cli.wallet, cli.commitment)
        .context("resolving provider configuration")?;
    let client = LaunchpadClient::connect(&provider).context("connecting to cluster")?;

    match cli.command {
        Commands::Initialize => {
            let tx = client.initialize().context("initialize failed")?;
            info!("Your transaction signature {}", tx);
        }
        Commands::InitConfig {
            treasury,
            threshold,
        } => {
            let tx = client
                .init_global_config(treasury, threshold)
                .context("init_global_config failed")?;
            info!("Your transaction signature {}", tx);
        }
        Commands::UpdateConfig {
            new_authority,
            treasury,
            buy_fee_bps,
            sell_fee_bps,
            creation_fee,
            threshold,
            relayer,
            paused,
        } => {
            let params = UpdateConfigParams {
                new_authority,
                treasury,
                buy_fee_bps,
                sell_fee_bps,
                creation_fee,
                graduation_threshold: threshold,
                allowed_relayer: relayer,
                paused,
            };
            let tx = client
                .update_global_config(params)
                .context("update_global_config failed")?;
            info!("Your transaction signature {}", tx);
        }
        Commands::ShowConfig => {
            let cfg = client.global_config().context("fetching global config")?;
            println!("authority:            {}", cfg.authority);
            println!("treasury:             {}", cfg.treasury);
            println!("allowed relayer:      {}", cfg.allowed_relayer);
            println!("buy fee (bps):        {}", cfg.fees.buy_fee_bps);
            println!("sell fee (bps):       {}", cfg.fees.sell_fee_bps);
            println!("creation fee (SOL):   {}", lamports_to_sol(cfg.creation_fee));
            println!(
                "graduation (SOL):     {}",
                lamports_to_sol(cfg.graduation_threshold)
            );
            println!("tokens created:       {}", cfg.total_tokens_created);
            println!("volume (lamports):    {}", cfg.total_volume_sol);
            println!("paused:               {}", cfg.paused);
        }
        Commands::ShowCurve { mint, creator } => {
            let curve = client
                .bonding_curve(&mint, &creator)
                .context("fetching bonding curve")?;
            println!("state:                  {:?}", curve.graduated);
            println!("virtual sol reserves:   {}", curve.virtual_sol_reserves);
            println!("virtual token reserves: {}", curve.virtual_token_reserves);
            println!("real sol reserves:      {}", curve.real_sol_reserves);
            println!("real token reserves:    {}", curve.real_token_reserves);
            if let Some(pool) = curve.pool {
                println!("pool:                   {}", pool);
            }
        }
    }

    Ok(())
}
