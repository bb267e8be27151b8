use crate::error::{ClientError, Result};
use anchor_client::{solana_sdk::commitment_config::CommitmentConfig, Cluster};
use dotenv::dotenv;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const COMMITMENT_ENV: &str = "ANCHOR_COMMITMENT";

const DEFAULT_CLUSTER: &str = "localnet";
const DEFAULT_COMMITMENT: &str = "confirmed";

/// Cluster, signer and commitment the client talks with, resolved the way
/// Anchor's `AnchorProvider.env()` does.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub cluster: Cluster,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_process_env()
    }

    /// Like `from_env` but with an explicit dotenv file. Variables already
    /// set in the process win over the file.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        dotenv::from_path(path)
            .map_err(|e| ClientError::Environment(format!("{}: {}", path.display(), e)))?;
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self> {
        info!("Loading provider configuration from environment variables.");

        Self::from_values(
            std::env::var(PROVIDER_URL_ENV).ok(),
            std::env::var(WALLET_ENV).ok(),
            std::env::var(COMMITMENT_ENV).ok(),
        )
    }

    /// Unset values fall back to localnet, the default Solana CLI keypair and `confirmed`
    pub fn from_values(
        url: Option<String>,
        wallet: Option<String>,
        commitment: Option<String>,
    ) -> Result<Self> {
        let url = url.unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
        let cluster = Cluster::from_str(&url).map_err(|_| ClientError::Cluster(url.clone()))?;

        let wallet_path = match wallet {
            Some(path) => expand_home(&path)?,
            None => default_wallet_path()?,
        };

        let commitment = commitment.unwrap_or_else(|| DEFAULT_COMMITMENT.to_string());
        let commitment = CommitmentConfig::from_str(&commitment)
            .map_err(|_| ClientError::Commitment(commitment.clone()))?;

        debug!(
            "provider: cluster={} wallet={} commitment={:?}",
            cluster.url(),
            wallet_path.display(),
            commitment.commitment
        );

        Ok(Self {
            cluster,
            wallet_path,
            commitment,
        })
    }
}

fn default_wallet_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ClientError::Environment("home directory not found".to_string()))?;
    Ok(home.join(".config").join("solana").join("id.json"))
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir()
                .ok_or_else(|| ClientError::Environment("home directory not found".to_string()))?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
