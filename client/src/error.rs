use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Invalid cluster '{0}'")]
    Cluster(String),

    #[error("Invalid commitment '{0}'")]
    Commitment(String),

    #[error("Anchor client error: {0}")]
    Anchor(#[from] anchor_client::ClientError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
