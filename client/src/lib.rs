//! Off-chain handle on the token launchpad program.
//!
//! Mirrors what an Anchor TypeScript test does with `AnchorProvider.env()`
//! and `anchor.workspace`: resolve provider settings from the environment,
//! bind a typed client to the program address and send instructions.

pub mod config;
pub mod error;

use anchor_client::{
    solana_sdk::{
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair, Signature},
        signer::Signer,
        system_program,
    },
    Client, Program,
};
use log::info;
use std::rc::Rc;
use token_launchpad::models::{
    config::{GlobalConfig, UpdateConfigParams},
    curve::BondingCurve,
};

pub use config::ProviderConfig;
pub use error::{ClientError, Result};

pub fn global_config_address() -> Pubkey {
    Pubkey::find_program_address(&[GlobalConfig::SEED_PREFIX], &token_launchpad::ID).0
}

pub fn bonding_curve_address(mint: &Pubkey, creator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[BondingCurve::SEED_PREFIX, mint.as_ref(), creator.as_ref()],
        &token_launchpad::ID,
    )
    .0
}

pub struct LaunchpadClient {
    payer: Rc<Keypair>,
    program: Program<Rc<Keypair>>,
}

impl LaunchpadClient {
    pub fn connect(provider: &ProviderConfig) -> Result<Self> {
        let payer = read_keypair_file(&provider.wallet_path).map_err(|e| {
            ClientError::Wallet(format!("{}: {}", provider.wallet_path.display(), e))
        })?;
        let payer = Rc::new(payer);

        let client =
            Client::new_with_options(provider.cluster.clone(), payer.clone(), provider.commitment);
        let program = client.program(token_launchpad::ID)?;

        info!(
            "connected to {} as {} (program {})",
            provider.cluster.url(),
            payer.pubkey(),
            token_launchpad::ID
        );

        Ok(Self { payer, program })
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Sends `initialize` and waits for confirmation
    pub fn initialize(&self) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(token_launchpad::accounts::Initialize {
                authority: self.payer(),
                global_config: global_config_address(),
                system_program: system_program::ID,
            })
            .args(token_launchpad::instruction::Initialize {})
            .send()?;

        Ok(signature)
    }

    pub fn init_global_config(
        &self,
        treasury: Pubkey,
        graduation_threshold: u64,
    ) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(token_launchpad::accounts::InitializeGlobalConfig {
                admin: self.payer(),
                global_config: global_config_address(),
                system_program: system_program::ID,
            })
            .args(token_launchpad::instruction::InitGlobalConfig {
                treasury,
                graduation_threshold,
            })
            .send()?;

        Ok(signature)
    }

    pub fn update_global_config(&self, params: UpdateConfigParams) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(token_launchpad::accounts::UpdateGlobalConfig {
                authority: self.payer(),
                global_config: global_config_address(),
            })
            .args(token_launchpad::instruction::UpdateGlobalConfig { params })
            .send()?;

        Ok(signature)
    }

    pub fn global_config(&self) -> Result<GlobalConfig> {
        Ok(self.program.account(global_config_address())?)
    }

    pub fn bonding_curve(&self, mint: &Pubkey, creator: &Pubkey) -> Result<BondingCurve> {
        Ok(self.program.account(bonding_curve_address(mint, creator))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_address_is_stable() {
        assert_eq!(global_config_address(), global_config_address());
        assert!(!global_config_address().is_on_curve());
    }

    #[test]
    fn test_bonding_curve_address_depends_on_creator() {
        let mint = Pubkey::new_unique();
        assert_ne!(
            bonding_curve_address(&mint, &Pubkey::new_unique()),
            bonding_curve_address(&mint, &Pubkey::new_unique())
        );
    }
}
