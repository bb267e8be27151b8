use crate::consts::{DEFAULT_CREATION_FEE, DEFAULT_GRADUATION_THRESHOLD, MAX_CREATION_FEE};
use crate::err::LaunchpadError;
use anchor_lang::prelude::*;

use super::fees::Fees;

/// Program-wide settings, a single PDA
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    /// Admin allowed to change the config
    pub authority: Pubkey,
    /// Receives creation and trading fees
    pub treasury: Pubkey,
    pub fees: Fees,
    /// Lamports charged per `create_token`
    pub creation_fee: u64,
    /// Real SOL reserves at which a curve graduates
    pub graduation_threshold: u64,
    pub total_tokens_created: u64,
    pub total_volume_sol: u128,
    /// Off-chain agent that receives graduated liquidity and opens the pool
    pub allowed_relayer: Pubkey,
    pub paused: bool,
    pub bump: u8,
}

impl GlobalConfig {
    pub const SEED_PREFIX: &'static [u8; 13] = b"global-config";

    /// Resets everything but the bump to the launch defaults
    pub fn reset(
        &mut self,
        authority: Pubkey,
        treasury: Pubkey,
        graduation_threshold: u64,
    ) -> Result<()> {
        require!(treasury != Pubkey::default(), LaunchpadError::InvalidTreasury);
        require!(
            graduation_threshold > 0,
            LaunchpadError::InvalidGraduationThreshold
        );

        self.authority = authority;
        self.treasury = treasury;
        self.fees = Fees::default();
        self.creation_fee = DEFAULT_CREATION_FEE;
        self.graduation_threshold = graduation_threshold;
        self.total_tokens_created = 0;
        self.total_volume_sol = 0;
        self.allowed_relayer = authority;
        self.paused = false;

        Ok(())
    }

    pub fn reset_to_defaults(&mut self, authority: Pubkey) -> Result<()> {
        self.reset(authority, authority, DEFAULT_GRADUATION_THRESHOLD)
    }

    /// Applies the set fields of `params`; nothing is written if any is invalid
    pub fn apply_update(&mut self, params: &UpdateConfigParams) -> Result<()> {
        let fees = Fees {
            buy_fee_bps: params.buy_fee_bps.unwrap_or(self.fees.buy_fee_bps),
            sell_fee_bps: params.sell_fee_bps.unwrap_or(self.fees.sell_fee_bps),
        };
        fees.validate()?;

        let creation_fee = params.creation_fee.unwrap_or(self.creation_fee);
        require!(creation_fee <= MAX_CREATION_FEE, LaunchpadError::InvalidFee);

        let treasury = params.treasury.unwrap_or(self.treasury);
        require!(treasury != Pubkey::default(), LaunchpadError::InvalidTreasury);

        let graduation_threshold = params
            .graduation_threshold
            .unwrap_or(self.graduation_threshold);
        require!(
            graduation_threshold > 0,
            LaunchpadError::InvalidGraduationThreshold
        );

        let authority = params.new_authority.unwrap_or(self.authority);
        require!(authority != Pubkey::default(), LaunchpadError::NotAuthorized);

        self.fees = fees;
        self.creation_fee = creation_fee;
        self.treasury = treasury;
        self.graduation_threshold = graduation_threshold;
        self.authority = authority;
        if let Some(relayer) = params.allowed_relayer {
            self.allowed_relayer = relayer;
        }
        if let Some(paused) = params.paused {
            self.paused = paused;
        }

        Ok(())
    }

    pub fn record_volume(&mut self, lamports: u64) -> Result<()> {
        self.total_volume_sol = self
            .total_volume_sol
            .checked_add(lamports as u128)
            .ok_or(LaunchpadError::InvalidTotalVolumeSol)?;
        Ok(())
    }
}

/// Fields left as `None` keep their current value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateConfigParams {
    pub new_authority: Option<Pubkey>,
    pub treasury: Option<Pubkey>,
    pub buy_fee_bps: Option<u16>,
    pub sell_fee_bps: Option<u16>,
    pub creation_fee: Option<u64>,
    pub graduation_threshold: Option<u64>,
    pub allowed_relayer: Option<Pubkey>,
    pub paused: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_BUY_FEE_BPS, MAX_FEE_BPS};

    fn blank_config() -> GlobalConfig {
        GlobalConfig {
            authority: Pubkey::default(),
            treasury: Pubkey::default(),
            fees: Fees::default(),
            creation_fee: 0,
            graduation_threshold: 0,
            total_tokens_created: 0,
            total_volume_sol: 0,
            allowed_relayer: Pubkey::default(),
            paused: false,
            bump: 254,
        }
    }

    fn live_config() -> GlobalConfig {
        let mut cfg = blank_config();
        cfg.reset_to_defaults(Pubkey::new_unique()).unwrap();
        cfg
    }

    #[test]
    fn test_reset_to_defaults() {
        let admin = Pubkey::new_unique();
        let mut cfg = blank_config();
        cfg.total_tokens_created = 9;

        cfg.reset_to_defaults(admin).unwrap();

        assert_eq!(cfg.authority, admin);
        assert_eq!(cfg.treasury, admin);
        assert_eq!(cfg.allowed_relayer, admin);
        assert_eq!(cfg.fees.buy_fee_bps, DEFAULT_BUY_FEE_BPS);
        assert_eq!(cfg.creation_fee, DEFAULT_CREATION_FEE);
        assert_eq!(cfg.graduation_threshold, DEFAULT_GRADUATION_THRESHOLD);
        assert_eq!(cfg.total_tokens_created, 0);
        assert_eq!(cfg.bump, 254);
        assert!(!cfg.paused);
    }

    #[test]
    fn test_reset_rejects_default_treasury() {
        let mut cfg = blank_config();
        let err = cfg
            .reset(Pubkey::new_unique(), Pubkey::default(), 1)
            .unwrap_err();
        assert_eq!(err, LaunchpadError::InvalidTreasury.into());
    }

    #[test]
    fn test_reset_rejects_zero_threshold() {
        let mut cfg = blank_config();
        let err = cfg
            .reset(Pubkey::new_unique(), Pubkey::new_unique(), 0)
            .unwrap_err();
        assert_eq!(err, LaunchpadError::InvalidGraduationThreshold.into());
    }

    #[test]
    fn test_partial_update() {
        let mut cfg = live_config();
        let relayer = Pubkey::new_unique();

        cfg.apply_update(&UpdateConfigParams {
            sell_fee_bps: Some(250),
            allowed_relayer: Some(relayer),
            paused: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(cfg.fees.buy_fee_bps, DEFAULT_BUY_FEE_BPS);
        assert_eq!(cfg.fees.sell_fee_bps, 250);
        assert_eq!(cfg.allowed_relayer, relayer);
        assert!(cfg.paused);
    }

    #[test]
    fn test_invalid_update_writes_nothing() {
        let mut cfg = live_config();
        let before_treasury = cfg.treasury;

        let err = cfg
            .apply_update(&UpdateConfigParams {
                treasury: Some(Pubkey::new_unique()),
                buy_fee_bps: Some(MAX_FEE_BPS + 1),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, LaunchpadError::InvalidFee.into());
        assert_eq!(cfg.treasury, before_treasury);
        assert_eq!(cfg.fees, Fees::default());
    }

    #[test]
    fn test_update_caps_creation_fee() {
        let mut cfg = live_config();
        let err = cfg
            .apply_update(&UpdateConfigParams {
                creation_fee: Some(MAX_CREATION_FEE + 1),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, LaunchpadError::InvalidFee.into());
    }

    #[test]
    fn test_record_volume_overflow() {
        let mut cfg = live_config();
        cfg.total_volume_sol = u128::MAX;
        let err = cfg.record_volume(1).unwrap_err();
        assert_eq!(err, LaunchpadError::InvalidTotalVolumeSol.into());
    }
}
