use crate::consts::{BPS_DENOMINATOR, DEFAULT_BUY_FEE_BPS, DEFAULT_SELL_FEE_BPS, MAX_FEE_BPS};
use crate::err::LaunchpadError;
use crate::libraries::MulDiv;
use anchor_lang::prelude::*;

#[derive(AnchorDeserialize, AnchorSerialize, Copy, Clone, Debug, Eq, PartialEq, InitSpace)]
pub struct Fees {
    pub buy_fee_bps: u16,
    pub sell_fee_bps: u16,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            buy_fee_bps: DEFAULT_BUY_FEE_BPS,
            sell_fee_bps: DEFAULT_SELL_FEE_BPS,
        }
    }
}

impl Fees {
    pub fn get_buy_fee_amount(&self, amount: u64) -> Result<u64> {
        get_fee_amount(amount, self.buy_fee_bps)
    }

    pub fn get_sell_fee_amount(&self, amount: u64) -> Result<u64> {
        get_fee_amount(amount, self.sell_fee_bps)
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.buy_fee_bps <= MAX_FEE_BPS && self.sell_fee_bps <= MAX_FEE_BPS,
            LaunchpadError::InvalidFee
        );
        Ok(())
    }
}

/// Fee in basis points, rounded up so dust trades still pay
pub fn get_fee_amount(x: u64, bps: u16) -> Result<u64> {
    x.mul_div_ceil(bps as u64, BPS_DENOMINATOR)
        .ok_or(error!(LaunchpadError::MathOverflow))
}
