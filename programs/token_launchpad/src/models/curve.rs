use crate::{
    consts::{
        INITIAL_REAL_TOKEN_RESERVES, INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES,
    },
    err::LaunchpadError,
    math::{calculate_sol_out, calculate_tokens_out},
};
use anchor_lang::prelude::*;

use super::{fees::Fees, SwapAmount};

/// Lifecycle of a curve. Only moves forward.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, Eq, PartialEq, InitSpace)]
pub enum GraduationState {
    /// Open for trading
    Active,
    /// Liquidity swept to the relayer, waiting for the pool
    Pending,
    /// Pool created, curve closed for trading
    Graduated,
}

/// Per-token bonding curve. Also the mint authority and owner of the token vault.
#[account]
#[derive(InitSpace)]
pub struct BondingCurve {
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    /// Pricing reserves
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    /// What the curve actually holds
    pub real_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub graduated: GraduationState,
    /// AMM pool reported by the relayer
    pub pool: Option<Pubkey>,
    pub bump: u8,
}

impl BondingCurve {
    pub const SEED_PREFIX: &'static [u8; 13] = b"bonding-curve";

    pub fn launch(&mut self, creator: Pubkey, token_mint: Pubkey, bump: u8) {
        self.creator = creator;
        self.token_mint = token_mint;
        self.virtual_sol_reserves = INITIAL_VIRTUAL_SOL_RESERVES;
        self.virtual_token_reserves = INITIAL_VIRTUAL_TOKEN_RESERVES;
        self.real_sol_reserves = 0;
        self.real_token_reserves = INITIAL_REAL_TOKEN_RESERVES;
        self.graduated = GraduationState::Active;
        self.pool = None;
        self.bump = bump;
    }

    pub fn is_active(&self) -> bool {
        self.graduated == GraduationState::Active
    }

    pub fn reached_threshold(&self, threshold: u64) -> bool {
        self.real_sol_reserves >= threshold
    }

    /// Buy quote: fee comes off the top of `sol_amount`, the rest prices the tokens
    pub fn buy_swap_amounts(
        &self,
        sol_amount: u64,
        min_tokens_out: u64,
        fees: &Fees,
    ) -> Result<SwapAmount> {
        require!(sol_amount > 0, LaunchpadError::InvalidAmount);

        let fee = fees.get_buy_fee_amount(sol_amount)?;
        let net_sol = sol_amount
            .checked_sub(fee)
            .ok_or(LaunchpadError::InsufficientSol)?;

        let tokens_out = calculate_tokens_out(
            net_sol,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
        )?;

        require!(tokens_out > 0, LaunchpadError::InvalidAmount);
        require!(
            tokens_out <= self.real_token_reserves,
            LaunchpadError::InsufficientTokens
        );
        if tokens_out < min_tokens_out {
            return Err(error!(LaunchpadError::SlippageExceeded));
        }

        Ok(SwapAmount {
            amount_in: net_sol,
            amount_out: tokens_out,
            fee,
        })
    }

    /// Sell quote: fee comes off the SOL released by the curve
    pub fn sell_swap_amounts(
        &self,
        tokens_in: u64,
        min_sol_out: u64,
        fees: &Fees,
    ) -> Result<SwapAmount> {
        require!(tokens_in > 0, LaunchpadError::InvalidAmount);

        let gross_sol = calculate_sol_out(
            tokens_in,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
        )?;
        require!(
            gross_sol <= self.real_sol_reserves,
            LaunchpadError::InsufficientSol
        );

        let fee = fees.get_sell_fee_amount(gross_sol)?;
        let net_sol = gross_sol
            .checked_sub(fee)
            .ok_or(LaunchpadError::InsufficientSol)?;

        if net_sol < min_sol_out {
            return Err(error!(LaunchpadError::SlippageExceeded));
        }

        Ok(SwapAmount {
            amount_in: tokens_in,
            amount_out: net_sol,
            fee,
        })
    }

    pub fn apply_buy(&mut self, swap: &SwapAmount) -> Result<()> {
        self.real_sol_reserves = self
            .real_sol_reserves
            .checked_add(swap.amount_in)
            .ok_or(LaunchpadError::InvalidRealSolReserves)?;
        self.real_token_reserves = self
            .real_token_reserves
            .checked_sub(swap.amount_out)
            .ok_or(LaunchpadError::InvalidRealTokenReserves)?;
        self.virtual_sol_reserves = self
            .virtual_sol_reserves
            .checked_add(swap.amount_in)
            .ok_or(LaunchpadError::InvalidVirtualSolReserves)?;
        self.virtual_token_reserves = self
            .virtual_token_reserves
            .checked_sub(swap.amount_out)
            .ok_or(LaunchpadError::InvalidVirtualTokenReserves)?;

        Ok(())
    }

    /// Reserves move by the gross SOL released, fee included
    pub fn apply_sell(&mut self, swap: &SwapAmount) -> Result<()> {
        let gross_sol = swap
            .amount_out
            .checked_add(swap.fee)
            .ok_or(LaunchpadError::MathOverflow)?;

        self.real_token_reserves = self
            .real_token_reserves
            .checked_add(swap.amount_in)
            .ok_or(LaunchpadError::InvalidRealTokenReserves)?;
        self.real_sol_reserves = self
            .real_sol_reserves
            .checked_sub(gross_sol)
            .ok_or(LaunchpadError::InvalidRealSolReserves)?;
        self.virtual_token_reserves = self
            .virtual_token_reserves
            .checked_add(swap.amount_in)
            .ok_or(LaunchpadError::InvalidVirtualTokenReserves)?;
        self.virtual_sol_reserves = self
            .virtual_sol_reserves
            .checked_sub(gross_sol)
            .ok_or(LaunchpadError::InvalidVirtualSolReserves)?;

        Ok(())
    }
}
