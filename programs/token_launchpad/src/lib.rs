#![allow(unexpected_cfgs)]

pub mod consts;
pub mod endpoints;
pub mod err;
pub mod libraries;
pub mod math;
pub mod models;

use crate::endpoints::*;
use crate::models::config::UpdateConfigParams;
use crate::models::SwapAmount;
use anchor_lang::prelude::*;

declare_id!("7LBnHYWVNYuqgZbhcbGxXD9BNmnW1gge4rxPmoCfJ3c9");

/// # Token Launchpad Program
///
/// Fair-launch token factory on Solana:
/// - Every token starts on its own constant-product bonding curve
/// - Buy and sell fees go to a configurable treasury
/// - Once the curve collects the graduation threshold, its liquidity is
///   swept to a relayer which opens the AMM pool and reports it back
#[program]
pub mod token_launchpad {
    use super::*;

    // ===== Global Configuration =====

    /// Creates the global config with default parameters.
    /// The signer becomes authority, treasury and allowed relayer.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handle(ctx)
    }

    /// Creates (or re-initialises) the global config
    ///
    /// # Arguments
    /// * `treasury` - Account collecting creation and trading fees
    /// * `graduation_threshold` - Real SOL reserves (lamports) at which a curve graduates
    pub fn init_global_config(
        ctx: Context<InitializeGlobalConfig>,
        treasury: Pubkey,
        graduation_threshold: u64,
    ) -> Result<()> {
        init_global_config::handle(ctx, treasury, graduation_threshold)
    }

    /// Partial update of the global config, authority only
    pub fn update_global_config(
        ctx: Context<UpdateGlobalConfig>,
        params: UpdateConfigParams,
    ) -> Result<()> {
        update_global_config::handle(ctx, params)
    }

    // ===== Token Creation =====

    /// Launches a new token on a fresh bonding curve
    ///
    /// # Arguments
    /// * `name` - Token name (e.g., "Doge Coin")
    /// * `symbol` - Token symbol (e.g., "DOGE")
    /// * `uri` - Metadata URI pointing to off-chain JSON
    pub fn create_token(
        ctx: Context<CreateToken>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        create_token::handle(ctx, name, symbol, uri)
    }

    // ===== Trading Functions =====

    /// Preview: buying tokens with SOL
    /// Returns expected amounts without executing trade
    pub fn get_buy_amount(ctx: Context<GetSwapAmount>, sol_amount: u64) -> Result<SwapAmount> {
        get_swap_amount::handle_buy(ctx, sol_amount)
    }

    /// Preview: selling tokens for SOL
    /// Returns expected amounts without executing trade
    pub fn get_sell_amount(ctx: Context<GetSwapAmount>, tokens_in: u64) -> Result<SwapAmount> {
        get_swap_amount::handle_sell(ctx, tokens_in)
    }

    /// Execute swap: buy tokens with SOL
    /// Graduates the curve when the threshold is reached
    ///
    /// # Arguments
    /// * `sol_amount` - Lamports to spend, fee included
    /// * `min_tokens_out` - Minimum tokens to receive (slippage protection)
    pub fn buy_tokens(ctx: Context<BuyTokens>, sol_amount: u64, min_tokens_out: u64) -> Result<()> {
        buy_tokens::handle(ctx, sol_amount, min_tokens_out)
    }

    /// Execute swap: sell tokens for SOL
    ///
    /// # Arguments
    /// * `tokens_in` - Amount of tokens to sell
    /// * `min_sol_out` - Minimum lamports to receive after fees (slippage protection)
    pub fn sell_tokens(ctx: Context<SellTokens>, tokens_in: u64, min_sol_out: u64) -> Result<()> {
        sell_tokens::handle(ctx, tokens_in, min_sol_out)
    }

    // ===== Graduation =====

    /// Called by the relayer once the AMM pool exists for a pending curve
    pub fn graduate(ctx: Context<Graduate>, pool: Pubkey) -> Result<()> {
        graduate::handle(ctx, pool)
    }

    /// Reclaims the rent of a graduated curve, authority only
    pub fn close_bonding_curve(ctx: Context<CloseBondingCurve>) -> Result<()> {
        close_bonding_curve::handle(ctx)
    }
}
