use crate::{
    err::LaunchpadError,
    models::{config::GlobalConfig, curve::BondingCurve, SwapAmount},
};
use anchor_lang::prelude::*;

/// Quote for spending `sol_amount` lamports, fee included
pub fn handle_buy(ctx: Context<GetSwapAmount>, sol_amount: u64) -> Result<SwapAmount> {
    let accs = ctx.accounts;
    require!(accs.bonding_curve.is_active(), LaunchpadError::TokenNotActive);

    let swap = accs
        .bonding_curve
        .buy_swap_amounts(sol_amount, 0, &accs.global_config.fees)?;

    msg!(
        "buy quote: sol_in={} tokens_out={} fee={}",
        swap.amount_in,
        swap.amount_out,
        swap.fee
    );

    Ok(swap)
}

/// Quote for selling `tokens_in` tokens, fee deducted from the SOL out
pub fn handle_sell(ctx: Context<GetSwapAmount>, tokens_in: u64) -> Result<SwapAmount> {
    let accs = ctx.accounts;
    require!(accs.bonding_curve.is_active(), LaunchpadError::TokenNotActive);

    let swap = accs
        .bonding_curve
        .sell_swap_amounts(tokens_in, 0, &accs.global_config.fees)?;

    msg!(
        "sell quote: tokens_in={} sol_out={} fee={}",
        swap.amount_in,
        swap.amount_out,
        swap.fee
    );

    Ok(swap)
}

#[derive(Accounts)]
pub struct GetSwapAmount<'info> {
    #[account(seeds = [GlobalConfig::SEED_PREFIX], bump = global_config.bump)]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        seeds = [
            BondingCurve::SEED_PREFIX,
            bonding_curve.token_mint.as_ref(),
            bonding_curve.creator.as_ref()
        ],
        bump = bonding_curve.bump
    )]
    pub bonding_curve: Account<'info, BondingCurve>,
}
