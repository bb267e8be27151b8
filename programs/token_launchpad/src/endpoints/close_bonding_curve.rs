use crate::{
    err::LaunchpadError,
    models::{
        config::GlobalConfig,
        curve::{BondingCurve, GraduationState},
    },
};
use anchor_lang::prelude::*;

pub fn handle(ctx: Context<CloseBondingCurve>) -> Result<()> {
    msg!(
        "closing bonding curve {} of mint {}",
        ctx.accounts.bonding_curve.key(),
        ctx.accounts.bonding_curve.token_mint
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CloseBondingCurve<'info> {
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump,
        has_one = authority @ LaunchpadError::NotAuthorized
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        close = authority,
        constraint = bonding_curve.graduated == GraduationState::Graduated
            @ LaunchpadError::CurveNotGraduated
    )]
    pub bonding_curve: Account<'info, BondingCurve>,

    #[account(mut)]
    pub authority: Signer<'info>,
}
