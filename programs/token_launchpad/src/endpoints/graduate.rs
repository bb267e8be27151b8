use crate::{
    err::LaunchpadError,
    models::{
        config::GlobalConfig,
        curve::{BondingCurve, GraduationState},
        events::GraduatedEvent,
    },
};
use anchor_lang::prelude::*;

/// Records the AMM pool the relayer opened with the swept liquidity
pub fn handle(ctx: Context<Graduate>, pool: Pubkey) -> Result<()> {
    let bonding_curve = &mut ctx.accounts.bonding_curve;

    require!(
        bonding_curve.graduated == GraduationState::Pending,
        LaunchpadError::GraduationNotPending
    );

    bonding_curve.graduated = GraduationState::Graduated;
    bonding_curve.pool = Some(pool);

    msg!("graduated: mint={} pool={}", bonding_curve.token_mint, pool);

    emit!(GraduatedEvent {
        mint: bonding_curve.token_mint,
        pool,
        authority: bonding_curve.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Graduate<'info> {
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump,
        constraint = global_config.allowed_relayer == relayer.key() @ LaunchpadError::InvalidRelayer
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [
            BondingCurve::SEED_PREFIX,
            bonding_curve.token_mint.as_ref(),
            bonding_curve.creator.as_ref()
        ],
        bump = bonding_curve.bump
    )]
    pub bonding_curve: Account<'info, BondingCurve>,

    pub relayer: Signer<'info>,
}
