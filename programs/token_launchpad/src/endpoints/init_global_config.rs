use crate::{err::LaunchpadError, models::config::GlobalConfig};
use anchor_lang::prelude::*;

pub fn handle(
    ctx: Context<InitializeGlobalConfig>,
    treasury: Pubkey,
    graduation_threshold: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let cfg = &mut ctx.accounts.global_config;

    // an existing config can only be reset by its authority
    if cfg.authority != Pubkey::default() {
        require_keys_eq!(cfg.authority, admin, LaunchpadError::NotAuthorized);
    }

    cfg.reset(admin, treasury, graduation_threshold)?;
    cfg.bump = ctx.bumps.global_config;

    msg!(
        "global config set: treasury={} threshold={}",
        treasury,
        graduation_threshold
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGlobalConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}
