use crate::{
    err::LaunchpadError,
    models::config::{GlobalConfig, UpdateConfigParams},
};
use anchor_lang::prelude::*;

pub fn handle(ctx: Context<UpdateGlobalConfig>, params: UpdateConfigParams) -> Result<()> {
    let cfg = &mut ctx.accounts.global_config;

    cfg.apply_update(&params)?;

    msg!("global config updated: {:?}", params);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateGlobalConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump,
        has_one = authority @ LaunchpadError::NotAuthorized
    )]
    pub global_config: Account<'info, GlobalConfig>,
}
