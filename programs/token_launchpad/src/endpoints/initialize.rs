use crate::models::config::GlobalConfig;
use anchor_lang::prelude::*;

/// Creates the global config with launch defaults.
///
/// One-time: the config PDA is created with `init`, so calling this again
/// fails because the account already exists.
pub fn handle(ctx: Context<Initialize>) -> Result<()> {
    msg!("Greetings from: {:?}", ctx.program_id);

    let authority = ctx.accounts.authority.key();
    let cfg = &mut ctx.accounts.global_config;

    cfg.reset_to_defaults(authority)?;
    cfg.bump = ctx.bumps.global_config;

    msg!(
        "global config initialized: authority={} threshold={}",
        cfg.authority,
        cfg.graduation_threshold
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}
