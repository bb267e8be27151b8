use crate::{
    err::{self, LaunchpadError},
    models::{config::GlobalConfig, curve::BondingCurve, events::TradeEvent},
};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

impl<'info> SellTokens<'info> {
    fn send_tokens_to_curve(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.seller_token_account.to_account_info(),
            to: self.bonding_curve_token_account.to_account_info(),
            authority: self.seller.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}

/// Sells tokens back to the curve.
///
/// The curve PDA holds the SOL reserves as lamports, so the payout is a
/// direct lamport move rather than a system transfer.
pub fn handle(ctx: Context<SellTokens>, tokens_in: u64, min_sol_out: u64) -> Result<()> {
    let accs = ctx.accounts;

    if accs.global_config.paused {
        return Err(error!(LaunchpadError::ProgramPaused));
    }
    require!(accs.bonding_curve.is_active(), LaunchpadError::TokenNotActive);

    if tokens_in > accs.seller_token_account.amount {
        return Err(error!(LaunchpadError::InsufficientTokens));
    }

    let swap = accs.bonding_curve.sell_swap_amounts(
        tokens_in,
        min_sol_out,
        &accs.global_config.fees,
    )?;
    let gross_sol = swap
        .amount_out
        .checked_add(swap.fee)
        .ok_or(LaunchpadError::MathOverflow)?;

    token::transfer(accs.send_tokens_to_curve(), tokens_in)?;

    accs.bonding_curve.sub_lamports(gross_sol)?;
    accs.seller.add_lamports(swap.amount_out)?;
    if swap.fee > 0 {
        accs.treasury.add_lamports(swap.fee)?;
    }

    accs.bonding_curve.apply_sell(&swap)?;
    accs.global_config.record_volume(gross_sol)?;

    msg!(
        "sold: tokens_in={} sol_out={} fee={}",
        tokens_in,
        swap.amount_out,
        swap.fee
    );

    emit!(TradeEvent {
        mint: accs.token_mint.key(),
        trader: accs.seller.key(),
        is_buy: false,
        sol_amount: swap.amount_out,
        token_amount: tokens_in,
        fee: swap.fee,
        virtual_sol_reserves: accs.bonding_curve.virtual_sol_reserves,
        virtual_token_reserves: accs.bonding_curve.virtual_token_reserves,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SellTokens<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// CHECK: only receives lamports, address pinned by the config
    #[account(
        mut,
        address = global_config.treasury @ LaunchpadError::IncorrectFeeRecipient
    )]
    pub treasury: AccountInfo<'info>,

    #[account(address = bonding_curve.token_mint @ err::acc("Mint does not belong to the curve"))]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [BondingCurve::SEED_PREFIX, token_mint.key().as_ref(), bonding_curve.creator.as_ref()],
        bump = bonding_curve.bump
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve
    )]
    pub bonding_curve_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = seller
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
