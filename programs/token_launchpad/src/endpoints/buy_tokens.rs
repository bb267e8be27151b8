use crate::{
    err::{self, LaunchpadError},
    models::{
        config::GlobalConfig,
        curve::{BondingCurve, GraduationState},
        events::{CreatePoolRequestEvent, TradeEvent},
    },
};
use anchor_lang::{prelude::*, system_program};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, SyncNative, Token, TokenAccount, Transfer},
};

impl<'info> BuyTokens<'info> {
    fn send_sol_to_curve(&self) -> CpiContext<'_, '_, '_, 'info, system_program::Transfer<'info>> {
        let cpi_accounts = system_program::Transfer {
            from: self.buyer.to_account_info(),
            to: self.bonding_curve.to_account_info(),
        };

        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }

    fn send_fee_to_treasury(
        &self,
    ) -> CpiContext<'_, '_, '_, 'info, system_program::Transfer<'info>> {
        let cpi_accounts = system_program::Transfer {
            from: self.buyer.to_account_info(),
            to: self.treasury.to_account_info(),
        };

        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }

    fn send_tokens_to_buyer(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.bonding_curve_token_account.to_account_info(),
            to: self.buyer_token_account.to_account_info(),
            authority: self.bonding_curve.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn send_tokens_to_relayer(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.bonding_curve_token_account.to_account_info(),
            to: self.relayer_token_account.to_account_info(),
            authority: self.bonding_curve.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn sync_relayer_wsol(&self) -> CpiContext<'_, '_, '_, 'info, SyncNative<'info>> {
        let cpi_accounts = SyncNative {
            account: self.relayer_wsol_account.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    /// Moves the curve's real liquidity to the relayer and parks the curve in
    /// `Pending` until the relayer reports the pool through `graduate`.
    ///
    /// Safe to run again on a `Pending` curve: it only moves what is left.
    fn sweep_to_relayer(&mut self) -> Result<()> {
        require!(
            self.bonding_curve.graduated != GraduationState::Graduated,
            LaunchpadError::TokenGraduated
        );

        let token_mint = self.token_mint.key();
        let creator = self.bonding_curve.creator;
        let seeds: &[&[u8]] = &[
            BondingCurve::SEED_PREFIX,
            token_mint.as_ref(),
            creator.as_ref(),
            &[self.bonding_curve.bump],
        ];
        let signer_seeds = &[seeds];

        let token_amount = self.bonding_curve.real_token_reserves;
        if token_amount > 0 {
            token::transfer(
                self.send_tokens_to_relayer().with_signer(signer_seeds),
                token_amount,
            )?;
            self.bonding_curve.real_token_reserves = 0;
        }

        let wsol_amount = self.bonding_curve.real_sol_reserves;
        if wsol_amount > 0 {
            self.bonding_curve.sub_lamports(wsol_amount)?;
            self.relayer_wsol_account.add_lamports(wsol_amount)?;
            token::sync_native(self.sync_relayer_wsol())?;
            self.bonding_curve.real_sol_reserves = 0;
        }

        self.relayer_token_account.reload()?;
        self.bonding_curve.graduated = GraduationState::Pending;

        msg!(
            "pool requested: mint={} tokens={} wsol={}",
            token_mint,
            self.relayer_token_account.amount,
            wsol_amount
        );

        emit!(CreatePoolRequestEvent {
            bonding_curve: self.bonding_curve.key(),
            creator,
            token_mint,
            token_ata: self.relayer_token_account.key(),
            token_amount: self.relayer_token_account.amount,
            wsol_mint: self.wsol_mint.key(),
            wsol_ata: self.relayer_wsol_account.key(),
            wsol_amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Buys tokens from the curve.
///
/// A `Pending` curve only retries the liquidity sweep; no trade happens,
/// even while trading is paused.
///
/// # Errors
/// * `LaunchpadError::ProgramPaused` - Trading is paused on an active curve
/// * `LaunchpadError::TokenGraduated` - The pool already exists
/// * `LaunchpadError::SlippageExceeded` - Fewer than `min_tokens_out` tokens
/// * `LaunchpadError::InsufficientTokens` - The curve cannot cover the order
pub fn handle(ctx: Context<BuyTokens>, sol_amount: u64, min_tokens_out: u64) -> Result<()> {
    let accs = ctx.accounts;

    match accs.bonding_curve.graduated {
        GraduationState::Active => {
            if accs.global_config.paused {
                return Err(error!(LaunchpadError::ProgramPaused));
            }
        }
        GraduationState::Pending => {
            msg!("curve is pending, retrying liquidity sweep");
            return accs.sweep_to_relayer();
        }
        GraduationState::Graduated => return Err(error!(LaunchpadError::TokenGraduated)),
    }

    let swap = accs.bonding_curve.buy_swap_amounts(
        sol_amount,
        min_tokens_out,
        &accs.global_config.fees,
    )?;

    let token_mint = accs.token_mint.key();
    let creator = accs.bonding_curve.creator;
    let seeds: &[&[u8]] = &[
        BondingCurve::SEED_PREFIX,
        token_mint.as_ref(),
        creator.as_ref(),
        &[accs.bonding_curve.bump],
    ];
    let signer_seeds = &[seeds];

    system_program::transfer(accs.send_sol_to_curve(), swap.amount_in)?;
    if swap.fee > 0 {
        system_program::transfer(accs.send_fee_to_treasury(), swap.fee)?;
    }
    token::transfer(
        accs.send_tokens_to_buyer().with_signer(signer_seeds),
        swap.amount_out,
    )?;

    accs.bonding_curve.apply_buy(&swap)?;
    accs.global_config.record_volume(sol_amount)?;

    msg!(
        "bought: sol_in={} fee={} tokens_out={}",
        swap.amount_in,
        swap.fee,
        swap.amount_out
    );

    emit!(TradeEvent {
        mint: token_mint,
        trader: accs.buyer.key(),
        is_buy: true,
        sol_amount: swap.amount_in,
        token_amount: swap.amount_out,
        fee: swap.fee,
        virtual_sol_reserves: accs.bonding_curve.virtual_sol_reserves,
        virtual_token_reserves: accs.bonding_curve.virtual_token_reserves,
        timestamp: Clock::get()?.unix_timestamp,
    });

    if accs
        .bonding_curve
        .reached_threshold(accs.global_config.graduation_threshold)
    {
        msg!("graduation threshold reached");
        accs.sweep_to_relayer()?;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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

    /// CHECK: receives the graduated liquidity, address pinned by the config
    #[account(address = global_config.allowed_relayer @ LaunchpadError::InvalidRelayer)]
    pub relayer: AccountInfo<'info>,

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
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = buyer
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    #[account(address = spl_token::native_mint::ID @ err::acc("Not the wrapped SOL mint"))]
    pub wsol_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = wsol_mint,
        associated_token::authority = relayer
    )]
    pub relayer_wsol_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = relayer
    )]
    pub relayer_token_account: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
