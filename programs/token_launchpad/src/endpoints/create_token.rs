use crate::{
    consts::{
        MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, TOKEN_DECIMALS, TOKEN_TOTAL_SUPPLY,
    },
    err::LaunchpadError,
    models::{config::GlobalConfig, curve::BondingCurve, events::TokenCreatedEvent},
};
use anchor_lang::{prelude::*, system_program};
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2,
        CreateMetadataAccountsV3, Metadata,
    },
    token::{
        self, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority, Token,
        TokenAccount,
    },
};

impl<'info> CreateToken<'info> {
    fn mint_supply_to_curve(&self) -> CpiContext<'_, '_, '_, 'info, MintTo<'info>> {
        let cpi_accounts = MintTo {
            mint: self.token_mint.to_account_info(),
            to: self.bonding_curve_token_account.to_account_info(),
            authority: self.bonding_curve.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn create_metadata_ctx(
        &self,
    ) -> CpiContext<'_, '_, '_, 'info, CreateMetadataAccountsV3<'info>> {
        let cpi_accounts = CreateMetadataAccountsV3 {
            metadata: self.metadata_account.to_account_info(),
            mint: self.token_mint.to_account_info(),
            mint_authority: self.bonding_curve.to_account_info(),
            payer: self.creator.to_account_info(),
            update_authority: self.bonding_curve.to_account_info(),
            system_program: self.system_program.to_account_info(),
            rent: self.rent.to_account_info(),
        };

        CpiContext::new(self.token_metadata_program.to_account_info(), cpi_accounts)
    }

    fn revoke_mint_authority(&self) -> CpiContext<'_, '_, '_, 'info, SetAuthority<'info>> {
        let cpi_accounts = SetAuthority {
            current_authority: self.bonding_curve.to_account_info(),
            account_or_mint: self.token_mint.to_account_info(),
        };

        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn pay_creation_fee(
        &self,
    ) -> CpiContext<'_, '_, '_, 'info, system_program::Transfer<'info>> {
        let cpi_accounts = system_program::Transfer {
            from: self.creator.to_account_info(),
            to: self.treasury.to_account_info(),
        };

        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }
}

pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LENGTH, LaunchpadError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, LaunchpadError::SymbolTooLong);
    require!(uri.len() <= MAX_URI_LENGTH, LaunchpadError::UriTooLong);
    Ok(())
}

/// Launches a token: curve state, full supply minted to the curve vault,
/// metadata, fixed supply, creation fee.
pub fn handle(ctx: Context<CreateToken>, name: String, symbol: String, uri: String) -> Result<()> {
    let accs = ctx.accounts;

    if accs.global_config.paused {
        return Err(error!(LaunchpadError::ProgramPaused));
    }
    validate_metadata(&name, &symbol, &uri)?;

    let creator = accs.creator.key();
    let token_mint = accs.token_mint.key();
    let bump = ctx.bumps.bonding_curve;

    accs.bonding_curve.launch(creator, token_mint, bump);

    let seeds: &[&[u8]] = &[
        BondingCurve::SEED_PREFIX,
        token_mint.as_ref(),
        creator.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[seeds];

    token::mint_to(
        accs.mint_supply_to_curve().with_signer(signer_seeds),
        TOKEN_TOTAL_SUPPLY,
    )?;

    let data = DataV2 {
        name: name.clone(),
        symbol: symbol.clone(),
        uri: uri.clone(),
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };
    create_metadata_accounts_v3(
        accs.create_metadata_ctx().with_signer(signer_seeds),
        data,
        false,
        true,
        None,
    )?;

    // supply is fixed from here on
    token::set_authority(
        accs.revoke_mint_authority().with_signer(signer_seeds),
        AuthorityType::MintTokens,
        None,
    )?;

    let creation_fee = accs.global_config.creation_fee;
    if creation_fee > 0 {
        system_program::transfer(accs.pay_creation_fee(), creation_fee)?;
    }

    let cfg = &mut accs.global_config;
    cfg.total_tokens_created = cfg
        .total_tokens_created
        .checked_add(1)
        .ok_or(LaunchpadError::MathOverflow)?;

    msg!(
        "token #{} created: mint={} creator={}",
        cfg.total_tokens_created,
        token_mint,
        creator
    );

    emit!(TokenCreatedEvent {
        mint: token_mint,
        bonding_curve: accs.bonding_curve.key(),
        creator,
        name,
        symbol,
        uri,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

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

    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = bonding_curve
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = 8 + BondingCurve::INIT_SPACE,
        seeds = [BondingCurve::SEED_PREFIX, token_mint.key().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve
    )]
    pub bonding_curve_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: created by the token metadata program, address checked by seeds
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), token_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key()
    )]
    pub metadata_account: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}
