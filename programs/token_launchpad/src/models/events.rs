use anchor_lang::prelude::*;

#[event]
pub struct TokenCreatedEvent {
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub timestamp: i64,
}

#[event]
pub struct TradeEvent {
    pub mint: Pubkey,
    pub trader: Pubkey,
    pub is_buy: bool,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee: u64,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    pub timestamp: i64,
}

/// Picked up by the relayer to open the AMM pool
#[event]
pub struct CreatePoolRequestEvent {
    pub bonding_curve: Pubkey,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub token_ata: Pubkey,
    pub token_amount: u64,
    pub wsol_mint: Pubkey,
    pub wsol_ata: Pubkey,
    pub wsol_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct GraduatedEvent {
    pub mint: Pubkey,
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}
