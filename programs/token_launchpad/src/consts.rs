use solana_program::native_token::LAMPORTS_PER_SOL;

pub const TOKEN_DECIMALS: u8 = 6;
pub const TOKEN_TOTAL_SUPPLY: u64 = 1_000_000_000_000_000; // 1 billion tokens with 6 decimals

pub const INITIAL_VIRTUAL_SOL_RESERVES: u64 = 1_000 * LAMPORTS_PER_SOL;
pub const INITIAL_VIRTUAL_TOKEN_RESERVES: u64 = 1_000_000_000_000_000;
pub const INITIAL_REAL_TOKEN_RESERVES: u64 = TOKEN_TOTAL_SUPPLY;

pub const BPS_DENOMINATOR: u64 = 10_000;
pub const DEFAULT_BUY_FEE_BPS: u16 = 100; // 1%
pub const DEFAULT_SELL_FEE_BPS: u16 = 100; // 1%
pub const DEFAULT_CREATION_FEE: u64 = 20_000_000; // 0.02 SOL
pub const DEFAULT_GRADUATION_THRESHOLD: u64 = 85 * LAMPORTS_PER_SOL;

pub const MAX_FEE_BPS: u16 = 1_000;
pub const MAX_CREATION_FEE: u64 = 100_000_000;

// Metaplex limits
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
