use anchor_lang::prelude::*;

pub mod config;
pub mod curve;
pub mod events;
pub mod fees;

/// Outcome of a curve trade, also returned by the preview instructions
#[derive(AnchorDeserialize, AnchorSerialize, Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct SwapAmount {
    /// Amount entering the curve, fee excluded
    pub amount_in: u64,
    /// Amount paid out to the trader, fee excluded
    pub amount_out: u64,
    /// Lamports routed to the treasury
    pub fee: u64,
}
