use crate::err::LaunchpadError;
use anchor_lang::prelude::*;
use num_integer::Integer;

/// Constant product `k = sol * tokens` of the virtual reserves
fn invariant(sol_reserves: u64, token_reserves: u64) -> Result<u128> {
    if sol_reserves == 0 || token_reserves == 0 {
        return Err(error!(LaunchpadError::DivideByZero));
    }

    (sol_reserves as u128)
        .checked_mul(token_reserves as u128)
        .ok_or(error!(LaunchpadError::MathOverflow))
}

/// Tokens released by the curve for `sol_in` lamports.
///
/// `tokens_out = T - ceil(k / (S + sol_in))`, rounded against the buyer so
/// the invariant never shrinks.
pub fn calculate_tokens_out(sol_in: u64, sol_reserves: u64, token_reserves: u64) -> Result<u64> {
    let k = invariant(sol_reserves, token_reserves)?;

    let new_sol_reserves = (sol_reserves as u128)
        .checked_add(sol_in as u128)
        .ok_or(error!(LaunchpadError::MathOverflow))?;
    let new_token_reserves = Integer::div_ceil(&k, &new_sol_reserves);

    let tokens_out = (token_reserves as u128)
        .checked_sub(new_token_reserves)
        .ok_or(error!(LaunchpadError::InvalidTokensCalculation))?;

    u64::try_from(tokens_out).map_err(|_| error!(LaunchpadError::MathOverflow))
}

/// Lamports released by the curve for `tokens_in` tokens.
///
/// `sol_out = S - ceil(k / (T + tokens_in))`, rounded against the seller.
pub fn calculate_sol_out(tokens_in: u64, sol_reserves: u64, token_reserves: u64) -> Result<u64> {
    let k = invariant(sol_reserves, token_reserves)?;

    let new_token_reserves = (token_reserves as u128)
        .checked_add(tokens_in as u128)
        .ok_or(error!(LaunchpadError::MathOverflow))?;
    let new_sol_reserves = Integer::div_ceil(&k, &new_token_reserves);

    let sol_out = (sol_reserves as u128)
        .checked_sub(new_sol_reserves)
        .ok_or(error!(LaunchpadError::InvalidSolCalculation))?;

    u64::try_from(sol_out).map_err(|_| error!(LaunchpadError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES};
    use solana_program::native_token::LAMPORTS_PER_SOL;

    #[test]
    fn test_tokens_out_first_buy() {
        // 1 SOL into 1000 SOL / 1e15 token virtual reserves
        let out = calculate_tokens_out(
            LAMPORTS_PER_SOL,
            INITIAL_VIRTUAL_SOL_RESERVES,
            INITIAL_VIRTUAL_TOKEN_RESERVES,
        )
        .unwrap();

        // 1e15 - ceil(1e27 / 1.001e12)
        assert_eq!(out, 999_000_999_000);
    }

    #[test]
    fn test_zero_in_gives_zero_out() {
        assert_eq!(calculate_tokens_out(0, 1_000, 1_000).unwrap(), 0);
        assert_eq!(calculate_sol_out(0, 1_000, 1_000).unwrap(), 0);
    }

    #[test]
    fn test_small_trades_round_against_trader() {
        // k = 1_000_000, new S = 1_001 -> ceil(999.000999) = 1000
        assert_eq!(calculate_tokens_out(1, 1_000, 1_000).unwrap(), 0);
        assert_eq!(calculate_sol_out(1, 1_000, 1_000).unwrap(), 0);
        assert_eq!(calculate_tokens_out(2, 1_000, 1_000).unwrap(), 1);
    }

    #[test]
    fn test_invariant_never_decreases() {
        let mut s = INITIAL_VIRTUAL_SOL_RESERVES;
        let mut t = INITIAL_VIRTUAL_TOKEN_RESERVES;
        let k0 = s as u128 * t as u128;

        for sol_in in [1, 7_777, LAMPORTS_PER_SOL, 13 * LAMPORTS_PER_SOL] {
            let out = calculate_tokens_out(sol_in, s, t).unwrap();
            s += sol_in;
            t -= out;
            assert!(s as u128 * t as u128 >= k0);
        }

        let k1 = s as u128 * t as u128;
        for tokens_in in [3, 1_000_000, 5_000_000_000] {
            let out = calculate_sol_out(tokens_in, s, t).unwrap();
            s -= out;
            t += tokens_in;
            assert!(s as u128 * t as u128 >= k1);
        }
    }

    #[test]
    fn test_buy_then_sell_never_profits() {
        let sol_in = 10 * LAMPORTS_PER_SOL;
        let s = INITIAL_VIRTUAL_SOL_RESERVES;
        let t = INITIAL_VIRTUAL_TOKEN_RESERVES;

        let tokens = calculate_tokens_out(sol_in, s, t).unwrap();
        let sol_back = calculate_sol_out(tokens, s + sol_in, t - tokens).unwrap();

        assert!(sol_back <= sol_in);
    }

    #[test]
    fn test_price_increases_with_supply_sold() {
        let s = INITIAL_VIRTUAL_SOL_RESERVES;
        let t = INITIAL_VIRTUAL_TOKEN_RESERVES;

        let first = calculate_tokens_out(LAMPORTS_PER_SOL, s, t).unwrap();
        let second =
            calculate_tokens_out(LAMPORTS_PER_SOL, s + LAMPORTS_PER_SOL, t - first).unwrap();

        assert!(second < first);
    }

    #[test]
    fn test_empty_reserves_rejected() {
        let err = calculate_tokens_out(1, 0, 1_000).unwrap_err();
        assert_eq!(err, LaunchpadError::DivideByZero.into());

        let err = calculate_sol_out(1, 1_000, 0).unwrap_err();
        assert_eq!(err, LaunchpadError::DivideByZero.into());
    }

    #[test]
    fn test_sol_out_bounded_by_reserves() {
        let out = calculate_sol_out(u64::MAX, 1_000_000, 1_000_000).unwrap();
        assert!(out < 1_000_000);
    }
}
