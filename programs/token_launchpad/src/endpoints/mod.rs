pub use buy_tokens::*;
pub use close_bonding_curve::*;
pub use create_token::*;
pub use get_swap_amount::*;
pub use graduate::*;
pub use init_global_config::*;
pub use initialize::*;
pub use sell_tokens::*;
pub use update_global_config::*;

pub mod buy_tokens;
pub mod close_bonding_curve;
pub mod create_token;
pub mod get_swap_amount;
pub mod graduate;
pub mod init_global_config;
pub mod initialize;
pub mod sell_tokens;
pub mod update_global_config;
