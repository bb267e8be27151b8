#![allow(dead_code)]

use anchor_lang::{prelude::Pubkey, AccountSerialize, Space};
use anchor_spl::associated_token::get_associated_token_address;
use solana_program_test::{BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    rent::Rent,
    signature::{Keypair, Signature, Signer},
    transaction::{Transaction, TransactionError},
};
use spl_token::{
    solana_program::{program_option::COption, program_pack::Pack},
    state::{Account as SplAccount, AccountState, Mint as SplMint},
};
use token_launchpad::{
    consts::{DEFAULT_CREATION_FEE, DEFAULT_GRADUATION_THRESHOLD, TOKEN_DECIMALS},
    err::LaunchpadError,
    models::{
        config::GlobalConfig,
        curve::{BondingCurve, GraduationState},
        fees::Fees,
    },
};

pub fn global_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GlobalConfig::SEED_PREFIX], &token_launchpad::ID)
}

pub fn bonding_curve_address(mint: &Pubkey, creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BondingCurve::SEED_PREFIX, mint.as_ref(), creator.as_ref()],
        &token_launchpad::ID,
    )
}

pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new("token_launchpad", token_launchpad::ID, None);
    program_test.prefer_bpf(true);
    program_test
}

pub async fn start(program_test: ProgramTest) -> (BanksClient, Keypair) {
    let (banks_client, payer, _) = program_test.start().await;
    (banks_client, payer)
}

/// Signs with every keypair in `signers`, the first one pays
pub async fn send(
    banks_client: &mut BanksClient,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let blockhash = banks_client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signers[0].pubkey()),
        signers,
        blockhash,
    );
    let signature = tx.signatures[0];
    banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub fn assert_launchpad_error(
    result: Result<Signature, BanksClientError>,
    expected: LaunchpadError,
) {
    let err = result.expect_err("transaction should fail");
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(u32::from(expected)))
    );
}

pub fn default_config(authority: Pubkey) -> GlobalConfig {
    GlobalConfig {
        authority,
        treasury: authority,
        fees: Fees::default(),
        creation_fee: DEFAULT_CREATION_FEE,
        graduation_threshold: DEFAULT_GRADUATION_THRESHOLD,
        total_tokens_created: 0,
        total_volume_sol: 0,
        allowed_relayer: authority,
        paused: false,
        bump: global_config_address().1,
    }
}

pub fn launched_curve(mint: Pubkey, creator: Pubkey) -> BondingCurve {
    let mut curve = BondingCurve {
        creator,
        token_mint: mint,
        virtual_sol_reserves: 0,
        virtual_token_reserves: 0,
        real_sol_reserves: 0,
        real_token_reserves: 0,
        graduated: GraduationState::Active,
        pool: None,
        bump: 0,
    };
    curve.launch(creator, mint, bonding_curve_address(&mint, &creator).1);
    curve
}

/// Discriminator plus Borsh data, padded to the allocated size
fn program_account<T: AccountSerialize>(state: &T, space: usize, extra_lamports: u64) -> Account {
    let mut data = Vec::with_capacity(space);
    state.try_serialize(&mut data).unwrap();
    data.resize(space, 0);

    Account {
        lamports: Rent::default().minimum_balance(space) + extra_lamports,
        data,
        owner: token_launchpad::ID,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn add_config(program_test: &mut ProgramTest, config: &GlobalConfig) {
    program_test.add_account(
        global_config_address().0,
        program_account(config, 8 + GlobalConfig::INIT_SPACE, 0),
    );
}

/// The curve PDA holds its real SOL reserves on top of rent
pub fn add_curve(program_test: &mut ProgramTest, curve: &BondingCurve) -> Pubkey {
    let address = bonding_curve_address(&curve.token_mint, &curve.creator).0;
    program_test.add_account(
        address,
        program_account(curve, 8 + BondingCurve::INIT_SPACE, curve.real_sol_reserves),
    );
    address
}

pub fn add_mint(program_test: &mut ProgramTest, mint: Pubkey, supply: u64, decimals: u8) {
    let state = SplMint {
        mint_authority: COption::None,
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0; SplMint::LEN];
    SplMint::pack(state, &mut data).unwrap();

    program_test.add_account(
        mint,
        Account {
            lamports: Rent::default().minimum_balance(SplMint::LEN),
            data,
            owner: spl_token::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
}

pub fn add_launch_mint(program_test: &mut ProgramTest, mint: Pubkey, supply: u64) {
    add_mint(program_test, mint, supply, TOKEN_DECIMALS);
}

pub fn add_native_mint(program_test: &mut ProgramTest) {
    add_mint(program_test, spl_token::native_mint::ID, 0, 9);
}

/// Associated token account of `owner` holding `amount`
pub fn add_token_account(
    program_test: &mut ProgramTest,
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
) -> Pubkey {
    let address = get_associated_token_address(&owner, &mint);
    let state = SplAccount {
        mint,
        owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0; SplAccount::LEN];
    SplAccount::pack(state, &mut data).unwrap();

    program_test.add_account(
        address,
        Account {
            lamports: Rent::default().minimum_balance(SplAccount::LEN),
            data,
            owner: spl_token::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
    address
}

pub fn add_system_account(program_test: &mut ProgramTest, address: Pubkey, lamports: u64) {
    program_test.add_account(
        address,
        Account {
            lamports,
            ..Account::default()
        },
    );
}

pub async fn fetch_config(banks_client: &mut BanksClient) -> GlobalConfig {
    fetch_state(banks_client, global_config_address().0).await
}

pub async fn fetch_state<T: anchor_lang::AccountDeserialize>(
    banks_client: &mut BanksClient,
    address: Pubkey,
) -> T {
    let account = banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("program account");
    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn token_balance(banks_client: &mut BanksClient, address: Pubkey) -> u64 {
    let account = banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("token account");
    SplAccount::unpack(&account.data).unwrap().amount
}

pub async fn lamports(banks_client: &mut BanksClient, address: Pubkey) -> u64 {
    banks_client.get_balance(address).await.unwrap()
}
