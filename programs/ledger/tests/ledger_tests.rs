//! Integration Tests for the Token Ledger
//!
//! These tests drive the program through `solana-program-test`, so every
//! instruction goes through the real entrypoint, CPIs into the System
//! Program and transaction-level rollback.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test-sbf
//! # or for faster iteration:
//! cargo test
//! ```

use solana_program::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    system_instruction, system_program,
};
use solana_program_test::*;
use solana_sdk::{
    account::Account,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};
use token_ledger::{
    get_token_account_address, instruction,
    state::{Mint, Pack, TokenAccount, TokenMetadata},
    LedgerError, LedgerInstruction,
};

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

fn program_test() -> ProgramTest {
    ProgramTest::new(
        "token_ledger",
        token_ledger::id(),
        processor!(token_ledger::entrypoint::process_instruction),
    )
}

/// Sign with the payer plus `signers` and process the transaction.
async fn process(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let mut all_signers = vec![&context.payer];
    all_signers.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&context.payer.pubkey()),
        &all_signers,
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

/// Fresh blockhash so an identical transaction is not rejected as a duplicate.
async fn refresh_blockhash(context: &mut ProgramTestContext) {
    context.last_blockhash = context.get_new_latest_blockhash().await.unwrap();
}

async fn create_mint(
    context: &mut ProgramTestContext,
    mint: &Keypair,
    mint_authority: Option<&Pubkey>,
    decimals: u8,
) -> Result<(), BanksClientError> {
    let ix = instruction::create_mint_with_metadata(
        &token_ledger::id(),
        &context.payer.pubkey(),
        &mint.pubkey(),
        mint_authority,
        decimals,
        "Example Token",
        "EXT",
        "https://example.com/token.json",
    );
    process(context, &[ix], &[mint]).await
}

/// Create the token account for (owner, mint) and return its address.
async fn create_token_account(
    context: &mut ProgramTestContext,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, BanksClientError> {
    let ix = instruction::create_token_account(
        &token_ledger::id(),
        &context.payer.pubkey(),
        owner,
        mint,
    );
    process(context, &[ix], &[]).await?;
    Ok(get_token_account_address(owner, mint))
}

async fn mint_tokens(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Keypair,
    amount: u64,
) -> Result<(), BanksClientError> {
    let ix = instruction::mint_tokens(
        &token_ledger::id(),
        mint,
        destination,
        &authority.pubkey(),
        amount,
    );
    process(context, &[ix], &[authority]).await
}

/// Transfer using the mint the source account references.
async fn transfer_tokens(
    context: &mut ProgramTestContext,
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Keypair,
    amount: u64,
) -> Result<(), BanksClientError> {
    let mint = get_token_account(context, source).await.mint;
    let ix = instruction::transfer_tokens(
        &token_ledger::id(),
        source,
        destination,
        &authority.pubkey(),
        &mint,
        amount,
    );
    process(context, &[ix], &[authority]).await
}

async fn get_mint(context: &mut ProgramTestContext, address: &Pubkey) -> Mint {
    let account = context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap();
    Mint::unpack_from_slice(&account.data).unwrap()
}

async fn get_token_account(context: &mut ProgramTestContext, address: &Pubkey) -> TokenAccount {
    let account = context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap();
    TokenAccount::unpack_from_slice(&account.data).unwrap()
}

/// Preload a program-owned record before the test validator starts.
fn add_record(program_test: &mut ProgramTest, address: Pubkey, data: Vec<u8>) {
    program_test.add_account(
        address,
        Account {
            lamports: 1_000_000_000,
            data,
            owner: token_ledger::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

fn packed<T: Pack>(record: &T) -> Vec<u8> {
    let mut data = vec![0u8; T::LEN];
    record.pack_into_slice(&mut data).unwrap();
    data
}

async fn balance(context: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    get_token_account(context, address).await.amount
}

/// Assert that instruction `index` failed with `expected`.
fn assert_instruction_error(
    result: Result<(), BanksClientError>,
    index: u8,
    expected: InstructionError,
) {
    match result.unwrap_err().unwrap() {
        TransactionError::InstructionError(i, err) => {
            assert_eq!(i, index);
            assert_eq!(err, expected);
        }
        other => panic!("unexpected transaction error: {:?}", other),
    }
}

fn assert_ledger_error(result: Result<(), BanksClientError>, expected: LedgerError) {
    assert_instruction_error(result, 0, InstructionError::Custom(expected as u32));
}

/// A mint owned by the payer plus a token account for `owner`.
async fn setup_mint_and_account(
    context: &mut ProgramTestContext,
    owner: &Pubkey,
) -> (Keypair, Pubkey) {
    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    create_mint(context, &mint, Some(&payer), 6).await.unwrap();
    let account = create_token_account(context, owner, &mint.pubkey())
        .await
        .unwrap();
    (mint, account)
}

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[tokio::test]
async fn test_create_mint_transfer_between_two_owners() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let bob = Keypair::new();
    let mint = Keypair::new();

    create_mint(&mut context, &mint, Some(&alice.pubkey()), 6)
        .await
        .unwrap();

    let alice_account = create_token_account(&mut context, &alice.pubkey(), &mint.pubkey())
        .await
        .unwrap();
    let bob_account = create_token_account(&mut context, &bob.pubkey(), &mint.pubkey())
        .await
        .unwrap();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &alice, 1_000_000_000)
        .await
        .unwrap();
    transfer_tokens(&mut context, &alice_account, &bob_account, &alice, 100_000_000)
        .await
        .unwrap();

    assert_eq!(balance(&mut context, &alice_account).await, 900_000_000);
    assert_eq!(balance(&mut context, &bob_account).await, 100_000_000);

    let mint_state = get_mint(&mut context, &mint.pubkey()).await;
    assert_eq!(mint_state.supply, 1_000_000_000);
    assert_eq!(mint_state.decimals, 6);
}

#[tokio::test]
async fn test_self_transfer_keeps_balance() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let (mint, account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 50)
        .await
        .unwrap();
    transfer_tokens(&mut context, &account, &account, &alice, 50)
        .await
        .unwrap();

    assert_eq!(balance(&mut context, &account).await, 50);
    assert_eq!(get_mint(&mut context, &mint.pubkey()).await.supply, 50);
}

#[tokio::test]
async fn test_self_transfer_still_checks_funds() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let (mint, account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 50)
        .await
        .unwrap();

    let result = transfer_tokens(&mut context, &account, &account, &alice, 51).await;
    assert_ledger_error(result, LedgerError::InsufficientFunds);
    assert_eq!(balance(&mut context, &account).await, 50);
}

// =============================================================================
// MINT CREATION
// =============================================================================

#[tokio::test]
async fn test_create_mint_stores_metadata() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    create_mint(&mut context, &mint, Some(&payer), 9).await.unwrap();

    let mint_state = get_mint(&mut context, &mint.pubkey()).await;
    assert!(mint_state.is_initialized);
    assert_eq!(mint_state.supply, 0);
    assert_eq!(mint_state.decimals, 9);
    assert_eq!(mint_state.mint_authority.as_ref(), Some(&payer));
    assert_eq!(mint_state.metadata.name, "Example Token");
    assert_eq!(mint_state.metadata.symbol, "EXT");
    assert_eq!(mint_state.metadata.uri, "https://example.com/token.json");

    let account = context
        .banks_client
        .get_account(mint.pubkey())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owner, token_ledger::id());
    assert_eq!(account.data.len(), Mint::LEN);
}

#[tokio::test]
async fn test_create_mint_on_used_address_fails() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    create_mint(&mut context, &mint, Some(&payer), 6).await.unwrap();

    let result = create_mint(&mut context, &mint, Some(&payer), 2).await;
    assert_ledger_error(result, LedgerError::AlreadyInitialized);

    // The original mint is untouched
    assert_eq!(get_mint(&mut context, &mint.pubkey()).await.decimals, 6);
}

#[tokio::test]
async fn test_create_mint_on_prefunded_address() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();

    // A bare system account must itself be rent exempt
    let rent = context.banks_client.get_rent().await.unwrap();
    let fund_ix = system_instruction::transfer(&payer, &mint.pubkey(), rent.minimum_balance(0));
    process(&mut context, &[fund_ix], &[]).await.unwrap();

    create_mint(&mut context, &mint, Some(&payer), 6).await.unwrap();

    let account = context
        .banks_client
        .get_account(mint.pubkey())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owner, token_ledger::id());
    assert_eq!(account.lamports, rent.minimum_balance(Mint::LEN));
    assert!(get_mint(&mut context, &mint.pubkey()).await.is_initialized);
}

#[tokio::test]
async fn test_create_mint_accepts_full_decimals_range() {
    let mut context = program_test().start_with_context().await;

    let payer = context.payer.pubkey();
    for decimals in [0u8, 20, 255] {
        let mint = Keypair::new();
        create_mint(&mut context, &mint, Some(&payer), decimals)
            .await
            .unwrap();
        assert_eq!(get_mint(&mut context, &mint.pubkey()).await.decimals, decimals);
    }
}

#[tokio::test]
async fn test_create_mint_invalid_metadata() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    let ix = instruction::create_mint_with_metadata(
        &token_ledger::id(),
        &payer,
        &mint.pubkey(),
        Some(&payer),
        6,
        &"N".repeat(33),
        "EXT",
        "",
    );
    let result = process(&mut context, &[ix], &[&mint]).await;
    assert_ledger_error(result, LedgerError::InvalidMetadata);

    // Nothing was allocated
    assert!(context
        .banks_client
        .get_account(mint.pubkey())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_create_mint_wrong_system_program() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    let mut ix = instruction::create_mint_with_metadata(
        &token_ledger::id(),
        &payer,
        &mint.pubkey(),
        Some(&payer),
        6,
        "Example Token",
        "EXT",
        "",
    );
    ix.accounts[2] = AccountMeta::new_readonly(token_ledger::id(), false);

    let result = process(&mut context, &[ix], &[&mint]).await;
    assert_instruction_error(result, 0, InstructionError::IncorrectProgramId);
}

#[tokio::test]
async fn test_malformed_instruction_data() {
    let mut context = program_test().start_with_context().await;

    let ix = Instruction {
        program_id: token_ledger::id(),
        accounts: vec![],
        data: vec![42],
    };
    let result = process(&mut context, &[ix], &[]).await;
    assert_ledger_error(result, LedgerError::InvalidInstruction);
}

// =============================================================================
// TOKEN ACCOUNT CREATION
// =============================================================================

#[tokio::test]
async fn test_create_token_account() {
    let mut context = program_test().start_with_context().await;

    let owner = Keypair::new();
    let (mint, account) = setup_mint_and_account(&mut context, &owner.pubkey()).await;

    let state = get_token_account(&mut context, &account).await;
    assert!(state.is_initialized());
    assert_eq!(state.mint, mint.pubkey());
    assert_eq!(state.owner, owner.pubkey());
    assert_eq!(state.amount, 0);
}

#[tokio::test]
async fn test_create_token_account_is_idempotent() {
    let mut context = program_test().start_with_context().await;

    let owner = Keypair::new();
    let (mint, account) = setup_mint_and_account(&mut context, &owner.pubkey()).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 7)
        .await
        .unwrap();

    refresh_blockhash(&mut context).await;
    let again = create_token_account(&mut context, &owner.pubkey(), &mint.pubkey())
        .await
        .unwrap();

    assert_eq!(again, account);
    assert_eq!(balance(&mut context, &account).await, 7);
}

#[tokio::test]
async fn test_create_token_account_wrong_address() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    create_mint(&mut context, &mint, Some(&payer), 6).await.unwrap();

    let owner = Pubkey::new_unique();
    let ix = Instruction {
        program_id: token_ledger::id(),
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(Pubkey::new_unique(), false),
            AccountMeta::new_readonly(owner, false),
            AccountMeta::new_readonly(mint.pubkey(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: LedgerInstruction::CreateTokenAccount.pack(),
    };

    let result = process(&mut context, &[ix], &[]).await;
    assert_ledger_error(result, LedgerError::InvalidDerivedAddress);
}

#[tokio::test]
async fn test_create_token_account_unknown_mint() {
    let mut context = program_test().start_with_context().await;

    let owner = Pubkey::new_unique();
    let result = create_token_account(&mut context, &owner, &Pubkey::new_unique())
        .await
        .map(|_| ());
    assert_ledger_error(result, LedgerError::MintNotFound);
}

#[tokio::test]
async fn test_create_token_account_on_prefunded_address() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    let payer = context.payer.pubkey();
    create_mint(&mut context, &mint, Some(&payer), 6).await.unwrap();

    let owner = Pubkey::new_unique();
    let address = get_token_account_address(&owner, &mint.pubkey());
    let rent = context.banks_client.get_rent().await.unwrap();
    let fund_ix = system_instruction::transfer(&payer, &address, rent.minimum_balance(0));
    process(&mut context, &[fund_ix], &[]).await.unwrap();

    create_token_account(&mut context, &owner, &mint.pubkey())
        .await
        .unwrap();

    let account = context
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.lamports, rent.minimum_balance(TokenAccount::LEN));

    let state = get_token_account(&mut context, &address).await;
    assert_eq!(state.owner, owner);
    assert_eq!(state.mint, mint.pubkey());
}

#[tokio::test]
async fn test_create_token_account_over_conflicting_record_fails() {
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let address = get_token_account_address(&owner, &mint);

    let mut other_owner = TokenAccount::new(mint, Pubkey::new_unique());
    other_owner.amount = 42;
    let other_mint = TokenAccount::new(Pubkey::new_unique(), owner);

    let conflicting = [
        packed(&other_owner),
        packed(&other_mint),
        // Zeroed, never initialized
        vec![0u8; TokenAccount::LEN],
        // Invalid state byte, does not unpack
        vec![0xffu8; TokenAccount::LEN],
        // Wrong size
        vec![0u8; TokenAccount::LEN + 1],
    ];

    for stored in conflicting {
        let mut validator = program_test();
        add_record(
            &mut validator,
            mint,
            packed(&Mint::new(6, None, TokenMetadata::default())),
        );
        add_record(&mut validator, address, stored.clone());
        let mut context = validator.start_with_context().await;

        let result = create_token_account(&mut context, &owner, &mint)
            .await
            .map(|_| ());
        assert_ledger_error(result, LedgerError::AlreadyInitialized);

        // The stored record is never overwritten
        let account = context
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.data, stored);
    }
}

// =============================================================================
// MINTING
// =============================================================================

#[tokio::test]
async fn test_mint_by_non_authority_fails() {
    let mut context = program_test().start_with_context().await;

    let owner = Pubkey::new_unique();
    let (mint, account) = setup_mint_and_account(&mut context, &owner).await;

    let intruder = Keypair::new();
    let result = mint_tokens(&mut context, &mint.pubkey(), &account, &intruder, 10).await;
    assert_ledger_error(result, LedgerError::Unauthorized);

    assert_eq!(get_mint(&mut context, &mint.pubkey()).await.supply, 0);
    assert_eq!(balance(&mut context, &account).await, 0);
}

#[tokio::test]
async fn test_mint_without_authority_is_fixed_supply() {
    let mut context = program_test().start_with_context().await;

    let mint = Keypair::new();
    create_mint(&mut context, &mint, None, 0).await.unwrap();

    let owner = Pubkey::new_unique();
    let account = create_token_account(&mut context, &owner, &mint.pubkey())
        .await
        .unwrap();

    let payer = context.payer.insecure_clone();
    let result = mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 1).await;
    assert_ledger_error(result, LedgerError::Unauthorized);
}

#[tokio::test]
async fn test_mint_to_account_of_other_mint() {
    let mut context = program_test().start_with_context().await;

    let owner = Pubkey::new_unique();
    let (mint_a, _) = setup_mint_and_account(&mut context, &owner).await;
    let (_, account_b) = setup_mint_and_account(&mut context, &owner).await;

    let payer = context.payer.insecure_clone();
    let result = mint_tokens(&mut context, &mint_a.pubkey(), &account_b, &payer, 10).await;
    assert_ledger_error(result, LedgerError::AccountMintMismatch);
}

#[tokio::test]
async fn test_mint_zero_amount() {
    let mut context = program_test().start_with_context().await;

    let owner = Pubkey::new_unique();
    let (mint, account) = setup_mint_and_account(&mut context, &owner).await;

    let payer = context.payer.insecure_clone();
    let result = mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 0).await;
    assert_ledger_error(result, LedgerError::InvalidAmount);
}

#[tokio::test]
async fn test_mint_supply_overflow() {
    let mut context = program_test().start_with_context().await;

    let owner = Pubkey::new_unique();
    let (mint, account) = setup_mint_and_account(&mut context, &owner).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &account, &payer, u64::MAX)
        .await
        .unwrap();

    let result = mint_tokens(&mut context, &mint.pubkey(), &account, &payer, 1).await;
    assert_ledger_error(result, LedgerError::Overflow);

    assert_eq!(get_mint(&mut context, &mint.pubkey()).await.supply, u64::MAX);
    assert_eq!(balance(&mut context, &account).await, u64::MAX);
}

// =============================================================================
// TRANSFERS
// =============================================================================

#[tokio::test]
async fn test_transfer_insufficient_funds_changes_nothing() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let bob = Pubkey::new_unique();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let bob_account = create_token_account(&mut context, &bob, &mint.pubkey())
        .await
        .unwrap();
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &payer, 100)
        .await
        .unwrap();

    let result = transfer_tokens(&mut context, &alice_account, &bob_account, &alice, 101).await;
    assert_ledger_error(result, LedgerError::InsufficientFunds);

    assert_eq!(balance(&mut context, &alice_account).await, 100);
    assert_eq!(balance(&mut context, &bob_account).await, 0);
}

#[tokio::test]
async fn test_transfer_by_non_owner_fails() {
    let mut context = program_test().start_with_context().await;

    let alice = Pubkey::new_unique();
    let bob = Keypair::new();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice).await;
    let bob_account = create_token_account(&mut context, &bob.pubkey(), &mint.pubkey())
        .await
        .unwrap();
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &payer, 100)
        .await
        .unwrap();

    let result = transfer_tokens(&mut context, &alice_account, &bob_account, &bob, 10).await;
    assert_ledger_error(result, LedgerError::Unauthorized);
    assert_eq!(balance(&mut context, &alice_account).await, 100);
}

#[tokio::test]
async fn test_transfer_across_mints_fails() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let (mint_a, account_a) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let (_, account_b) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint_a.pubkey(), &account_a, &payer, 100)
        .await
        .unwrap();

    let result = transfer_tokens(&mut context, &account_a, &account_b, &alice, 10).await;
    assert_ledger_error(result, LedgerError::MintMismatch);
    assert_eq!(balance(&mut context, &account_a).await, 100);
}

#[tokio::test]
async fn test_transfer_zero_amount() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let bob = Pubkey::new_unique();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let bob_account = create_token_account(&mut context, &bob, &mint.pubkey())
        .await
        .unwrap();

    let result = transfer_tokens(&mut context, &alice_account, &bob_account, &alice, 0).await;
    assert_ledger_error(result, LedgerError::InvalidAmount);
}

#[tokio::test]
async fn test_transfer_to_missing_account_fails() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &payer, 100)
        .await
        .unwrap();

    let missing = get_token_account_address(&Pubkey::new_unique(), &mint.pubkey());
    let result = transfer_tokens(&mut context, &alice_account, &missing, &alice, 10).await;
    assert_ledger_error(result, LedgerError::InvalidAccountOwner);
    assert_eq!(balance(&mut context, &alice_account).await, 100);
}

#[tokio::test]
async fn test_failed_instruction_rolls_back_whole_transaction() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let bob = Pubkey::new_unique();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let bob_account = create_token_account(&mut context, &bob, &mint.pubkey())
        .await
        .unwrap();
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &payer, 100)
        .await
        .unwrap();

    let id = token_ledger::id();
    let (source, destination, authority) = (&alice_account, &bob_account, &alice.pubkey());
    let instructions = [
        instruction::transfer_tokens(&id, source, destination, authority, &mint.pubkey(), 60),
        instruction::transfer_tokens(&id, source, destination, authority, &mint.pubkey(), 60),
    ];
    let result = process(&mut context, &instructions, &[&alice]).await;
    assert_instruction_error(
        result,
        1,
        InstructionError::Custom(LedgerError::InsufficientFunds as u32),
    );

    assert_eq!(balance(&mut context, &alice_account).await, 100);
    assert_eq!(balance(&mut context, &bob_account).await, 0);
}

#[tokio::test]
async fn test_transfer_checks_mint_account() {
    let mut context = program_test().start_with_context().await;

    let alice = Keypair::new();
    let bob = Pubkey::new_unique();
    let (mint, alice_account) = setup_mint_and_account(&mut context, &alice.pubkey()).await;
    let bob_account = create_token_account(&mut context, &bob, &mint.pubkey())
        .await
        .unwrap();
    let (other_mint, _) = setup_mint_and_account(&mut context, &bob).await;
    let payer = context.payer.insecure_clone();

    mint_tokens(&mut context, &mint.pubkey(), &alice_account, &payer, 100)
        .await
        .unwrap();

    let id = token_ledger::id();

    // A live mint that is not the source's mint
    let ix = instruction::transfer_tokens(
        &id,
        &alice_account,
        &bob_account,
        &alice.pubkey(),
        &other_mint.pubkey(),
        10,
    );
    let result = process(&mut context, &[ix], &[&alice]).await;
    assert_ledger_error(result, LedgerError::MintMismatch);

    // An address that holds no mint at all
    let ix = instruction::transfer_tokens(
        &id,
        &alice_account,
        &bob_account,
        &alice.pubkey(),
        &bob_account,
        10,
    );
    let result = process(&mut context, &[ix], &[&alice]).await;
    assert_ledger_error(result, LedgerError::MintNotFound);

    assert_eq!(balance(&mut context, &alice_account).await, 100);
    assert_eq!(balance(&mut context, &bob_account).await, 0);
}

// =============================================================================
// SUPPLY CONSERVATION
// =============================================================================

#[tokio::test]
async fn test_supply_equals_sum_of_balances() {
    let mut context = program_test().start_with_context().await;

    let owners = [Keypair::new(), Keypair::new(), Keypair::new()];
    let mint = Keypair::new();
    let payer = context.payer.insecure_clone();
    create_mint(&mut context, &mint, Some(&payer.pubkey()), 2)
        .await
        .unwrap();

    let mut accounts = Vec::new();
    for owner in &owners {
        let account = create_token_account(&mut context, &owner.pubkey(), &mint.pubkey())
            .await
            .unwrap();
        accounts.push(account);
    }

    mint_tokens(&mut context, &mint.pubkey(), &accounts[0], &payer, 500)
        .await
        .unwrap();
    mint_tokens(&mut context, &mint.pubkey(), &accounts[1], &payer, 300)
        .await
        .unwrap();
    transfer_tokens(&mut context, &accounts[0], &accounts[2], &owners[0], 120)
        .await
        .unwrap();
    transfer_tokens(&mut context, &accounts[1], &accounts[0], &owners[1], 45)
        .await
        .unwrap();

    // A rejected transfer must not disturb the totals
    let result = transfer_tokens(&mut context, &accounts[2], &accounts[1], &owners[2], 121).await;
    assert_ledger_error(result, LedgerError::InsufficientFunds);

    let mut total = 0;
    for account in &accounts {
        total += balance(&mut context, account).await;
    }
    assert_eq!(total, 800);
    assert_eq!(get_mint(&mut context, &mint.pubkey()).await.supply, total);
    assert_eq!(balance(&mut context, &accounts[0]).await, 425);
    assert_eq!(balance(&mut context, &accounts[1]).await, 255);
    assert_eq!(balance(&mut context, &accounts[2]).await, 120);
}
