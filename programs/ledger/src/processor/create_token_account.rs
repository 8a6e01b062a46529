//! CreateTokenAccount Instruction Processor
//!
//! Creates the token account at the address derived from (owner, mint).
//! Repeating the call for an existing account is a no-op.

use crate::address::{derive_token_account_address_and_bump, TOKEN_ACCOUNT_SEED};
use crate::error::LedgerError;
use crate::state::{Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
    sysvar::Sysvar,
};

/// Process CreateTokenAccount instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Token account (derived address)
/// 2. `[]` Owner of the new account
/// 3. `[]` Mint this account will hold
/// 4. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let token_account_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_writable(token_account_info)?;
    assert_system_program(system_program_info)?;

    let (expected_address, bump) =
        derive_token_account_address_and_bump(owner_info.key, mint_info.key, program_id);
    if expected_address != *token_account_info.key {
        return Err(LedgerError::InvalidDerivedAddress.into());
    }

    load_mint(program_id, mint_info)?;

    if token_account_info.owner == program_id {
        let existing = TokenAccount::unpack_from_slice(&token_account_info.data.borrow())
            .map_err(|_| LedgerError::AlreadyInitialized)?;

        // Only a record for this exact (owner, mint) can sit here
        if existing.is_initialized()
            && existing.owner == *owner_info.key
            && existing.mint == *mint_info.key
        {
            msg!("Token account {} already exists", token_account_info.key);
            return Ok(());
        }
        return Err(LedgerError::AlreadyInitialized.into());
    }

    if !system_program::check_id(token_account_info.owner) {
        return Err(LedgerError::AlreadyInitialized.into());
    }

    msg!("Creating token account for mint: {}", mint_info.key);

    let rent = Rent::get()?;
    let bump_seed = [bump];
    let signer_seeds: &[&[u8]] = &[
        TOKEN_ACCOUNT_SEED,
        owner_info.key.as_ref(),
        mint_info.key.as_ref(),
        &bump_seed,
    ];
    allocate_account(
        payer_info,
        token_account_info,
        system_program_info,
        &rent,
        TokenAccount::LEN,
        program_id,
        &[signer_seeds],
    )?;

    TokenAccount::new(*mint_info.key, *owner_info.key)
        .pack_into_slice(&mut token_account_info.data.borrow_mut())?;

    Ok(())
}
