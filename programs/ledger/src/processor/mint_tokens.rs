//! MintTokens Instruction Processor
//!
//! Mints new tokens to a token account. Supply and balance grow together
//! or not at all.

use crate::error::LedgerError;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process MintTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Destination token account
/// 2. `[signer]` Mint authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;

    assert_writable(mint_info)?;
    assert_writable(dest_info)?;

    let mut mint = load_mint(program_id, mint_info)?;
    let mut destination = load_token_account(program_id, dest_info)?;

    if destination.mint != *mint_info.key {
        return Err(LedgerError::AccountMintMismatch.into());
    }

    validate_authority(mint.mint_authority.as_ref(), authority_info)?;

    msg!("Minting {} tokens", amount);

    // Both updates are computed before either is written
    let supply = mint.increase_supply(authority_info.key, amount)?;
    let balance = destination.credit(amount)?;

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    destination.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    msg!("Successfully minted {} tokens (supply {}, balance {})", amount, supply, balance);
    Ok(())
}
