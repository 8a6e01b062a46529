//! TransferTokens Instruction Processor
//!
//! Moves tokens between two accounts of the same mint.

use crate::error::LedgerError;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process TransferTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account
/// 1. `[writable]` Destination token account
/// 2. `[signer]` Owner of the source account
/// 3. `[]` Mint both accounts belong to
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;

    assert_writable(source_info)?;
    assert_writable(dest_info)?;

    let mut source = load_token_account(program_id, source_info)?;

    validate_authority(Some(&source.owner), authority_info)?;

    // The source's mint reference must resolve to a live Mint
    load_mint(program_id, mint_info)?;
    if source.mint != *mint_info.key {
        return Err(LedgerError::MintMismatch.into());
    }

    msg!("Transferring {} tokens", amount);

    // Self-transfer: run the debit checks, write nothing
    if source_info.key == dest_info.key {
        source.debit(amount)?;
        msg!("Self-transfer, balance unchanged");
        return Ok(());
    }

    let mut destination = load_token_account(program_id, dest_info)?;

    if source.mint != destination.mint {
        return Err(LedgerError::MintMismatch.into());
    }

    source.debit(amount)?;
    destination.credit(amount)?;

    source.pack_into_slice(&mut source_info.data.borrow_mut())?;
    destination.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    msg!("Successfully transferred {} tokens", amount);
    Ok(())
}
