//! CreateMintWithMetadata Instruction Processor
//!
//! Allocates a new Mint record, funded by the payer, carrying its name,
//! symbol and uri.

use crate::error::LedgerError;
use crate::state::{Mint, Pack, TokenMetadata};
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

/// Process CreateMintWithMetadata instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable, signer]` New mint address
/// 2. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    decimals: u8,
    mint_authority: Option<Pubkey>,
    name: String,
    symbol: String,
    uri: String,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_signer(mint_info)?;
    assert_writable(mint_info)?;
    assert_system_program(system_program_info)?;

    // The address is in use once any program other than the System
    // Program owns it, or it already carries data
    if mint_info.owner == program_id
        || !system_program::check_id(mint_info.owner)
        || !mint_info.data_is_empty()
    {
        return Err(LedgerError::AlreadyInitialized.into());
    }

    msg!("Name: {}, Symbol: {}, URI: {}", name, symbol, uri);

    let metadata = TokenMetadata::new(name, symbol, uri)?;
    let mint = Mint::new(decimals, mint_authority, metadata);

    let rent = Rent::get()?;
    allocate_account(
        payer_info,
        mint_info,
        system_program_info,
        &rent,
        Mint::LEN,
        program_id,
        &[],
    )?;

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!("Created mint {} with {} decimals", mint_info.key, decimals);
    Ok(())
}
