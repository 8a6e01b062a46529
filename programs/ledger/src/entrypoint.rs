//! Program Entrypoint
//!
//! The Solana runtime calls into the program here for every instruction
//! addressed to it.

// Only compile this module if the "no-entrypoint" feature is NOT enabled
// so other programs can link the crate without entrypoint conflicts
#![cfg(not(feature = "no-entrypoint"))]

use crate::error::LedgerError;
use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The main entrypoint for the ledger program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
///
/// A failing instruction logs its error before returning it; the runtime
/// then rolls back every account change made by the transaction.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<LedgerError>();
        return Err(error);
    }
    Ok(())
}
