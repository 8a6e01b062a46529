//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file.
//!
//! Every processor follows the same shape: load records into memory,
//! run every check and every checked computation on the copies, then
//! write the records back. A failing check returns before anything is
//! written, so no operation is ever partially applied.

pub mod create_mint;
pub mod create_token_account;
pub mod mint_tokens;
pub mod transfer_tokens;

use crate::instruction::LedgerInstruction;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a ledger program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = LedgerInstruction::unpack(instruction_data)?;

        match instruction {
            LedgerInstruction::CreateMintWithMetadata {
                decimals,
                mint_authority,
                name,
                symbol,
                uri,
            } => {
                msg!("Instruction: CreateMintWithMetadata");
                create_mint::process(
                    program_id,
                    accounts,
                    decimals,
                    mint_authority,
                    name,
                    symbol,
                    uri,
                )
            }

            LedgerInstruction::CreateTokenAccount => {
                msg!("Instruction: CreateTokenAccount");
                create_token_account::process(program_id, accounts)
            }

            LedgerInstruction::MintTokens { amount } => {
                msg!("Instruction: MintTokens");
                mint_tokens::process(program_id, accounts, amount)
            }

            LedgerInstruction::TransferTokens { amount } => {
                msg!("Instruction: TransferTokens");
                transfer_tokens::process(program_id, accounts, amount)
            }
        }
    }
}
