//! Instruction Types
//!
//! This module defines the four instructions of the ledger program,
//! their byte encoding, and client-side builders.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | CreateMintWithMetadata |
//! | 1 | CreateTokenAccount |
//! | 2 | MintTokens |
//! | 3 | TransferTokens |
//!
//! Strings are encoded as a u32 little-endian length followed by UTF-8
//! bytes. Optional keys are a 0/1 tag byte followed by 32 bytes when set.

use crate::address::derive_token_account_address;
use crate::error::LedgerError;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the ledger program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    /// Create a new mint carrying name, symbol and uri.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds the new record |
    /// | 1 | mint | ✓ | ✓ | Fresh address for the mint |
    /// | 2 | system_program | | | System Program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1]: decimals (u8)
    /// [2]: mint_authority option (0 = None, 1 = Some)
    /// [3..35]: mint_authority (Pubkey, if option = 1)
    /// then: name, symbol, uri (u32 length + UTF-8 each)
    /// ```
    CreateMintWithMetadata {
        /// Number of decimals for display purposes
        decimals: u8,

        /// Authority that can mint; None makes supply fixed at zero
        mint_authority: Option<Pubkey>,

        name: String,
        symbol: String,
        uri: String,
    },

    /// Create the derived token account for (owner, mint).
    ///
    /// Succeeds without changes if the account already exists for the
    /// same owner and mint.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds the new record |
    /// | 1 | token_account | ✓ | | Derived address |
    /// | 2 | owner | | | Wallet that will own the account |
    /// | 3 | mint | | | Mint the account holds |
    /// | 4 | system_program | | | System Program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// ```
    CreateTokenAccount,

    /// Mint new tokens to a token account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | ✓ | | The mint |
    /// | 1 | destination | ✓ | | Account to mint to |
    /// | 2 | mint_authority | | ✓ | Mint authority |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    MintTokens {
        /// Amount of tokens to mint, in base units
        amount: u64,
    },

    /// Transfer tokens between two accounts of the same mint.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | source | ✓ | | Source token account |
    /// | 1 | destination | ✓ | | Destination token account |
    /// | 2 | authority | | ✓ | Owner of the source |
    /// | 3 | mint | | | Mint both accounts belong to |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    TransferTokens {
        /// Amount of tokens to transfer, in base units
        amount: u64,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction data into a LedgerInstruction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstruction` for an unknown discriminant, truncated
    /// data, a bad option tag or non-UTF-8 strings.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                let (&decimals, rest) = rest
                    .split_first()
                    .ok_or(LedgerError::InvalidInstruction)?;
                let (mint_authority, rest) = unpack_pubkey_option(rest)?;
                let (name, rest) = unpack_string(rest)?;
                let (symbol, rest) = unpack_string(rest)?;
                let (uri, rest) = unpack_string(rest)?;
                expect_end(rest)?;

                LedgerInstruction::CreateMintWithMetadata {
                    decimals,
                    mint_authority,
                    name,
                    symbol,
                    uri,
                }
            }

            1 => {
                expect_end(rest)?;
                LedgerInstruction::CreateTokenAccount
            }

            2 => LedgerInstruction::MintTokens {
                amount: unpack_amount(rest)?,
            },

            3 => LedgerInstruction::TransferTokens {
                amount: unpack_amount(rest)?,
            },

            _ => return Err(LedgerError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes. Inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            LedgerInstruction::CreateMintWithMetadata {
                decimals,
                mint_authority,
                name,
                symbol,
                uri,
            } => {
                buf.push(0);
                buf.push(*decimals);
                match mint_authority {
                    Some(authority) => {
                        buf.push(1);
                        buf.extend_from_slice(authority.as_ref());
                    }
                    None => buf.push(0),
                }
                pack_string(&mut buf, name);
                pack_string(&mut buf, symbol);
                pack_string(&mut buf, uri);
            }

            LedgerInstruction::CreateTokenAccount => buf.push(1),

            LedgerInstruction::MintTokens { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            LedgerInstruction::TransferTokens { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

/// The amount must be the whole remaining payload.
fn unpack_amount(input: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = input
        .try_into()
        .map_err(|_| LedgerError::InvalidInstruction)?;
    Ok(u64::from_le_bytes(bytes))
}

fn expect_end(input: &[u8]) -> Result<(), ProgramError> {
    if input.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::InvalidInstruction.into())
    }
}

fn unpack_pubkey_option(input: &[u8]) -> Result<(Option<Pubkey>, &[u8]), ProgramError> {
    match input.split_first() {
        Some((&0, rest)) => Ok((None, rest)),
        Some((&1, rest)) if rest.len() >= 32 => {
            let (key, rest) = rest.split_at(32);
            let key = Pubkey::try_from(key).map_err(|_| LedgerError::InvalidInstruction)?;
            Ok((Some(key), rest))
        }
        _ => Err(LedgerError::InvalidInstruction.into()),
    }
}

fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
    let len_bytes: [u8; 4] = input
        .get(..4)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(LedgerError::InvalidInstruction)?;
    let len = u32::from_le_bytes(len_bytes) as usize;

    let rest = &input[4..];
    if rest.len() < len {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let (bytes, rest) = rest.split_at(len);
    let value = String::from_utf8(bytes.to_vec()).map_err(|_| LedgerError::InvalidInstruction)?;

    Ok((value, rest))
}

fn pack_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

// =============================================================================
// CLIENT INSTRUCTION BUILDERS
// =============================================================================

/// Build a CreateMintWithMetadata instruction.
///
/// `mint` must also sign the transaction. Pass `Some(payer)` as the
/// mint authority for the usual setup where the creator mints.
#[allow(clippy::too_many_arguments)]
pub fn create_mint_with_metadata(
    program_id: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: Option<&Pubkey>,
    decimals: u8,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: LedgerInstruction::CreateMintWithMetadata {
            decimals,
            mint_authority: mint_authority.copied(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .pack(),
    }
}

/// Build a CreateTokenAccount instruction for the derived address of
/// (owner, mint).
pub fn create_token_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    let token_account = derive_token_account_address(owner, mint, program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(token_account, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: LedgerInstruction::CreateTokenAccount.pack(),
    }
}

/// Build a MintTokens instruction.
pub fn mint_tokens(
    program_id: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data: LedgerInstruction::MintTokens { amount }.pack(),
    }
}

/// Build a TransferTokens instruction.
pub fn transfer_tokens(
    program_id: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(*mint, false),
        ],
        data: LedgerInstruction::TransferTokens { amount }.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
