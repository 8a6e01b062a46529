//! Custom Error Types
//!
//! This module defines every error the ledger program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-3 | Account validation errors |
//! | 4-5 | Mint creation errors |
//! | 6-8 | Referential integrity errors |
//! | 9 | Authority errors |
//! | 10-12 | Balance errors |
//! | 13-14 | Addressing and decoding errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::LedgerError;
//!
//! fn some_check() -> ProgramResult {
//!     if !valid {
//!         return Err(LedgerError::Unauthorized.into());
//!     }
//!     Ok(())
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the ledger program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-3)
    // =========================================================================

    /// Error 0: Account is not owned by the ledger program.
    ///
    /// An account owned by another program could carry bytes that look
    /// like a valid record.
    #[error("Account not owned by ledger program")]
    InvalidAccountOwner,

    /// Error 1: Account data has the wrong length.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: The address is already bound to a record.
    ///
    /// Returned when creating a mint on an address in use, or when the
    /// derived token account address holds a record for a different
    /// owner or mint.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Account is not initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    // =========================================================================
    // MINT CREATION ERRORS (4-5)
    // =========================================================================

    /// Error 4: Decimals outside the supported range.
    ///
    /// Decimals travel as a `u8` and every value is accepted, so the
    /// program never returns this; the code stays reserved.
    #[error("Invalid decimals")]
    InvalidDecimals,

    /// Error 5: Name, symbol or uri exceeds its length limit.
    #[error("Invalid token metadata")]
    InvalidMetadata,

    // =========================================================================
    // REFERENTIAL INTEGRITY ERRORS (6-8)
    // =========================================================================

    /// Error 6: The mint does not resolve to an initialized Mint record.
    #[error("Mint not found")]
    MintNotFound,

    /// Error 7: The destination account belongs to a different mint.
    ///
    /// Raised by MintTokens.
    #[error("Destination account belongs to a different mint")]
    AccountMintMismatch,

    /// Error 8: Source and destination hold different mints.
    ///
    /// Raised by TransferTokens.
    #[error("Mint mismatch")]
    MintMismatch,

    // =========================================================================
    // AUTHORITY ERRORS (9)
    // =========================================================================

    /// Error 9: The signer is not the required authority.
    ///
    /// Covers both the mint authority (including a mint whose authority
    /// is absent) and the token account owner.
    #[error("Unauthorized")]
    Unauthorized,

    // =========================================================================
    // BALANCE ERRORS (10-12)
    // =========================================================================

    /// Error 10: Debit exceeds the available balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 11: Supply or balance would exceed u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 12: Mint and transfer amounts must be non-zero.
    #[error("Invalid amount")]
    InvalidAmount,

    // =========================================================================
    // ADDRESSING AND DECODING ERRORS (13-14)
    // =========================================================================

    /// Error 13: Token account address is not the derived address for
    /// the given owner and mint.
    #[error("Token account address does not match derived address")]
    InvalidDerivedAddress,

    /// Error 14: Could not parse the instruction data.
    #[error("Invalid instruction")]
    InvalidInstruction,
}

impl LedgerError {
    /// Every variant, indexed by its error code.
    pub const ALL: [LedgerError; 15] = [
        LedgerError::InvalidAccountOwner,
        LedgerError::InvalidAccountDataLength,
        LedgerError::AlreadyInitialized,
        LedgerError::UninitializedAccount,
        LedgerError::InvalidDecimals,
        LedgerError::InvalidMetadata,
        LedgerError::MintNotFound,
        LedgerError::AccountMintMismatch,
        LedgerError::MintMismatch,
        LedgerError::Unauthorized,
        LedgerError::InsufficientFunds,
        LedgerError::Overflow,
        LedgerError::InvalidAmount,
        LedgerError::InvalidDerivedAddress,
        LedgerError::InvalidInstruction,
    ];
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert LedgerError to ProgramError.
///
/// The error code is the variant's position (0-indexed), so
/// `LedgerError::Unauthorized` becomes `ProgramError::Custom(9)`.
impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// =============================================================================
// DECODING AND PRINTING
// =============================================================================

/// Decode a custom error code back into a LedgerError.
///
/// ```ignore
/// assert_eq!(LedgerError::from_u32(10), Some(LedgerError::InsufficientFunds));
/// ```
impl FromPrimitive for LedgerError {
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().and_then(Self::from_u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl<T> DecodeError<T> for LedgerError {
    fn type_of() -> &'static str {
        "LedgerError"
    }
}

impl PrintProgramError for LedgerError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
