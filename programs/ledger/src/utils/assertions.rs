//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate and load everything first
//!     assert_signer(payer_info)?;
//!     let mint = load_mint(program_id, mint_info)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::LedgerError;
use crate::state::{Mint, Pack, TokenAccount};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey, system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(LedgerError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(LedgerError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM CHECKS
// =============================================================================

/// Assert that the account passed as the System Program really is it.
///
/// # Errors
///
/// Returns `IncorrectProgramId` otherwise.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// RECORD LOADING
// =============================================================================

/// Resolve an address to an initialized Mint owned by this program.
///
/// Anything else at that address (nothing, a foreign account, a record
/// of another size, an uninitialized mint) does not count as a mint.
///
/// # Errors
///
/// Returns `MintNotFound` if the address does not hold a Mint.
pub fn load_mint(program_id: &Pubkey, mint_info: &AccountInfo) -> Result<Mint, ProgramError> {
    if mint_info.owner != program_id || mint_info.data_len() != Mint::LEN {
        return Err(LedgerError::MintNotFound.into());
    }

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(LedgerError::MintNotFound.into());
    }

    Ok(mint)
}

/// Load an initialized TokenAccount owned by this program.
///
/// # Errors
///
/// * `InvalidAccountOwner` - not owned by this program
/// * `InvalidAccountDataLength` - not a TokenAccount-sized record
/// * `UninitializedAccount` - record never created
pub fn load_token_account(
    program_id: &Pubkey,
    account_info: &AccountInfo,
) -> Result<TokenAccount, ProgramError> {
    assert_owned_by(account_info, program_id)?;
    assert_data_length(account_info, TokenAccount::LEN)?;

    let account = TokenAccount::unpack_from_slice(&account_info.data.borrow())?;
    if !account.is_initialized() {
        return Err(LedgerError::UninitializedAccount.into());
    }

    Ok(account)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
