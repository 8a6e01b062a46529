//! Authority Validation
//!
//! The runtime verifies signatures; this module checks that the verified
//! signer is the identity a record requires.
//!
//! ```ignore
//! // MintTokens: the signer must be the mint authority
//! validate_authority(mint.mint_authority.as_ref(), authority_info)?;
//!
//! // TransferTokens: the signer must own the source account
//! validate_authority(Some(&source.owner), authority_info)?;
//! ```

use crate::error::LedgerError;
use crate::utils::assert_signer;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey};

/// Validate that `authority_info` is the required authority and signed.
///
/// 1. A required authority exists
/// 2. Provided key matches it
/// 3. Provided key has signed the transaction
///
/// # Errors
///
/// * `Unauthorized` - no authority is set, or the key differs
/// * `MissingRequiredSignature` - right key but didn't sign
pub fn validate_authority(expected: Option<&Pubkey>, authority_info: &AccountInfo) -> ProgramResult {
    match expected {
        Some(expected) if expected == authority_info.key => {}
        _ => return Err(LedgerError::Unauthorized.into()),
    }

    assert_signer(authority_info)
}
