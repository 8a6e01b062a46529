//! Token Metadata
//!
//! Descriptive metadata attached to a Mint at creation: a display name,
//! a ticker symbol and a URI pointing at off-chain JSON.
//!
//! The metadata is stored inside the Mint record itself, so the mint's
//! address doubles as its metadata address. It is fixed at creation.
//!
//! # Size: 245 bytes

use crate::error::LedgerError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::program_error::ProgramError;

/// Maximum length of the name, in bytes.
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length of the symbol, in bytes.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length of the uri, in bytes.
pub const MAX_URI_LENGTH: usize = 200;

// =============================================================================
// METADATA STRUCTURE
// =============================================================================

/// Name, symbol and uri of a mint.
///
/// # Memory Layout (245 bytes total)
///
/// ```text
/// ┌────────┬──────┬──────────────┬──────────────────────────┐
/// │ Offset │ Size │ Field        │ Type                     │
/// ├────────┼──────┼──────────────┼──────────────────────────┤
/// │ 0      │ 1    │ name_len     │ u8                       │
/// │ 1      │ 32   │ name         │ UTF-8, zero padded       │
/// │ 33     │ 1    │ symbol_len   │ u8                       │
/// │ 34     │ 10   │ symbol       │ UTF-8, zero padded       │
/// │ 44     │ 1    │ uri_len      │ u8                       │
/// │ 45     │ 200  │ uri          │ UTF-8, zero padded       │
/// └────────┴──────┴──────────────┴──────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl TokenMetadata {
    /// Build metadata, rejecting any field over its length limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` if name, symbol or uri is too long.
    pub fn new(name: String, symbol: String, uri: String) -> Result<Self, ProgramError> {
        if name.len() > MAX_NAME_LENGTH
            || symbol.len() > MAX_SYMBOL_LENGTH
            || uri.len() > MAX_URI_LENGTH
        {
            return Err(LedgerError::InvalidMetadata.into());
        }
        Ok(Self { name, symbol, uri })
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenMetadata {
    const LEN: usize = 1 + MAX_NAME_LENGTH + 1 + MAX_SYMBOL_LENGTH + 1 + MAX_URI_LENGTH;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenMetadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (name_len, name, symbol_len, symbol, uri_len, uri) = array_refs![
            input,
            1,
            MAX_NAME_LENGTH,
            1,
            MAX_SYMBOL_LENGTH,
            1,
            MAX_URI_LENGTH
        ];

        Ok(TokenMetadata {
            name: unpack_str(name_len[0], name)?,
            symbol: unpack_str(symbol_len[0], symbol)?,
            uri: unpack_str(uri_len[0], uri)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenMetadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (name_len, name, symbol_len, symbol, uri_len, uri) = mut_array_refs![
            output,
            1,
            MAX_NAME_LENGTH,
            1,
            MAX_SYMBOL_LENGTH,
            1,
            MAX_URI_LENGTH
        ];

        pack_str(&self.name, name_len, name)?;
        pack_str(&self.symbol, symbol_len, symbol)?;
        pack_str(&self.uri, uri_len, uri)?;

        Ok(())
    }
}

/// Read `len` bytes of UTF-8 out of a zero padded field.
fn unpack_str(len: u8, body: &[u8]) -> Result<String, ProgramError> {
    let len = len as usize;
    if len > body.len() {
        return Err(ProgramError::InvalidAccountData);
    }
    String::from_utf8(body[..len].to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

/// Write a string into a zero padded field with its length byte.
fn pack_str(value: &str, len_dst: &mut [u8; 1], body: &mut [u8]) -> Result<(), ProgramError> {
    let bytes = value.as_bytes();
    if bytes.len() > body.len() {
        return Err(LedgerError::InvalidMetadata.into());
    }
    len_dst[0] = bytes.len() as u8;
    body[..bytes.len()].copy_from_slice(bytes);
    body[bytes.len()..].fill(0);
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
