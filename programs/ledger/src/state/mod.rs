//! Account State Structures
//!
//! This module defines the records stored in program-owned accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 291 bytes | A fungible asset class with its metadata |
//! | TokenAccount | 73 bytes | One owner's holding of one mint |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;  // Read
//! mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;        // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod metadata;
pub mod mint;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{AccountState, TokenAccount};
pub use metadata::{TokenMetadata, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};
pub use mint::Mint;

use arrayref::{array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// Records have a fixed size so the hosting runtime can allocate and
/// rent-fund them up front.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A compact optional type for on-chain storage.
///
/// # Layout
///
/// ```text
/// COption<Pubkey>: 36 bytes
/// [tag: 4 bytes, little-endian u32][value: 32 bytes]
///
/// Tag = 0: None (value bytes are zeros)
/// Tag = 1: Some (value bytes contain the Pubkey)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    /// Create a COption with a value.
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create an empty COption.
    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Get a reference to the inner value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// COPTION<PUBKEY> ENCODING
// =============================================================================

/// Unpack COption<Pubkey> from 36 bytes.
///
/// Layout: [tag: 4 bytes][pubkey: 32 bytes]
pub(crate) fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

/// Pack COption<Pubkey> into 36 bytes.
pub(crate) fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];

    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}
