//! Mint Account State
//!
//! A Mint defines a fungible asset class: its precision, its running
//! supply, who may issue more of it, and its descriptive metadata.
//!
//! # What a Mint Controls
//!
//! 1. Who can create new tokens (mint_authority)
//! 2. Total tokens in existence (supply)
//! 3. How to display amounts (decimals)
//! 4. How the asset is presented (metadata)
//!
//! # Size: 291 bytes

use crate::error::LedgerError;
use crate::state::{pack_coption_pubkey, unpack_coption_pubkey, COption, Pack, TokenMetadata};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// Every TokenAccount references exactly one Mint by address.
///
/// # Memory Layout (291 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 245  │ metadata         │ TokenMetadata               │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 291  │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mint {
    /// The authority that can mint new tokens.
    ///
    /// - `Some(pubkey)`: That pubkey can call MintTokens
    /// - `None`: No more tokens can ever be minted (fixed supply)
    pub mint_authority: COption<Pubkey>,

    /// Total number of base units in existence.
    ///
    /// # Invariant
    ///
    /// ```text
    /// supply == SUM(all token accounts for this mint).amount
    /// ```
    pub supply: u64,

    /// Number of decimal places for display purposes.
    ///
    /// All on-chain math uses base units.
    pub decimals: u8,

    /// Whether CreateMintWithMetadata has written this record.
    pub is_initialized: bool,

    /// Name, symbol and uri, set at creation.
    pub metadata: TokenMetadata,
}

impl Mint {
    /// Size of Mint when serialized to bytes.
    ///
    /// 36 (mint_authority) + 8 (supply) + 1 (decimals)
    /// + 1 (is_initialized) + 245 (metadata) = 291
    pub const LEN: usize = 291;

    /// Build a freshly created mint with zero supply.
    ///
    /// Every `u8` is a valid precision; decimals only affect display.
    pub fn new(decimals: u8, mint_authority: Option<Pubkey>, metadata: TokenMetadata) -> Self {
        Mint {
            mint_authority: mint_authority.into(),
            supply: 0,
            decimals,
            is_initialized: true,
            metadata,
        }
    }

    /// Increase supply on behalf of `authority`.
    ///
    /// Only the in-memory record changes; the caller persists it once the
    /// paired credit has also succeeded.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - authority absent, or not `authority`
    /// * `InvalidAmount` - `amount == 0`
    /// * `Overflow` - supply would exceed u64::MAX
    pub fn increase_supply(&mut self, authority: &Pubkey, amount: u64) -> Result<u64, ProgramError> {
        match self.mint_authority.as_ref() {
            Some(mint_authority) if mint_authority == authority => {}
            _ => return Err(LedgerError::Unauthorized.into()),
        }

        if amount == 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        self.supply = self
            .supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(self.supply)
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 291;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_bytes, supply_bytes, decimals_bytes, is_initialized_bytes, metadata_bytes) =
            array_refs![input, 36, 8, 1, 1, TokenMetadata::LEN];

        let mint_authority = unpack_coption_pubkey(mint_authority_bytes)?;
        let supply = u64::from_le_bytes(*supply_bytes);
        let decimals = decimals_bytes[0];
        let is_initialized = match is_initialized_bytes[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        // An uninitialized mint is all zeros, which decodes as empty metadata
        let metadata = TokenMetadata::unpack(metadata_bytes)?;

        Ok(Mint {
            mint_authority,
            supply,
            decimals,
            is_initialized,
            metadata,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_dst, supply_dst, decimals_dst, is_initialized_dst, metadata_dst) =
            mut_array_refs![output, 36, 8, 1, 1, TokenMetadata::LEN];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        self.metadata.pack(metadata_dst)?;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
