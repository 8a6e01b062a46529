//! Token Account State
//!
//! A Token Account holds one owner's balance of one mint.
//! Its address is derived from the (owner, mint) pair, so each owner has
//! at most one token account per mint.
//!
//! # Size: 73 bytes

use crate::error::LedgerError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// Lifecycle of a token account.
///
/// The transition Uninitialized -> Initialized happens exactly once,
/// in CreateTokenAccount. Nothing moves an account back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Address allocated (or not yet), no record written.
    #[default]
    Uninitialized,

    /// Record exists and can be credited and debited.
    Initialized,
}

impl AccountState {
    /// Convert a u8 byte to AccountState.
    ///
    /// - 0 = Uninitialized
    /// - 1 = Initialized
    /// - Other = Error
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
        }
    }
}

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field  │ Type                   │
/// ├────────┼──────┼────────┼────────────────────────┤
/// │ 0      │ 32   │ mint   │ Pubkey                 │
/// │ 32     │ 32   │ owner  │ Pubkey                 │
/// │ 64     │ 8    │ amount │ u64                    │
/// │ 72     │ 1    │ state  │ AccountState (u8)      │
/// └─────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAccount {
    /// The mint this account holds. Non-owning reference by address.
    pub mint: Pubkey,

    /// The wallet allowed to transfer out of this account.
    pub owner: Pubkey,

    /// Balance in base units.
    pub amount: u64,

    pub state: AccountState,
}

impl TokenAccount {
    /// 32 (mint) + 32 (owner) + 8 (amount) + 1 (state) = 73
    pub const LEN: usize = 73;

    /// A freshly created, empty account.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        TokenAccount {
            mint,
            owner,
            amount: 0,
            state: AccountState::Initialized,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state == AccountState::Initialized
    }

    /// Add `amount` to the balance.
    ///
    /// Not authority-checked: the calling operation authorizes the
    /// origin of the funds.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - `amount == 0`
    /// * `Overflow` - balance would exceed u64::MAX
    pub fn credit(&mut self, amount: u64) -> Result<u64, ProgramError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(self.amount)
    }

    /// Subtract `amount` from the balance.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - `amount == 0`
    /// * `InsufficientFunds` - `amount` exceeds the balance
    pub fn debit(&mut self, amount: u64) -> Result<u64, ProgramError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds)?;

        Ok(self.amount)
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenAccount {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, state) = array_refs![input, 32, 32, 8, 1];

        Ok(TokenAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            state: AccountState::from_u8(state[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, state_dst) = mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        state_dst[0] = self.state.to_u8();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
