//! Token Account Address Derivation
//!
//! Token accounts live at program-derived addresses computed from the
//! owner and the mint. Clients compute the address before sending
//! CreateTokenAccount; the program recomputes it and signs the
//! allocation with the bump seed.
//!
//! ```text
//! seeds = ["token-account", owner, mint]
//! address = find_program_address(seeds, program_id)
//! ```
//!
//! Derivation is SHA-256 based, so distinct (owner, mint) pairs collide
//! only with negligible probability.

use solana_program::pubkey::Pubkey;

/// Seed prefix for token account addresses.
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"token-account";

/// Derive the token account address and its canonical bump seed.
pub fn derive_token_account_address_and_bump(
    owner: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TOKEN_ACCOUNT_SEED, owner.as_ref(), mint.as_ref()],
        program_id,
    )
}

/// Derive the token account address for `owner` and `mint` under `program_id`.
pub fn derive_token_account_address(owner: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> Pubkey {
    derive_token_account_address_and_bump(owner, mint, program_id).0
}

/// Token account address for `owner` and `mint` under this program.
pub fn get_token_account_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    derive_token_account_address(owner, mint, &crate::id())
}
