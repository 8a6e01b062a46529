//! # Token Ledger
//!
//! A fungible-token ledger program. Anyone can create a mint carrying
//! human-readable metadata, open a token account for any (owner, mint)
//! pair, mint tokens under the mint authority, and move tokens between
//! accounts of the same mint.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 291 bytes | Token type, supply and metadata |
//! | TokenAccount | 73 bytes | Balance of one owner for one mint |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | CreateMintWithMetadata | Create a new mint with name, symbol and uri |
//! | 1 | CreateTokenAccount | Create the derived account for (owner, mint) |
//! | 2 | MintTokens | Mint new tokens (increase supply) |
//! | 3 | TransferTokens | Move tokens between accounts of one mint |
//!
//! ## Invariants
//!
//! - A mint's supply always equals the sum of its accounts' balances
//! - An instruction either applies completely or leaves every record as it was
//! - At most one token account exists per (owner, mint)

/// Token account address derivation
pub mod address;

/// Program entrypoint
pub mod entrypoint;

/// Custom error types with stable codes
pub mod error;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Instruction processors
pub mod processor;

/// Record layouts (Mint, TokenAccount, TokenMetadata)
pub mod state;

/// Validation and allocation helpers
pub mod utils;

pub use address::{
    derive_token_account_address, derive_token_account_address_and_bump,
    get_token_account_address,
};
pub use error::LedgerError;
pub use instruction::LedgerInstruction;
pub use processor::Processor;
pub use state::{AccountState, Mint, Pack, TokenAccount, TokenMetadata};

// Replace with the deployed program id
solana_program::declare_id!("TokenLedger11111111111111111111111111111111");
