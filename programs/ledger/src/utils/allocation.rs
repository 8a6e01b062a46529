//! Account Allocation
//!
//! New Mint and TokenAccount records are backed by storage the System
//! Program allocates, funded to rent exemption by the payer and assigned
//! to this program.
//!
//! Two paths:
//!
//! ```text
//! lamports == 0  ->  create_account(payer, new, rent, space, owner)
//! lamports  > 0  ->  transfer(top-up) + allocate(space) + assign(owner)
//! ```
//!
//! The second path keeps an address usable when someone sent lamports to
//! it before it was created, which would make `create_account` fail.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Allocate `space` bytes at `new_account`, owned by `owner`.
///
/// `signer_seeds` signs for a program-derived `new_account`; pass `&[]`
/// when `new_account` is a keypair that signed the transaction.
pub fn allocate_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space);
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            signer_seeds,
        );
    }

    msg!("Address pre-funded with {} lamports", current_lamports);

    let top_up = required_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, new_account.key, top_up),
            &[payer.clone(), new_account.clone(), system_program.clone()],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(new_account.key, space as u64),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )?;

    invoke_signed(
        &system_instruction::assign(new_account.key, owner),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )
}
