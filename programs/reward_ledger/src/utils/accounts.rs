// reward_ledger/utils/accounts.rs

// external dependencies
use anchor_lang::{
    prelude::*,
    system_program::{
        self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount,
        Transfer,
    },
};

// Helpers for accounts that are validated inside the handler instead of by the
// accounts struct. The referral path uses them so that a bad referrer never
// fails the instruction that creates the new user.

/// Deserializes a program-owned account. Returns None if the owner or discriminator do not match.
pub fn load_program_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Option<T> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return None;
    }

    let data = info.try_borrow_data().ok()?;
    let mut slice: &[u8] = &data[..];
    T::try_deserialize(&mut slice).ok()
}

/// Writes an account back, discriminator included.
pub fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

/// True while nothing lives at the address yet. Lamports alone do not count,
/// anyone can fund a PDA address before it is created.
pub fn is_vacant(info: &AccountInfo) -> bool {
    info.owner == &system_program::ID && info.data_is_empty()
}

/// Allocates a rent-exempt PDA owned by this program, signed with the PDA seeds.
///
/// An address that already holds lamports cannot go through `create_account`,
/// so it is topped up to rent exemption, then allocated and assigned.
pub fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
    system_program: &Program<'info, System>,
    program_id: &Pubkey,
) -> Result<()> {
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let signer = &[signer_seeds];

    if new_account.lamports() == 0 {
        let create_options = CreateAccount {
            from: payer.clone(),
            to: new_account.clone(),
        };
        let cpi_context =
            CpiContext::new_with_signer(system_program.to_account_info(), create_options, signer);

        return create_account(cpi_context, rent_exempt, space as u64, program_id);
    }

    let top_up = rent_exempt.saturating_sub(new_account.lamports());
    if top_up > 0 {
        let transfer_options = Transfer {
            from: payer.clone(),
            to: new_account.clone(),
        };
        let cpi_context = CpiContext::new(system_program.to_account_info(), transfer_options);
        transfer(cpi_context, top_up)?;
    }

    let allocate_options = Allocate {
        account_to_allocate: new_account.clone(),
    };
    let cpi_context =
        CpiContext::new_with_signer(system_program.to_account_info(), allocate_options, signer);
    allocate(cpi_context, space as u64)?;

    let assign_options = Assign {
        account_to_assign: new_account.clone(),
    };
    let cpi_context =
        CpiContext::new_with_signer(system_program.to_account_info(), assign_options, signer);
    assign(cpi_context, program_id)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefunded_address_is_still_vacant() {
        let key = Pubkey::new_unique();
        let owner = system_program::ID;
        let mut lamports = 5_000;
        let mut data = [0u8; 0];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(is_vacant(&info));
    }

    #[test]
    fn empty_address_is_vacant() {
        let key = Pubkey::new_unique();
        let owner = system_program::ID;
        let mut lamports = 0;
        let mut data = [0u8; 0];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(is_vacant(&info));
    }

    #[test]
    fn program_owned_account_is_not_vacant() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = [0u8; 16];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(!is_vacant(&info));
    }
}
