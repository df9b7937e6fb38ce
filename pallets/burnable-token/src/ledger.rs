//! Balance ledger primitives.
//!
//! Every write to `Balances` goes through this module, and every write that changes a
//! balance's contribution to the supply updates `TotalSupply` alongside it.

use frame_support::{dispatch::DispatchResult, ensure, traits::Get};

use crate::{Balances, Config, Error, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    pub(crate) fn is_zero_account(who: &T::AccountId) -> bool {
        *who == T::ZeroAccount::get()
    }

    /// Remove `amount` from `account` and from the total supply.
    ///
    /// Fails with [`Error::ZeroAddress`] for the zero account and with
    /// [`Error::InsufficientBalance`] if the balance is smaller than `amount`. Nothing is
    /// written on failure.
    pub(crate) fn debit(account: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_zero_account(account), Error::<T>::ZeroAddress);

        let remaining = Balances::<T>::get(account)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        // Supply is never below a single balance unless storage is corrupt.
        let supply = TotalSupply::<T>::get()
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        Self::set_balance(account, remaining);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Add `amount` to `account` and to the total supply.
    pub(crate) fn credit(account: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_zero_account(account), Error::<T>::ZeroAddress);

        let balance = Balances::<T>::get(account).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_balance(account, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Move `amount` from `from` to `to` without touching the total supply.
    pub(crate) fn move_balance(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(
            !Self::is_zero_account(from) && !Self::is_zero_account(to),
            Error::<T>::ZeroAddress
        );

        let from_remaining = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_balance(from, from_remaining);
        Self::set_balance(to, to_balance);
        Ok(())
    }

    fn set_balance(account: &T::AccountId, balance: u128) {
        if balance == 0 {
            Balances::<T>::remove(account);
        } else {
            Balances::<T>::insert(account, balance);
        }
    }
}
