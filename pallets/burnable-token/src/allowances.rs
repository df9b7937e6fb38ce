//! Allowance registry: how much each spender may burn from each holder.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::DispatchError;

use crate::{Allowances, Config, Error, Event, Pallet, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Set `spender`'s allowance over `holder` to exactly `amount`.
    ///
    /// The previous value is overwritten, not added to. Fails with [`Error::ZeroAddress`]
    /// if either party is the zero account.
    pub fn do_approve(holder: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(
            !Self::is_zero_account(holder) && !Self::is_zero_account(spender),
            Error::<T>::ZeroAddress
        );

        Self::set_allowance(holder, spender, amount);
        Self::deposit_event(Event::Approved {
            holder: holder.clone(),
            spender: spender.clone(),
            amount,
        });
        log::debug!(target: LOG_TARGET, "{holder:?} approved {spender:?} for {amount}");
        Ok(())
    }

    /// Spend `amount` of `spender`'s allowance over `holder` and return what is left.
    ///
    /// Fails with [`Error::InsufficientAllowance`] without writing anything if the
    /// allowance is smaller than `amount`.
    pub(crate) fn consume_allowance(
        holder: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<u128, DispatchError> {
        let remaining = Allowances::<T>::get(holder, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)?;
        Self::set_allowance(holder, spender, remaining);
        Ok(remaining)
    }

    fn set_allowance(holder: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(holder, spender);
        } else {
            Allowances::<T>::insert(holder, spender, amount);
        }
    }
}
