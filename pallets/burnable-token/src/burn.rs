//! Controller-gated burning.

use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer, traits::Get};
use sp_runtime::DispatchError;

use crate::{Config, Controller, Error, Event, Pallet, LOG_TARGET};

/// How a burn is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurnMode {
    /// The controller burns its own tokens. No allowance is involved.
    SelfBurn,
    /// The controller burns another holder's tokens and spends that holder's allowance.
    Delegated,
}

impl BurnMode {
    pub fn select<AccountId: PartialEq>(controller: &AccountId, target: &AccountId) -> Self {
        if target == controller {
            Self::SelfBurn
        } else {
            Self::Delegated
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Burn `amount` from `target` on behalf of `caller`.
    ///
    /// Checks run in this order, and each failure leaves storage untouched:
    ///
    /// 1. [`Error::Unauthorized`] unless `caller` is the controller.
    /// 2. [`Error::ZeroAddress`] if `target` is the zero account.
    /// 3. In [`BurnMode::Delegated`], [`Error::InsufficientAllowance`] if `target` has not
    ///    approved the controller for `amount`.
    /// 4. [`Error::InsufficientBalance`] if `target` holds less than `amount`.
    ///
    /// Steps 3 and 4 commit together. A failed debit rolls back the spent allowance.
    ///
    /// Emits `Transferred` to the zero account and, for delegated burns, `Approved` with
    /// the remaining allowance. A zero `amount` runs every check and still emits both.
    pub fn do_burn(caller: &T::AccountId, target: &T::AccountId, amount: u128) -> DispatchResult {
        let controller = Self::authorize_burn(caller, target).map_err(|err| {
            log::debug!(
                target: LOG_TARGET,
                "burn of {amount} from {target:?} by {caller:?} rejected: {err:?}"
            );
            err
        })?;

        let mode = BurnMode::select(&controller, target);
        let remaining_allowance = with_storage_layer(|| -> Result<_, DispatchError> {
            let remaining = match mode {
                BurnMode::SelfBurn => None,
                BurnMode::Delegated => Some(Self::consume_allowance(target, &controller, amount)?),
            };
            Self::debit(target, amount)?;
            Ok(remaining)
        })
        .map_err(|err| {
            log::debug!(
                target: LOG_TARGET,
                "{mode:?} burn of {amount} from {target:?} rejected: {err:?}"
            );
            err
        })?;

        Self::deposit_event(Event::Transferred {
            from: target.clone(),
            to: T::ZeroAccount::get(),
            amount,
        });
        if let Some(remaining) = remaining_allowance {
            Self::deposit_event(Event::Approved {
                holder: target.clone(),
                spender: controller,
                amount: remaining,
            });
        }

        log::debug!(target: LOG_TARGET, "{mode:?} burn of {amount} from {target:?}");
        Ok(())
    }

    /// The gates every burn passes before any ledger state is read: `caller` must be the
    /// controller, then `target` must not be the zero account. Returns the controller.
    pub(crate) fn authorize_burn(
        caller: &T::AccountId,
        target: &T::AccountId,
    ) -> Result<T::AccountId, DispatchError> {
        let controller = Controller::<T>::get()
            .filter(|controller| controller == caller)
            .ok_or(Error::<T>::Unauthorized)?;
        ensure!(!Self::is_zero_account(target), Error::<T>::ZeroAddress);
        Ok(controller)
    }
}
