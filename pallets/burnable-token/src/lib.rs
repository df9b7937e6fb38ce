//! # Burnable Token Pallet
//!
//! A fungible token ledger whose supply can only shrink through `burn`, and only when the
//! single controller account asks for it.
//!
//! - Holders move value with `transfer` and pre-authorize the controller with `approve`.
//! - The controller burns from its own balance (self-burn) or from a holder's balance,
//!   drawing down that holder's allowance (delegated burn).
//! - `TotalSupply` always equals the sum of `Balances`.
//!
//! The controller is fixed at genesis. There is no call that changes it.

#![cfg_attr(not(feature = "std"), no_std)]
// Getter and `RuntimeEvent` associated type are deprecated upstream but still supported.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

mod allowances;
mod burn;
mod ledger;

pub use burn::BurnMode;

#[cfg(test)]
mod mock;


pub(crate) const LOG_TARGET: &str = "runtime::burnable-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The reserved "no account" identifier. It can never hold a balance or an
        /// allowance, can never be the controller, and is the `to` side of every burn.
        #[pallet::constant]
        type ZeroAccount: Get<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Unicorns")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "UNIC")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Equal to the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` (second key) may burn from `holder` (first key). Zero allowances are
    /// not stored.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// The only account allowed to burn. Set at genesis and never changed.
    #[pallet::storage]
    #[pallet::getter(fn controller)]
    pub type Controller<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another. Burns report `to` as the zero account.
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// `spender` may now burn `amount` from `holder`.
        Approved { holder: T::AccountId, spender: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The zero account was used where a real account is required.
        ZeroAddress,
        /// Only the controller may burn.
        Unauthorized,
        /// The account balance is smaller than the requested amount.
        InsufficientBalance,
        /// The holder has not approved the controller for the requested amount.
        InsufficientAllowance,
        /// A balance or the total supply would exceed `u128::MAX`.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Burn `amount` from `target`, lowering the total supply.
        ///
        /// Only the controller may call this. When `target` is not the controller, the
        /// burn also spends `target`'s allowance to the controller.
        #[pallet::call_index(0)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn burn(origin: OriginFor<T>, target: T::AccountId, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_burn(&caller, &target, amount)
        }

        /// Set the amount `spender` may burn from the caller's balance. Overwrites any
        /// previous allowance.
        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::do_approve(&holder, &spender, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(&from, &to, amount)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The burn controller. Without one, every burn is rejected.
        pub controller: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals (e.g., 18 for ETH-style)
        pub decimals: u8,
        /// Initial supply, as (holder, amount). Repeated holders accumulate.
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref controller) = self.controller {
                assert!(
                    *controller != T::ZeroAccount::get(),
                    "Controller cannot be the zero account"
                );
                Controller::<T>::put(controller);
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::credit(account, *amount)
                    .expect("Initial balance must go to a real account and fit in u128");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Move `amount` from `from` to `to`. Total supply is unchanged.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::move_balance(from, to, amount)?;
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Check the ledger invariants:
    ///
    /// * `TotalSupply` equals the sum of all balances.
    /// * The controller, if set, is not the zero account.
    /// * The zero account holds no balance and appears in no allowance.
    /// * No zero-valued balance or allowance is stored.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let zero = T::ZeroAccount::get();

        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows u128")?;
        frame_support::ensure!(
            sum == TotalSupply::<T>::get(),
            "Total supply differs from the sum of balances"
        );

        frame_support::ensure!(
            Controller::<T>::get() != Some(zero.clone()),
            "Controller is the zero account"
        );
        frame_support::ensure!(!Balances::<T>::contains_key(&zero), "Zero account holds a balance");
        frame_support::ensure!(
            Balances::<T>::iter_values().all(|b| b > 0),
            "Zero balance left in storage"
        );

        for (holder, spender, amount) in Allowances::<T>::iter() {
            frame_support::ensure!(
                holder != zero && spender != zero,
                "Zero account appears in an allowance"
            );
            frame_support::ensure!(amount > 0, "Zero allowance left in storage");
        }

        Ok(())
    }
}
