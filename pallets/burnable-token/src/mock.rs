use crate as pallet_burnable_token;
use frame_support::{derive_impl, traits::ConstU64};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        BurnableToken: pallet_burnable_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_burnable_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type ZeroAccount = ConstU64<ZERO>;
}

pub const ZERO: u64 = 0;
pub const CONTROLLER: u64 = 1;
pub const HOLDER: u64 = 2;
pub const OTHER_HOLDER: u64 = 3;
pub const ATTACKER: u64 = 9;

/// 40 million tokens at 18 decimals, all owned by the controller at genesis.
pub const INITIAL_SUPPLY: u128 = 40_000_000 * 1_000_000_000_000_000_000;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(Some(CONTROLLER), vec![(CONTROLLER, INITIAL_SUPPLY)])
}

pub fn build_ext(
    controller: Option<u64>,
    initial_balances: Vec<(u64, u128)>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_burnable_token::GenesisConfig::<Test> {
        controller,
        token_name: b"Unicorns".to_vec(),
        token_symbol: b"UNIC".to_vec(),
        decimals: 18,
        initial_balances,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}
