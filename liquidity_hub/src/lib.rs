#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod liquidation;
pub mod liquidity;
pub mod premium;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod view;

pub use common_errors::*;
pub use common_events::*;
pub use common_proxies::*;

/// Shared liquidity ledger of a multi-asset lending market.
///
/// Each listed asset keeps one pool of supplied and drawn shares; spokes (lending
/// markets built on top) add and remove liquidity, draw and restore debt, and
/// settle liquidations against it. Interest accrues lazily at the start of
/// every operation.
#[multiversx_sc::contract]
pub trait LiquidityHub:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + premium::PremiumModule
    + liquidity::LiquidityModule
    + liquidation::LiquidationModule
    + config::ConfigModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
    + common_liquidation::LiquidationMathModule
    + multiversx_sc_modules::only_admin::OnlyAdminModule
{
    /// Deploys the hub with no assets. The deployer becomes the first admin.
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.admins().insert(caller);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
