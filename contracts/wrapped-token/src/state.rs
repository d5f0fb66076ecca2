use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:swap-bridge-wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ties the token to its controlling bridge and the Main asset it represents.
#[cw_serde]
pub struct Binding {
    /// Side bridge that instantiated this token; sole minter and burner
    pub bridge: Addr,
    /// Asset identity on the Main ledger (foreign address, not validated here)
    pub main_asset: String,
}

pub const BINDING: Item<Binding> = Item::new("binding");
