//! Wrapped Asset Token - CW20 representation of a Main-ledger asset
//!
//! One instance is created by the Side bridge for every registered pair.
//! Standard CW20 behavior is delegated to `cw20-base`; supply changes
//! (`Mint`, `Burn`, `BurnFrom`) are reserved to the bridge that
//! instantiated the token, so total supply only moves with bridge swaps.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
