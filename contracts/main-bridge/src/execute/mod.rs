//! Execute handlers for the Main bridge contract.
//!
//! - `registry` - asset registration toward the Side ledger
//! - `swap` - escrow for Main → Side swaps (direct and CW20 `Send`)
//! - `fill` - release for Side → Main swaps
//! - `admin` - relayer allow-list and admin transfer

mod admin;
mod fill;
mod registry;
mod swap;

pub use admin::*;
pub use fill::*;
pub use registry::*;
pub use swap::*;
