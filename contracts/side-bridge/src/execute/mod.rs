//! Execute handlers for the Side bridge contract.
//!
//! - `pair` - wrapped token creation and the instantiate reply
//! - `fill` - minting for Main → Side swaps
//! - `swap` - burning for Side → Main swaps (direct and CW20 `Send`)
//! - `admin` - relayer allow-list and admin transfer

mod admin;
mod fill;
mod pair;
mod swap;

pub use admin::*;
pub use fill::*;
pub use pair::*;
pub use swap::*;
