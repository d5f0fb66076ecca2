//! Side Bridge Contract - Mint/Burn Side of the Swap Bridge
//!
//! Keeps the pair map between Main-ledger assets and their wrapped CW20
//! counterparts, mints wrapped tokens for relayed escrows and burns them
//! for swaps back to Main.
//!
//! # Pair Creation
//! 1. A relayer forwards a Main registration with `CreateSwapPair`
//! 2. The bridge instantiates a wrapped token (as its minter) and records
//!    both directions of the mapping in the instantiate reply
//!
//! # Main → Side (Mint)
//! 1. A relayer calls `FillMain2SideSwap` with the Main escrow's identifier
//! 2. The identifier is consumed exactly once; wrapped tokens are minted
//!
//! # Side → Main (Burn)
//! 1. User calls `SwapSide2Main` (approve + transfer-from) or sends wrapped
//!    tokens with CW20 `Send` carrying `ReceiveMsg::SwapSide2Main`
//! 2. The tokens are burned and the response carries the `tx_id` that Main
//!    consumes when releasing escrow

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
