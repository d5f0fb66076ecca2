//! Main Bridge Contract - Escrow Side of the Swap Bridge
//!
//! Holds native assets in escrow while their wrapped counterparts circulate
//! on the Side ledger, and releases them when a Side burn is relayed back.
//!
//! # Registration
//! 1. Anyone registers a CW20 asset; its metadata is probed and emitted
//! 2. A relayer forwards the registration to the Side bridge, which creates
//!    the wrapped token
//!
//! # Main → Side (Escrow)
//! 1. User escrows tokens with `SwapMain2Side` (approve + transfer-from) or
//!    a CW20 `Send` carrying `ReceiveMsg::SwapMain2Side`
//! 2. The response carries the transaction identifier (`tx_id`)
//! 3. A relayer passes that identifier to the Side bridge's fill entry point
//!
//! # Side → Main (Release)
//! 1. A relayer calls `FillSide2MainSwap` with the Side burn's identifier
//! 2. The identifier is consumed exactly once; escrow is released to the
//!    recipient
//!
//! # Security
//! - Fulfillment is keyed by the source transaction identifier, never by
//!   caller identity; replays fail with `AlreadyFilled`
//! - Releases never exceed the tracked escrow for the asset
//! - Optional relayer allow-list for fulfillment

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
