use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("Unauthorized: only the bridge can change supply")]
    Unauthorized,

    #[error("Main asset must not be empty")]
    EmptyMainAsset,

    #[error("Cannot migrate from {from}")]
    InvalidMigration { from: String },
}
