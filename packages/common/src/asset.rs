//! Token metadata shared between the Main registry and the Side pair map.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{QuerierWrapper, StdResult};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::error::BridgeError;

/// Name, symbol and decimals of a fungible asset.
///
/// Carried in the registration event on Main so the Side ledger can create
/// a matching wrapped asset without a separate metadata oracle.
#[cw_serde]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl From<TokenInfoResponse> for TokenMetadata {
    fn from(info: TokenInfoResponse) -> Self {
        Self {
            name: info.name,
            symbol: info.symbol,
            decimals: info.decimals,
        }
    }
}

impl TokenMetadata {
    /// Check that a wrapped token can be instantiated with this metadata.
    ///
    /// Same bounds `cw20-base` enforces at instantiation.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if !(3..=50).contains(&self.name.len()) {
            return Err(BridgeError::InvalidTokenName {
                name: self.name.clone(),
            });
        }
        let symbol_ok = (3..=12).contains(&self.symbol.len())
            && self
                .symbol
                .bytes()
                .all(|b| b.is_ascii_alphabetic() || b == b'-');
        if !symbol_ok {
            return Err(BridgeError::InvalidTokenSymbol {
                symbol: self.symbol.clone(),
            });
        }
        if self.decimals > 18 {
            return Err(BridgeError::InvalidTokenDecimals {
                decimals: self.decimals,
            });
        }
        Ok(())
    }
}

/// Require a Main asset identity in canonical form.
///
/// Main emits validated, lowercase addresses. Case or whitespace variants
/// of an identity are refused, never normalized.
pub fn validate_main_asset(main_asset: &str) -> Result<(), BridgeError> {
    if main_asset.trim().is_empty() {
        return Err(BridgeError::EmptyMainAsset);
    }
    if main_asset.trim() != main_asset || main_asset.to_lowercase() != main_asset {
        return Err(BridgeError::NonCanonicalMainAsset {
            main_asset: main_asset.to_string(),
        });
    }
    Ok(())
}

/// Probe `token` for the CW20 `TokenInfo` surface.
///
/// Fails if the address is not a contract or the contract does not answer
/// the CW20 query; callers map that failure to their own rejection.
pub fn query_token_metadata(querier: &QuerierWrapper, token: &str) -> StdResult<TokenMetadata> {
    let info: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(info.into())
}
