//! Relayer allow-list shared by both bridges.
//!
//! The list is only consulted when a bridge runs permissioned; otherwise
//! fulfillment is open to anyone.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::BridgeError;

pub const RELAYERS: Map<&Addr, bool> = Map::new("relayers");

pub fn add_relayer(storage: &mut dyn Storage, relayer: &Addr) -> StdResult<()> {
    RELAYERS.save(storage, relayer, &true)
}

pub fn remove_relayer(storage: &mut dyn Storage, relayer: &Addr) {
    RELAYERS.remove(storage, relayer);
}

/// Gate for pair creation and fulfillment.
pub fn ensure_relayer(
    storage: &dyn Storage,
    permissioned: bool,
    sender: &Addr,
) -> Result<(), BridgeError> {
    if !permissioned {
        return Ok(());
    }

    let is_relayer = RELAYERS.may_load(storage, sender)?.unwrap_or(false);
    if !is_relayer {
        return Err(BridgeError::UnauthorizedRelayer);
    }
    Ok(())
}

pub fn list_relayers(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    RELAYERS
        .range(storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok((_, false)) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_gate_only_applies_when_permissioned() {
        let mut storage = MockStorage::new();
        let relayer = Addr::unchecked("relayer");
        let stranger = Addr::unchecked("stranger");
        add_relayer(&mut storage, &relayer).unwrap();

        ensure_relayer(&storage, false, &stranger).unwrap();
        ensure_relayer(&storage, true, &relayer).unwrap();
        assert_eq!(
            ensure_relayer(&storage, true, &stranger).unwrap_err(),
            BridgeError::UnauthorizedRelayer
        );

        remove_relayer(&mut storage, &relayer);
        assert_eq!(
            ensure_relayer(&storage, true, &relayer).unwrap_err(),
            BridgeError::UnauthorizedRelayer
        );
        assert!(list_relayers(&storage).unwrap().is_empty());
    }
}
