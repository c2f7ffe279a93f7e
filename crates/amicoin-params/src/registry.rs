//! Network selection
//!
//! A [`ParamsRegistry`] owns the parameter sets of every network and the one
//! selection a process makes among them. Node startup creates it, selects a
//! network once, and hands out shared references afterwards. The regtest
//! upgrade mutation takes `&mut self`, so it cannot overlap any reader.

use std::path::Path;

use serde::Deserialize;

use crate::genesis::GenesisBuilder;
use crate::network::{ChainParams, NetworkId};
use crate::upgrades::{ActivationHeight, UpgradeIndex};
use crate::{Error, Result};

/// Options applied while selecting a network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectOptions {
    /// Require regtest coinbase outputs to be spent to shielded addresses
    pub regtest_protect_coinbase: bool,
}

impl SelectOptions {
    /// Parse options from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}

/// Parameter sets of every network plus the process-wide selection
#[derive(Debug, Clone)]
pub struct ParamsRegistry {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    selected: Option<NetworkId>,
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsRegistry {
    /// Build every network's parameters; nothing is selected yet.
    pub fn new() -> Self {
        Self {
            main: ChainParams::main(),
            testnet: ChainParams::testnet(),
            regtest: ChainParams::regtest(),
            selected: None,
        }
    }

    /// Select the active network.
    ///
    /// Selecting the same network again is a no-op apart from applying
    /// `options`; switching to a different network panics.
    pub fn select_network(&mut self, id: NetworkId, options: &SelectOptions) -> &ChainParams {
        match self.selected {
            Some(current) if current != id => {
                tracing::error!("Network already selected as {}, refusing {}", current, id);
                panic!("network already selected as {}, cannot switch to {}", current, id);
            }
            Some(_) => tracing::debug!("Network {} selected again", id),
            None => tracing::info!("Selected network {}", id),
        }

        if id == NetworkId::Regtest && options.regtest_protect_coinbase {
            tracing::info!("Regtest coinbase protection enabled");
            self.regtest.set_coinbase_must_be_protected(true);
        }

        self.selected = Some(id);
        self.params_for(id)
    }

    /// Select the active network by its identifier string.
    pub fn select_network_by_name(
        &mut self,
        name: &str,
        options: &SelectOptions,
    ) -> Result<NetworkId> {
        let id: NetworkId = name.parse()?;
        self.select_network(id, options);
        Ok(id)
    }

    /// Selected network, if any
    pub fn selected(&self) -> Option<NetworkId> {
        self.selected
    }

    /// Parameters of the selected network.
    ///
    /// Panics when no network has been selected.
    pub fn active(&self) -> &ChainParams {
        match self.try_active() {
            Some(params) => params,
            None => {
                tracing::error!("Chain parameters queried before a network was selected");
                panic!("no network selected");
            }
        }
    }

    /// Parameters of the selected network, if any
    pub fn try_active(&self) -> Option<&ChainParams> {
        self.selected.map(|id| self.params_for(id))
    }

    /// Parameters of any network, regardless of the selection
    pub fn params_for(&self, id: NetworkId) -> &ChainParams {
        match id {
            NetworkId::Main => &self.main,
            NetworkId::Testnet => &self.testnet,
            NetworkId::Regtest => &self.regtest,
        }
    }

    /// Change one regtest upgrade activation height.
    pub fn update_network_upgrade(
        &mut self,
        idx: UpgradeIndex,
        height: ActivationHeight,
    ) -> Result<()> {
        self.update_network_upgrades(&[(idx, height)])
    }

    /// Change several regtest upgrade activation heights at once.
    ///
    /// Nothing changes when the result would break deployment order. Test
    /// setup only: call before any validation work starts.
    pub fn update_network_upgrades(
        &mut self,
        changes: &[(UpgradeIndex, ActivationHeight)],
    ) -> Result<()> {
        self.regtest.update_network_upgrades(changes)
    }

    /// Rebuild and check the genesis block of every network.
    pub fn check_all_genesis<B: GenesisBuilder + ?Sized>(&self, builder: &B) {
        for id in NetworkId::ALL {
            self.params_for(id).check_genesis(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::Sha256dGenesisBuilder;
    use std::io::Write;

    #[test]
    fn test_select_network() {
        let mut registry = ParamsRegistry::new();
        assert!(registry.try_active().is_none());

        let params = registry.select_network(NetworkId::Testnet, &SelectOptions::default());
        assert_eq!(params.id(), NetworkId::Testnet);
        assert_eq!(registry.selected(), Some(NetworkId::Testnet));
        assert_eq!(registry.active().default_port(), 18122);
    }

    #[test]
    fn test_reselect_same_network() {
        let mut registry = ParamsRegistry::new();
        registry.select_network(NetworkId::Main, &SelectOptions::default());
        registry.select_network(NetworkId::Main, &SelectOptions::default());
        assert_eq!(registry.active().id(), NetworkId::Main);
    }

    #[test]
    #[should_panic(expected = "cannot switch")]
    fn test_reselect_other_network_is_fatal() {
        let mut registry = ParamsRegistry::new();
        registry.select_network(NetworkId::Main, &SelectOptions::default());
        registry.select_network(NetworkId::Regtest, &SelectOptions::default());
    }

    #[test]
    #[should_panic(expected = "no network selected")]
    fn test_active_before_selection_is_fatal() {
        let registry = ParamsRegistry::new();
        registry.active();
    }

    #[test]
    fn test_select_by_name() {
        let mut registry = ParamsRegistry::new();
        assert!(matches!(
            registry.select_network_by_name("mainnet", &SelectOptions::default()),
            Err(Error::InvalidNetwork(_))
        ));
        assert!(registry.selected().is_none());

        let id = registry
            .select_network_by_name("regtest", &SelectOptions::default())
            .unwrap();
        assert_eq!(id, NetworkId::Regtest);
    }

    #[test]
    fn test_params_for_leaves_selection_alone() {
        let mut registry = ParamsRegistry::new();
        registry.select_network(NetworkId::Regtest, &SelectOptions::default());
        assert_eq!(registry.params_for(NetworkId::Main).id(), NetworkId::Main);
        assert_eq!(registry.active().id(), NetworkId::Regtest);
    }

    #[test]
    fn test_regtest_protect_coinbase() {
        let options = SelectOptions {
            regtest_protect_coinbase: true,
        };
        let mut registry = ParamsRegistry::new();
        let params = registry.select_network(NetworkId::Regtest, &options);
        assert!(params.consensus().coinbase_must_be_protected);
    }

    #[test]
    fn test_protect_coinbase_ignored_elsewhere() {
        let options = SelectOptions {
            regtest_protect_coinbase: true,
        };
        let mut registry = ParamsRegistry::new();
        registry.select_network(NetworkId::Testnet, &options);
        assert!(!registry
            .params_for(NetworkId::Regtest)
            .consensus()
            .coinbase_must_be_protected);
    }

    #[test]
    fn test_update_network_upgrade() {
        let mut registry = ParamsRegistry::new();
        registry.select_network(NetworkId::Regtest, &SelectOptions::default());
        registry
            .update_network_upgrade(UpgradeIndex::Overwinter, ActivationHeight::Height(10))
            .unwrap();

        let upgrades = &registry.active().consensus().upgrades;
        assert!(!upgrades.is_activated(UpgradeIndex::Overwinter, 9));
        assert!(upgrades.is_activated(UpgradeIndex::Overwinter, 10));
        assert_eq!(upgrades.protocol_version_at(10), 170_003);
    }

    #[test]
    fn test_rejected_update_leaves_table_unchanged() {
        let mut registry = ParamsRegistry::new();
        registry
            .update_network_upgrades(&[
                (UpgradeIndex::Overwinter, ActivationHeight::Height(20)),
                (UpgradeIndex::Sapling, ActivationHeight::Height(10)),
            ])
            .unwrap_err();

        let upgrades = &registry.params_for(NetworkId::Regtest).consensus().upgrades;
        assert_eq!(
            upgrades.activation_height(UpgradeIndex::Overwinter),
            ActivationHeight::Never
        );
    }

    #[test]
    #[should_panic(expected = "base era")]
    fn test_update_base_era_is_fatal() {
        let mut registry = ParamsRegistry::new();
        let _ = registry.update_network_upgrade(UpgradeIndex::BaseSprout, ActivationHeight::Height(5));
    }

    #[test]
    fn test_check_all_genesis() {
        ParamsRegistry::new().check_all_genesis(&Sha256dGenesisBuilder);
    }

    #[test]
    fn test_select_options_from_json() {
        let options = SelectOptions::from_json(r#"{"regtest_protect_coinbase": true}"#).unwrap();
        assert!(options.regtest_protect_coinbase);
        assert_eq!(SelectOptions::from_json("{}").unwrap(), SelectOptions::default());
        assert!(matches!(
            SelectOptions::from_json(r#"{"protect": true}"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_select_options_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"regtest_protect_coinbase": true}}"#).unwrap();
        let options = SelectOptions::from_path(file.path()).unwrap();
        assert!(options.regtest_protect_coinbase);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            SelectOptions::from_path(missing),
            Err(Error::InvalidConfig(_))
        ));
    }
}
