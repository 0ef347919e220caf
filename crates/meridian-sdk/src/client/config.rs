use meridian_sdk_types::api_types::chain_id::ChainId;
use url::Url;

const MAINNET_REST_URL: &str = "https://api.mainnet.meridianledger.dev";
const TESTNET_REST_URL: &str = "https://api.testnet.meridianledger.dev";
const DEVNET_REST_URL: &str = "https://api.devnet.meridianledger.dev";
const LOCAL_REST_URL: &str = "http://127.0.0.1:8080";

const MAINNET_INDEXER_URL: &str = "https://indexer.mainnet.meridianledger.dev/v1/graphql";
const TESTNET_INDEXER_URL: &str = "https://indexer.testnet.meridianledger.dev/v1/graphql";
const DEVNET_INDEXER_URL: &str = "https://indexer.devnet.meridianledger.dev/v1/graphql";
const LOCAL_INDEXER_URL: &str = "http://127.0.0.1:8090/v1/graphql";

const TESTNET_FAUCET_URL: &str = "https://faucet.testnet.meridianledger.dev";
const DEVNET_FAUCET_URL: &str = "https://faucet.devnet.meridianledger.dev";
const LOCAL_FAUCET_URL: &str = "http://127.0.0.1:8081";

/// An immutable definition of a network configuration.
///
/// Indexer and faucet URLs are optional; clients for them are only
/// constructed when a URL is present. A `None` chain id means the id is
/// fetched from the node on first use.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MeridianNetwork {
    name: &'static str,
    rest_url: Url,
    indexer_url: Option<Url>,
    faucet_url: Option<Url>,
    chain_id: Option<ChainId>,
}

impl MeridianNetwork {
    pub fn new(
        name: &'static str,
        rest_url: Url,
        indexer_url: Option<Url>,
        faucet_url: Option<Url>,
        chain_id: Option<ChainId>,
    ) -> MeridianNetwork {
        MeridianNetwork {
            name,
            rest_url,
            indexer_url,
            faucet_url,
            chain_id,
        }
    }

    pub fn mainnet() -> Self {
        Self::new(
            "mainnet",
            Url::parse(MAINNET_REST_URL).unwrap(),
            Some(Url::parse(MAINNET_INDEXER_URL).unwrap()),
            None,
            Some(ChainId::Mainnet),
        )
    }

    pub fn testnet() -> Self {
        Self::new(
            "testnet",
            Url::parse(TESTNET_REST_URL).unwrap(),
            Some(Url::parse(TESTNET_INDEXER_URL).unwrap()),
            Some(Url::parse(TESTNET_FAUCET_URL).unwrap()),
            Some(ChainId::Testnet),
        )
    }

    /// Devnet resets periodically, so its chain id changes and is always
    /// fetched from the node.
    pub fn devnet() -> Self {
        Self::new(
            "devnet",
            Url::parse(DEVNET_REST_URL).unwrap(),
            Some(Url::parse(DEVNET_INDEXER_URL).unwrap()),
            Some(Url::parse(DEVNET_FAUCET_URL).unwrap()),
            None,
        )
    }

    pub fn localnet() -> Self {
        Self::new(
            "localnet",
            Url::parse(LOCAL_REST_URL).unwrap(),
            Some(Url::parse(LOCAL_INDEXER_URL).unwrap()),
            Some(Url::parse(LOCAL_FAUCET_URL).unwrap()),
            Some(ChainId::Localnet),
        )
    }

    /// Looks up a preset network by name.
    ///
    /// This replaces a process-global network table: callers hold the
    /// returned value and pass it around explicitly.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "mainnet" => Some(Self::mainnet()),
            "testnet" => Some(Self::testnet()),
            "devnet" => Some(Self::devnet()),
            "localnet" => Some(Self::localnet()),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    pub fn indexer_url(&self) -> Option<&Url> {
        self.indexer_url.as_ref()
    }

    pub fn faucet_url(&self) -> Option<&Url> {
        self.faucet_url.as_ref()
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_rest_url(mut self, rest_url: Url) -> Self {
        self.rest_url = rest_url;
        self
    }

    pub fn with_indexer_url(mut self, indexer_url: Option<Url>) -> Self {
        self.indexer_url = indexer_url;
        self
    }

    pub fn with_faucet_url(mut self, faucet_url: Option<Url>) -> Self {
        self.faucet_url = faucet_url;
        self
    }

    pub fn with_chain_id(mut self, chain_id: Option<ChainId>) -> Self {
        self.chain_id = chain_id;
        self
    }
}
