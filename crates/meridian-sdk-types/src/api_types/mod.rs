//! Types exchanged with the Meridian node API.

pub mod account;
pub mod address;
pub mod chain_id;
pub mod event;
pub mod gas;
pub mod hash;
pub mod ledger_info;
pub mod module_id;
pub mod numbers;
pub mod payload;
pub mod transaction;
pub mod transaction_authenticator;
pub mod transaction_response;

pub use account::AccountInfo;
pub use address::{AccountAddress, ADDRESS_LENGTH};
pub use chain_id::ChainId;
pub use event::{Event, EventGuid};
pub use gas::GasEstimation;
pub use hash::{HashValue, HASH_LENGTH};
pub use ledger_info::{HealthCheckResponse, NodeInfo};
pub use module_id::{ModuleId, StructTag, TypeTag};
pub use numbers::U64;
pub use payload::{EntryFunction, Multisig, Script, TransactionPayload, ViewFunction};
pub use transaction::{RawTransaction, RawTransactionWithData, SignedTransaction};
pub use transaction_authenticator::{
    AccountAuthenticator, TransactionAuthenticator, TransactionSigner,
};
pub use transaction_response::{
    BatchSubmitResult, PendingTransaction, Transaction, TransactionFailure,
    TransactionFailureError,
};
