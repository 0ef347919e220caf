//! Transaction and view payloads.

use crate::api_types::address::AccountAddress;
use crate::api_types::module_id::{ModuleId, TypeTag};
use serde::{Deserialize, Serialize};

/// The payload of a transaction or a view call.
///
/// This is a closed set: every consumer matches exhaustively, and the
/// builder/submission boundary rejects the variants that cannot ride in a
/// transaction ([`TransactionPayload::ViewFunction`]).
///
/// Variant order is the canonical wire order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionPayload {
    /// Execute a script with inline bytecode.
    Script(Script),
    /// Call an entry function on a published module.
    EntryFunction(EntryFunction),
    /// Execute an approved multisig-account transaction.
    Multisig(Multisig),
    /// A read-only view call descriptor. Only valid for the view invoker;
    /// building or submitting it as a transaction is a usage error.
    ViewFunction(ViewFunction),
}

impl TransactionPayload {
    /// Returns true if this payload can be carried by a transaction.
    pub fn is_submittable(&self) -> bool {
        match self {
            TransactionPayload::Script(_)
            | TransactionPayload::EntryFunction(_)
            | TransactionPayload::Multisig(_) => true,
            TransactionPayload::ViewFunction(_) => false,
        }
    }
}

/// A script payload with inline bytecode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// The bytecode to execute.
    #[serde(with = "serde_bytes")]
    pub code: Vec<u8>,
    /// Type arguments for the script.
    pub type_args: Vec<TypeTag>,
    /// BCS-encoded arguments.
    pub args: Vec<Vec<u8>>,
}

/// An entry function call payload.
///
/// The most common payload: calls a function marked `entry` in a published
/// module. Arguments arrive already BCS-encoded; argument encoding is the
/// caller's (or a codegen layer's) concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunction {
    /// The module containing the function.
    pub module: ModuleId,
    /// The function name.
    pub function: String,
    /// Type arguments for generic functions.
    pub type_args: Vec<TypeTag>,
    /// BCS-encoded arguments.
    pub args: Vec<Vec<u8>>,
}

impl EntryFunction {
    /// Creates a new entry function payload.
    pub fn new(
        module: ModuleId,
        function: impl Into<String>,
        type_args: Vec<TypeTag>,
        args: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            module,
            function: function.into(),
            type_args,
            args,
        }
    }
}

/// A multisig-account transaction payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multisig {
    /// The multisig account executing the transaction.
    pub multisig_address: AccountAddress,
    /// The inner call, when supplied inline rather than on chain.
    pub transaction_payload: Option<EntryFunction>,
}

/// A read-only view function descriptor.
///
/// Shares the entry-function shape but executes without commitment via the
/// `/view` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewFunction {
    /// The module containing the function.
    pub module: ModuleId,
    /// The function name.
    pub function: String,
    /// Type arguments for generic functions.
    pub type_args: Vec<TypeTag>,
    /// BCS-encoded arguments.
    pub args: Vec<Vec<u8>>,
}

impl ViewFunction {
    /// Creates a new view function descriptor.
    pub fn new(
        module: ModuleId,
        function: impl Into<String>,
        type_args: Vec<TypeTag>,
        args: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            module,
            function: function.into(),
            type_args,
            args,
        }
    }
}

impl From<EntryFunction> for TransactionPayload {
    fn from(entry_function: EntryFunction) -> Self {
        TransactionPayload::EntryFunction(entry_function)
    }
}

impl From<Script> for TransactionPayload {
    fn from(script: Script) -> Self {
        TransactionPayload::Script(script)
    }
}

impl From<Multisig> for TransactionPayload {
    fn from(multisig: Multisig) -> Self {
        TransactionPayload::Multisig(multisig)
    }
}

impl From<ViewFunction> for TransactionPayload {
    fn from(view: ViewFunction) -> Self {
        TransactionPayload::ViewFunction(view)
    }
}
