//! Module and type identifiers.

use crate::api_types::address::AccountAddress;
use crate::error::{MeridianError, MeridianResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a module on chain: publishing address plus module name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    /// The address the module is published under.
    pub address: AccountAddress,
    /// The module name.
    pub name: String,
}

impl ModuleId {
    /// Creates a new module id.
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address.to_short_string(), self.name)
    }
}

impl FromStr for ModuleId {
    type Err = MeridianError;

    /// Parses `0x1::coin` style module ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split("::");
        let (address, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(name), None) if !name.is_empty() => (address, name),
            _ => {
                return Err(MeridianError::usage(format!(
                    "invalid module id '{s}', expected '<address>::<name>'"
                )))
            }
        };
        Ok(Self {
            address: AccountAddress::from_hex(address)?,
            name: name.to_string(),
        })
    }
}

/// A fully-qualified struct type, e.g. `0x1::coin::Coin<0x1::native::Native>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: String,
    pub name: String,
    pub type_args: Vec<TypeTag>,
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.address.to_short_string(),
            self.module,
            self.name
        )?;
        if !self.type_args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// A type argument to a generic function or struct.
///
/// Variant order is the canonical wire order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for TypeTag {
    type Err = MeridianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s.trim())
    }
}

fn parse_type_tag(s: &str) -> MeridianResult<TypeTag> {
    Ok(match s {
        "bool" => TypeTag::Bool,
        "u8" => TypeTag::U8,
        "u16" => TypeTag::U16,
        "u32" => TypeTag::U32,
        "u64" => TypeTag::U64,
        "u128" => TypeTag::U128,
        "u256" => TypeTag::U256,
        "address" => TypeTag::Address,
        "signer" => TypeTag::Signer,
        _ => {
            if let Some(inner) = s.strip_prefix("vector<").and_then(|r| r.strip_suffix('>')) {
                TypeTag::Vector(Box::new(parse_type_tag(inner.trim())?))
            } else {
                TypeTag::Struct(Box::new(parse_struct_tag(s)?))
            }
        }
    })
}

fn parse_struct_tag(s: &str) -> MeridianResult<StructTag> {
    let (path, type_args) = match s.split_once('<') {
        Some((path, rest)) => {
            let inner = rest
                .strip_suffix('>')
                .ok_or_else(|| MeridianError::InvalidTypeTag(s.to_string()))?;
            (path, split_type_args(inner)?)
        }
        None => (s, Vec::new()),
    };

    let mut parts = path.split("::");
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(address), Some(module), Some(name), None) if !name.is_empty() => Ok(StructTag {
            address: AccountAddress::from_hex(address)?,
            module: module.to_string(),
            name: name.to_string(),
            type_args,
        }),
        _ => Err(MeridianError::InvalidTypeTag(s.to_string())),
    }
}

/// Splits `A, B<C, D>, E` at top-level commas only.
fn split_type_args(s: &str) -> MeridianResult<Vec<TypeTag>> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| MeridianError::InvalidTypeTag(s.to_string()))?;
            }
            ',' if depth == 0 => {
                args.push(parse_type_tag(s[start..i].trim())?);
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = s[start..].trim();
    if !tail.is_empty() {
        args.push(parse_type_tag(tail)?);
    }
    Ok(args)
}
