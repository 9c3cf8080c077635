//! ABI model - function entries indexed by name

use std::collections::HashMap;
use std::sync::Arc;

use alloy_json_abi::StateMutability;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A function parameter specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    /// Cairo type (e.g., "felt", "felt*", "Uint256")
    #[serde(rename = "type")]
    pub kind: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A callable function entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionAbi {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<ParamSpec>,
    #[serde(default)]
    pub outputs: Vec<ParamSpec>,
    /// Absent for state-changing functions
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<StateMutability>,
}

impl FunctionAbi {
    /// Whether the function only reads state
    pub fn is_view(&self) -> bool {
        matches!(
            self.state_mutability,
            Some(StateMutability::View | StateMutability::Pure)
        )
    }
}

/// Raw ABI entry, tagged by its `type` field
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AbiEntry {
    Function(FunctionAbi),
    #[serde(other)]
    Other,
}

/// Parsed contract ABI. Only `function` entries are callable.
#[derive(Debug, Default, Clone)]
pub struct Abi {
    /// Functions indexed by name
    functions: HashMap<String, Arc<FunctionAbi>>,
    /// Declaration order
    order: Vec<String>,
}

impl Abi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON ABI array, skipping everything but functions
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<AbiEntry> = serde_json::from_str(json)
            .map_err(|e| Error::Abi(format!("invalid ABI json: {}", e)))?;

        let mut abi = Self::new();
        for entry in entries {
            if let AbiEntry::Function(function) = entry {
                abi.insert(function);
            }
        }
        Ok(abi)
    }

    pub fn from_functions(functions: impl IntoIterator<Item = FunctionAbi>) -> Self {
        let mut abi = Self::new();
        for function in functions {
            abi.insert(function);
        }
        abi
    }

    /// Insert a function entry
    ///
    /// Note: First function for a given name wins (no overwrite)
    pub fn insert(&mut self, function: FunctionAbi) {
        if self.functions.contains_key(&function.name) {
            return;
        }
        self.order.push(function.name.clone());
        self.functions
            .insert(function.name.clone(), Arc::new(function));
    }

    /// Look up a function by name
    pub fn lookup(&self, name: &str) -> Option<&Arc<FunctionAbi>> {
        self.functions.get(name)
    }

    /// Functions in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &Arc<FunctionAbi>> {
        self.order.iter().filter_map(|name| self.functions.get(name))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
