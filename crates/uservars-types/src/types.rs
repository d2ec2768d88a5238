//! Common types used by the resolver, the service and the store adapters.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

// Scope //
//*******//
/// Owner tier of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
	/// Shared by all users of a workspace
	#[serde(rename = "workspace")]
	Workspace,
	/// Specific to one user, overrides the workspace value
	#[serde(rename = "user")]
	User,
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Scope::Workspace => write!(f, "workspace"),
			Scope::User => write!(f, "user"),
		}
	}
}

// ScopeSelector //
//***************//
/// Selects exactly one owner at exactly one scope.
///
/// Workspace selection never carries a user component, so a workspace lookup
/// cannot match rows that belong to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "lowercase")]
pub enum ScopeSelector {
	Workspace(Box<str>),
	User(Box<str>),
}

impl ScopeSelector {
	pub fn workspace(workspace_id: impl Into<Box<str>>) -> Self {
		ScopeSelector::Workspace(workspace_id.into())
	}

	pub fn user(user_id: impl Into<Box<str>>) -> Self {
		ScopeSelector::User(user_id.into())
	}

	pub fn scope(&self) -> Scope {
		match self {
			ScopeSelector::Workspace(_) => Scope::Workspace,
			ScopeSelector::User(_) => Scope::User,
		}
	}

	pub fn owner_id(&self) -> &str {
		match self {
			ScopeSelector::Workspace(id) | ScopeSelector::User(id) => id,
		}
	}
}

impl std::fmt::Display for ScopeSelector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.scope(), self.owner_id())
	}
}

// KvPairType //
//************//
/// Row type in the shared key-value store.
///
/// The store is shared with other subsystems; user variable reads must only see `UserVar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KvPairType {
	#[serde(rename = "USER_VAR")]
	UserVar,
	#[serde(rename = "FEATURE_FLAG")]
	FeatureFlag,
	#[serde(rename = "CONFIG_VARIABLE")]
	ConfigVariable,
}

impl KvPairType {
	pub fn as_str(&self) -> &'static str {
		match self {
			KvPairType::UserVar => "USER_VAR",
			KvPairType::FeatureFlag => "FEATURE_FLAG",
			KvPairType::ConfigVariable => "CONFIG_VARIABLE",
		}
	}
}

impl std::str::FromStr for KvPairType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"USER_VAR" => Ok(KvPairType::UserVar),
			"FEATURE_FLAG" => Ok(KvPairType::FeatureFlag),
			"CONFIG_VARIABLE" => Ok(KvPairType::ConfigVariable),
			_ => Err(Error::ValidationError(format!("Unknown key-value pair type: {}", s))),
		}
	}
}

impl std::fmt::Display for KvPairType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

// ScopedEntry //
//*************//
/// A single stored fact, as returned by a store adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedEntry {
	pub key: Box<str>,
	pub value: serde_json::Value,
	pub owner: ScopeSelector,
}

impl ScopedEntry {
	pub fn new(owner: ScopeSelector, key: impl Into<Box<str>>, value: serde_json::Value) -> Self {
		Self { key: key.into(), value, owner }
	}

	pub fn scope(&self) -> Scope {
		self.owner.scope()
	}
}

// OwnerContext //
//**************//
/// Identifies the reader of user variables.
///
/// A missing id means the corresponding scope is not consulted at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerContext {
	pub user_id: Option<Box<str>>,
	pub workspace_id: Option<Box<str>>,
}

impl OwnerContext {
	pub fn new(user_id: impl Into<Box<str>>, workspace_id: impl Into<Box<str>>) -> Self {
		Self { user_id: Some(user_id.into()), workspace_id: Some(workspace_id.into()) }
	}

	pub fn with_user(mut self, user_id: impl Into<Box<str>>) -> Self {
		self.user_id = Some(user_id.into());
		self
	}

	pub fn with_workspace(mut self, workspace_id: impl Into<Box<str>>) -> Self {
		self.workspace_id = Some(workspace_id.into());
		self
	}

	pub fn workspace_selector(&self) -> Option<ScopeSelector> {
		self.workspace_id.as_deref().map(ScopeSelector::workspace)
	}

	pub fn user_selector(&self) -> Option<ScopeSelector> {
		self.user_id.as_deref().map(ScopeSelector::user)
	}
}


// vim: ts=4
