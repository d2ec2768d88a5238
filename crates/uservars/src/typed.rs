//! Typed access to user variables
//!
//! Binds a key to its value type at compile time. Values are still stored and
//! merged as opaque JSON; decoding happens at this boundary only.

use serde::{Serialize, de::DeserializeOwned};

use uservars_types::prelude::*;

use crate::service::UserVarsService;

/// A user variable with a fixed key and value type
///
/// ```ignore
/// struct Theme;
///
/// impl UserVar for Theme {
/// 	const KEY: &'static str = "theme";
/// 	type Value = String;
/// }
///
/// let theme = service.get_var::<Theme>(&ctx).await?;
/// ```
pub trait UserVar {
	const KEY: &'static str;
	type Value: Serialize + DeserializeOwned + Send;
}

impl UserVarsService {
	pub async fn get_var<V: UserVar>(&self, ctx: &OwnerContext) -> ClResult<Option<V::Value>> {
		match self.get(ctx, V::KEY).await? {
			Some(value) => serde_json::from_value(value).map(Some).map_err(|err| {
				Error::ValidationError(format!("Invalid value for user var '{}': {}", V::KEY, err))
			}),
			None => Ok(None),
		}
	}

	pub async fn set_var<V: UserVar>(&self, owner: &ScopeSelector, value: &V::Value) -> ClResult<()> {
		let value = serde_json::to_value(value).map_err(|err| {
			Error::ValidationError(format!("Failed to serialize user var '{}': {}", V::KEY, err))
		})?;
		self.set(owner, V::KEY, value).await
	}

	pub async fn delete_var<V: UserVar>(&self, owner: &ScopeSelector) -> ClResult<u64> {
		self.delete(owner, V::KEY).await
	}
}

// vim: ts=4
