//! Error type shared by the service and the store adapters

use crate::types::Scope;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// More than one entry exists for a single key at a single scope.
	/// Never retried: picking one of them could expose another owner's value.
	Integrity {
		key: Box<str>,
		scope: Scope,
	},
	NotFound,
	/// Store failure. Adapters log the underlying cause before mapping to this.
	DbError,
	ValidationError(String),
	ConfigError(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	pub fn integrity(key: impl Into<Box<str>>, scope: Scope) -> Self {
		Error::Integrity { key: key.into(), scope }
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Integrity { key, scope } => {
				write!(f, "Multiple values found for key {} at {} level", key, scope)
			}
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ValidationError(err.to_string())
	}
}


// vim: ts=4
