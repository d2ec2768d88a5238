//! Service options

use uservars_types::prelude::*;

const ENV_STRICT_GET_ALL: &str = "USERVARS_STRICT_GET_ALL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserVarsOpts {
	/// Check per-key uniqueness within each scope in `get_all` too.
	/// `get` always checks.
	pub strict_get_all: bool,
}

impl UserVarsOpts {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strict_get_all(mut self, strict: bool) -> Self {
		self.strict_get_all = strict;
		self
	}

	/// Build options from `USERVARS_STRICT_GET_ALL`, unset variables keep their defaults
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	fn from_lookup<F>(lookup: F) -> ClResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut opts = Self::default();
		if let Some(value) = lookup(ENV_STRICT_GET_ALL) {
			opts.strict_get_all = parse_flag(ENV_STRICT_GET_ALL, &value)?;
		}
		Ok(opts)
	}
}

fn parse_flag(name: &str, value: &str) -> ClResult<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(Error::ConfigError(format!("Invalid boolean value for {}: {}", name, value))),
	}
}


// vim: ts=4
