//! Precedence resolution between workspace and user scoped entries

use std::collections::HashMap;

use uservars_types::prelude::*;

/// Effective key -> value mapping, built fresh on every resolution
pub type EffectiveMapping = HashMap<Box<str>, serde_json::Value>;

/// Merge scoped entries into effective values.
///
/// Workspace entries are applied first, user entries second, so a user value
/// replaces the workspace value of the same key. The order of `entries` does not
/// matter. Duplicates within one scope are not detected here: the later one wins.
pub fn merge<I>(entries: I) -> EffectiveMapping
where
	I: IntoIterator<Item = ScopedEntry>,
{
	let (user, workspace): (Vec<_>, Vec<_>) =
		entries.into_iter().partition(|entry| entry.scope() == Scope::User);

	let mut mapping = EffectiveMapping::with_capacity(workspace.len() + user.len());
	for entry in workspace.into_iter().chain(user) {
		mapping.insert(entry.key, entry.value);
	}

	mapping
}


// vim: ts=4
