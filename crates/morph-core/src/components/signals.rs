//! Channel Signals
//!
//! Named activations flowing from sensing into the network and out to actions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of channel name to activation.
///
/// Lookups of channels that were never set read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signals(BTreeMap<String, f64>);

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activation of a channel, `0.0` when absent
    pub fn get(&self, channel: &str) -> f64 {
        self.0.get(channel).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.0.contains_key(channel)
    }

    pub fn set(&mut self, channel: impl Into<String>, value: f64) {
        self.0.insert(channel.into(), value);
    }

    /// Add to a channel, starting from `0.0` if it is absent
    pub fn accumulate(&mut self, channel: &str, value: f64) {
        match self.0.get_mut(channel) {
            Some(current) => *current += value,
            None => {
                self.0.insert(channel.to_string(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Signals {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
