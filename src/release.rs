//! Release channels a cluster can track.

use std::fmt;

use serde::Serialize;

/// Stability track controlling which software version line a cluster follows.
///
/// The set is closed: [`ReleaseChannel::SUPPORTED`] is the only place
/// that lists accepted channels. Adding a channel means adding a variant,
/// its name in [`ReleaseChannel::as_str`], and an entry in `SUPPORTED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    /// Fastest-moving channel.
    Alpha,
    /// Release candidates promoted from alpha.
    Beta,
}

impl ReleaseChannel {
    /// Every channel accepted in a descriptor.
    pub const SUPPORTED: [Self; 2] = [Self::Alpha, Self::Beta];

    /// Returns the descriptor spelling of this channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
        }
    }

    /// Finds the supported channel spelled exactly `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluster_netcheck::release::ReleaseChannel;
    ///
    /// assert_eq!(ReleaseChannel::lookup("beta"), Some(ReleaseChannel::Beta));
    /// assert_eq!(ReleaseChannel::lookup("stable"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::SUPPORTED
            .into_iter()
            .find(|channel| channel.as_str() == name)
    }

    /// Returns true if `name` is a supported channel.
    #[must_use]
    pub fn is_supported(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    /// Comma-separated list of supported names, for error messages.
    #[must_use]
    pub fn supported_names() -> String {
        Self::SUPPORTED
            .iter()
            .map(|channel| channel.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_channel_round_trips_through_lookup() {
        for channel in ReleaseChannel::SUPPORTED {
            assert_eq!(ReleaseChannel::lookup(channel.as_str()), Some(channel));
        }
    }

    #[test]
    fn alpha_and_beta_are_supported() {
        assert!(ReleaseChannel::is_supported("alpha"));
        assert!(ReleaseChannel::is_supported("beta"));
    }

    #[test]
    fn stable_is_not_supported_yet() {
        assert!(!ReleaseChannel::is_supported("stable"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(ReleaseChannel::lookup("Alpha"), None);
        assert_eq!(ReleaseChannel::lookup(" alpha"), None);
        assert_eq!(ReleaseChannel::lookup(""), None);
        assert_eq!(ReleaseChannel::lookup("non-existant"), None);
    }

    #[test]
    fn supported_names_lists_all() {
        assert_eq!(ReleaseChannel::supported_names(), "alpha, beta");
    }

    #[test]
    fn display_uses_descriptor_spelling() {
        assert_eq!(ReleaseChannel::Beta.to_string(), "beta");
    }
}
