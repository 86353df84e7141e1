use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability represents a bitmask of what a membership allows within its project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(u32);

impl Capability {
    pub const VIEW: Capability = Capability(1 << 0); // 1
    pub const EDIT: Capability = Capability(1 << 1); // 2
    pub const ADMINISTER: Capability = Capability(1 << 2); // 4

    /// Returns true if this bitmask contains the required capability.
    #[must_use]
    pub const fn has(self, required: Capability) -> bool {
        self.0 & required.0 == required.0
    }

    #[must_use]
    pub const fn union(self, other: Capability) -> Capability {
        Capability(self.0 | other.0)
    }

    /// Expands a bitmask to include implied capabilities.
    /// administer implies edit implies view.
    #[must_use]
    pub fn expand_implied(self) -> Capability {
        let mut result = self.0;

        if self.has(Self::ADMINISTER) {
            result |= Self::EDIT.0;
        }
        if Capability(result).has(Self::EDIT) {
            result |= Self::VIEW.0;
        }

        Capability(result)
    }

    /// Derives the capability set of a membership from its owner/editor flags.
    /// Every membership can at least view its project.
    #[must_use]
    pub fn from_flags(is_owner: bool, is_editor: bool) -> Capability {
        let mut caps = Self::VIEW;
        if is_editor {
            caps = caps.union(Self::EDIT);
        }
        if is_owner {
            caps = caps.union(Self::ADMINISTER);
        }
        caps.expand_implied()
    }

    #[must_use]
    pub fn to_strings(self) -> Vec<&'static str> {
        let mut caps = Vec::new();
        if self.has(Self::VIEW) {
            caps.push("view");
        }
        if self.has(Self::EDIT) {
            caps.push("edit");
        }
        if self.has(Self::ADMINISTER) {
            caps.push("administer");
        }
        caps
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_strings().join(", "))
    }
}
