use serde::{Deserialize, Serialize};
use std::fmt;

/// Fine-grained permission level a viewer holds on a match patient,
/// as computed by the external permission layer. This core never
/// reinterprets it beyond the tier classification below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    None,
    Match,
    View,
    Edit,
    Owner,
}

impl Permission {
    /// Canonical short tag used in serialization.
    pub fn tag(self) -> &'static str {
        match self {
            Permission::None => "none",
            Permission::Match => "match",
            Permission::View => "view",
            Permission::Edit => "edit",
            Permission::Owner => "owner",
        }
    }
}

/// Disclosure tier governing how much of a match patient a viewer may
/// see for one (match, reference) comparison. Computed once per pair
/// and immutable for the lifetime of a view.
///
/// Exactly one of the three predicates is true for any tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessTier {
    permission: Permission,
}

impl AccessTier {
    pub const fn new(permission: Permission) -> Self {
        Self { permission }
    }

    /// The underlying fine-grained permission this tier was derived from.
    pub fn permission(self) -> Permission {
        self.permission
    }

    /// Full disclosure: the viewer can see the match patient outright.
    pub fn is_open_access(self) -> bool {
        self.permission >= Permission::View
    }

    /// Score-only disclosure: matching pairs visible, identities hidden.
    pub fn is_limited_access(self) -> bool {
        self.permission == Permission::Match
    }

    /// No disclosure.
    pub fn is_private_access(self) -> bool {
        self.permission == Permission::None
    }

    /// Canonical short tag used in serialization.
    pub fn tag(self) -> &'static str {
        self.permission.tag()
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<Permission> for AccessTier {
    fn from(permission: Permission) -> Self {
        Self::new(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Permission; 5] = [
        Permission::None,
        Permission::Match,
        Permission::View,
        Permission::Edit,
        Permission::Owner,
    ];

    #[test]
    fn exactly_one_predicate_true_per_tier() {
        for p in ALL {
            let tier = AccessTier::new(p);
            let flags = [
                tier.is_open_access(),
                tier.is_limited_access(),
                tier.is_private_access(),
            ];
            assert_eq!(
                flags.iter().filter(|f| **f).count(),
                1,
                "tier {tier} must satisfy exactly one predicate"
            );
        }
    }

    #[test]
    fn open_tiers_cover_view_edit_owner() {
        assert!(AccessTier::new(Permission::View).is_open_access());
        assert!(AccessTier::new(Permission::Edit).is_open_access());
        assert!(AccessTier::new(Permission::Owner).is_open_access());
        assert!(AccessTier::new(Permission::Match).is_limited_access());
        assert!(AccessTier::new(Permission::None).is_private_access());
    }

    #[test]
    fn tags_are_canonical() {
        let tags: Vec<&str> = ALL.iter().map(|p| AccessTier::new(*p).tag()).collect();
        assert_eq!(tags, ["none", "match", "view", "edit", "owner"]);
    }

    #[test]
    fn tier_ordering_follows_permission() {
        let mut tiers: Vec<AccessTier> = ALL.iter().map(|p| AccessTier::new(*p)).collect();
        tiers.sort();
        assert!(tiers.first().unwrap().is_private_access());
        assert!(tiers.last().unwrap().is_open_access());
    }

    #[test]
    fn permission_is_retrievable_unchanged() {
        for p in ALL {
            assert_eq!(AccessTier::new(p).permission(), p);
        }
    }
}
