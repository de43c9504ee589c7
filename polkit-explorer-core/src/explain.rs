//! Static human-readable explanations for the known default tags and
//! authorization values, from polkit(8) and pklocalauthority(8).
//!
//! Pure presentation data consumed by the UI layer; nothing here is
//! derived from the loaded document.

use crate::NO_DESCRIPTION;

const TAG_DESCS: &[(&str, &str)] = &[
    (
        "allow_any",
        "Implicit authorization that applies to all subjects regardless of \
         whether they have an active or inactive session.",
    ),
    (
        "allow_inactive",
        "Authorization that applies only to subjects in an inactive session \
         (e.g. a remote SSH login).",
    ),
    (
        "allow_active",
        "Authorization that applies only to subjects in an active local \
         session (physically at the console).",
    ),
];

const VALUE_DESCS: &[(&str, &str)] = &[
    ("yes", "Action is allowed without further authentication."),
    ("no", "Action is always denied."),
    (
        "auth_self",
        "The local user must authenticate (e.g. enter password).",
    ),
    (
        "auth_self_keep",
        "Same as auth_self but the authentication is kept for a short \
         period (about 5 minutes) for the same process.",
    ),
    (
        "auth_admin",
        "An administrator (member of the admin group) must authenticate.",
    ),
    (
        "auth_admin_keep",
        "Like auth_admin but the privilege is cached for a few minutes \
         for the same process.",
    ),
];

/// The two immutable tag/value prose mappings for the explanation pane.
#[derive(Debug, Clone, Copy)]
pub struct Explanations {
    tags: &'static [(&'static str, &'static str)],
    values: &'static [(&'static str, &'static str)],
}

impl Explanations {
    /// The standard polkit tables: three tags, six values.
    pub fn standard() -> Self {
        Explanations {
            tags: TAG_DESCS,
            values: VALUE_DESCS,
        }
    }

    /// Prose for a defaults tag; unknown tags degrade to the generic
    /// sentinel rather than an error.
    pub fn tag(&self, name: &str) -> &'static str {
        lookup(self.tags, name)
    }

    /// Prose for an authorization value; unknown values degrade to the
    /// generic sentinel.
    pub fn value(&self, name: &str) -> &'static str {
        lookup(self.values, name)
    }
}

impl Default for Explanations {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(NO_DESCRIPTION)
}
