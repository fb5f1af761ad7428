use std::borrow::Cow;
use std::collections::hash_map::Entry;

use ahash::HashMap;

use crate::options::{NewlineMode, ProfileOptions, SelfClosingStyle};
use crate::profile::Profile;

/// Syntax-scoped profile override lookup.
///
/// A host may configure a preferred profile per syntax (for example,
/// always use the `xml` profile when generating XSL). The registry
/// consults this collaborator before resolving a profile name.
pub trait SyntaxProfiles {
    /// The profile name configured for `syntax`, if any.
    fn profile_for(&self, syntax: &str) -> Option<&str>;
}

/// No syntax-scoped overrides.
impl SyntaxProfiles for () {
    fn profile_for(&self, _syntax: &str) -> Option<&str> {
        None
    }
}

/// A profile reference as supplied by a caller: either the name of a
/// registered profile, or inline per-call options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSpec {
    Name(String),
    Inline(ProfileOptions),
}

/// The name to [`Profile`] store.
///
/// Construct one per host application; there is no hidden global state.
/// Lookups are case-insensitive and keys are stored lowercased. A new
/// registry holds four built-in profiles: `xhtml`, `html`, `xml` and
/// `plain`.
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
    // backs `get` if the `plain` entry itself has been removed
    fallback: Profile,
}

fn plain_options() -> ProfileOptions {
    ProfileOptions {
        tag_nl: Some(NewlineMode::Never),
        indent: Some(false),
        place_cursor: Some(false),
        ..Default::default()
    }
}

impl ProfileRegistry {
    /// Create a registry populated with the built-in profiles.
    pub fn new() -> ProfileRegistry {
        let mut registry = ProfileRegistry {
            profiles: HashMap::default(),
            fallback: Profile::new(plain_options()),
        };
        registry.create("xhtml", ProfileOptions::default());
        registry.create(
            "html",
            ProfileOptions {
                self_closing_tag: Some(SelfClosingStyle::Empty),
                ..Default::default()
            },
        );
        registry.create(
            "xml",
            ProfileOptions {
                self_closing_tag: Some(SelfClosingStyle::Slash),
                tag_nl: Some(NewlineMode::Always),
                ..Default::default()
            },
        );
        registry.create("plain", plain_options());
        registry
    }

    /// Build a profile from `options` and store it under `name`,
    /// overwriting any existing entry with that name.
    pub fn create(&mut self, name: &str, options: ProfileOptions) -> &Profile {
        let profile = Profile::new(options);
        match self.profiles.entry(name.to_lowercase()) {
            Entry::Occupied(mut entry) => {
                entry.insert(profile);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(profile),
        }
    }

    /// Look up a profile by name, case-insensitively.
    ///
    /// Unknown names resolve to the `plain` profile.
    pub fn get(&self, name: &str) -> &Profile {
        self.profiles
            .get(&name.to_lowercase())
            .or_else(|| self.profiles.get("plain"))
            .unwrap_or(&self.fallback)
    }

    /// Look up a profile by name, letting a syntax-scoped override
    /// substitute the name first.
    pub fn get_for_syntax(
        &self,
        name: &str,
        syntax: &str,
        config: &impl SyntaxProfiles,
    ) -> &Profile {
        let name = config.profile_for(syntax).unwrap_or(name);
        self.get(name)
    }

    /// Resolve a [`ProfileSpec`] to a profile.
    ///
    /// Named specs go through the registry, with the syntax override
    /// applied when `syntax` is given. Inline options build a fresh
    /// free-standing profile without touching the registry.
    pub fn resolve(
        &self,
        spec: &ProfileSpec,
        syntax: Option<&str>,
        config: &impl SyntaxProfiles,
    ) -> Cow<'_, Profile> {
        match spec {
            ProfileSpec::Name(name) => Cow::Borrowed(match syntax {
                Some(syntax) => self.get_for_syntax(name, syntax, config),
                None => self.get(name),
            }),
            ProfileSpec::Inline(options) => Cow::Owned(Profile::new(options.clone())),
        }
    }

    /// Remove the profile stored under `name`, if any.
    pub fn remove(&mut self, name: &str) {
        self.profiles.remove(&name.to_lowercase());
    }
}

impl Default for ProfileRegistry {
    fn default() -> ProfileRegistry {
        ProfileRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_present() {
        let registry = ProfileRegistry::new();
        assert_eq!(registry.get("html").self_closing(), "");
        assert_eq!(registry.get("xml").self_closing(), "/");
        assert_eq!(registry.get("xhtml").self_closing(), " /");
        assert!(!registry.get("plain").place_cursor);
    }

    #[test]
    fn test_keys_stored_lowercased() {
        let mut registry = ProfileRegistry::new();
        registry.create("MyProfile", ProfileOptions::default());
        assert_eq!(registry.get("myprofile"), registry.get("MYPROFILE"));
        assert_ne!(registry.get("myprofile"), registry.get("plain"));
    }
}
