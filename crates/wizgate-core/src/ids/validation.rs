//!
//! Validation identifiers as reported by the provisioning API.
//!
//! Stored as `Cow<'static, str>` so the built-in rule table is zero-copy while
//! names read from config or JSON allocate only when needed.
//!

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, borrow::Cow, str::FromStr};

macro_rules! impl_validation_name {
    ($ty:ident) => {
        impl $ty {
            #[must_use]
            pub const fn new(s: &'static str) -> Self {
                Self(Cow::Borrowed(s))
            }

            #[must_use]
            pub const fn owned(s: String) -> Self {
                Self(Cow::Owned(s))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn into_string(self) -> String {
                self.0.into_owned()
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::owned(s.to_string()))
            }
        }

        impl From<&'static str> for $ty {
            fn from(s: &'static str) -> Self {
                Self(Cow::Borrowed(s))
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(Cow::Owned(s))
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.into_string()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }
    };
}

///
/// ValidationId
///
/// Identifier of a single check, e.g. "pull-secret-set" or "connected".
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ValidationId(pub Cow<'static, str>);

impl ValidationId {
    pub const PULL_SECRET_SET: Self = Self::new("pull-secret-set");
    pub const DNS_DOMAIN_DEFINED: Self = Self::new("dns-domain-defined");
    pub const OCS_REQUIREMENTS_SATISFIED: Self = Self::new("ocs-requirements-satisfied");
    pub const ALL_HOSTS_READY_TO_INSTALL: Self = Self::new("all-hosts-are-ready-to-install");
    pub const CONNECTED: Self = Self::new("connected");
    pub const CONTAINER_IMAGES_AVAILABLE: Self = Self::new("container-images-available");
}

impl_validation_name!(ValidationId);

///
/// ValidationGroup
///
/// Category bundling related validations, e.g. "hardware" or "network".
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ValidationGroup(pub Cow<'static, str>);

impl ValidationGroup {
    pub const HARDWARE: Self = Self::new("hardware");
    pub const NETWORK: Self = Self::new("network");
}

impl_validation_name!(ValidationGroup);

///
/// TESTS
///
