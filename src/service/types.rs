//! Wire types shared across the transformer service requests and responses
//!
//! Enum-valued service fields are open string enums: the service publishes a
//! set of known members but validates membership itself, so this layer
//! carries them as transparent string newtypes and passes unknown values
//! through verbatim. Named constants cover the members the service documents.

use serde::{Deserialize, Serialize};

macro_rules! service_string_enum {
    ($(#[$meta:meta])* $name:ident { $($member:ident = $value:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            $(pub const $member: &'static str = $value;)*

            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

service_string_enum!(
    /// Document format a transformer converts to.
    FileFormat {
        JSON = "JSON",
        XML = "XML",
    }
);

service_string_enum!(
    /// Lifecycle status of a transformer, assigned by the service.
    TransformerStatus {
        ACTIVE = "active",
        INACTIVE = "inactive",
    }
);

service_string_enum!(
    /// X12 transaction set code (e.g. purchase order, invoice).
    X12TransactionSet {
        X12_214 = "X12_214",
        X12_810 = "X12_810",
        X12_850 = "X12_850",
        X12_997 = "X12_997",
    }
);

service_string_enum!(
    /// X12 release/version identifier.
    X12Version {
        VERSION_4010 = "VERSION_4010",
        VERSION_4030 = "VERSION_4030",
        VERSION_5010 = "VERSION_5010",
    }
);

/// Tag shape the service expects on tagging requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// X12 transaction details in the service's typed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Details {
    pub transaction_set: X12TransactionSet,
    pub version: X12Version,
}

/// The service's EDI typing union. X12 is the only member it defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdiType {
    X12Details(X12Details),
}
