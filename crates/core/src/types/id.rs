//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Customer and product
//! IDs are issued by the commerce platform as 64-bit integers; wishlist IDs
//! are UUIDs generated by this service.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Prefix of the commerce platform's global resource IDs.
pub const GID_PREFIX: &str = "gid://shopify/";

/// A platform ID string that is neither a number nor a matching global ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {resource} id: {value:?}")]
pub struct ParseIdError {
    /// Platform resource the ID was parsed for, e.g. `Customer`.
    pub resource: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Parse a platform ID given either as a bare number (`42`) or as a global
/// ID of the expected resource (`gid://shopify/Customer/42`).
///
/// # Errors
///
/// Returns `ParseIdError` for anything else, including a global ID of a
/// different resource.
pub fn parse_platform_id(resource: &'static str, value: &str) -> Result<i64, ParseIdError> {
    let trimmed = value.trim();
    let numeric = match trimmed.strip_prefix(GID_PREFIX) {
        Some(rest) => rest
            .strip_prefix(resource)
            .and_then(|rest| rest.strip_prefix('/')),
        None => Some(trimmed),
    };

    numeric
        .and_then(|n| n.parse::<i64>().ok())
        .ok_or_else(|| ParseIdError {
            resource,
            value: value.to_owned(),
        })
}

/// Define a newtype over a platform-issued 64-bit ID.
///
/// `define_id!(Name => "Resource")` creates `Name(i64)` with:
/// - transparent `serde` and (with the `postgres` feature) `sqlx` encoding
/// - `new()`, `as_i64()`, `to_gid()` and the `RESOURCE` constant
/// - `FromStr` accepting either `42` or `gid://shopify/Resource/42`
/// - `Display` as the bare number, `From<i64>` and `Into<i64>`
///
/// # Example
///
/// ```rust
/// # use wishlist_core::define_id;
/// define_id!(
///     /// An order on the platform.
///     OrderId => "Order"
/// );
///
/// let id: OrderId = "gid://shopify/Order/7".parse().unwrap();
/// assert_eq!(id, OrderId::new(7));
/// assert_eq!(id.to_gid(), "gid://shopify/Order/7");
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $resource:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[cfg_attr(feature = "postgres", derive(::sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Resource name used in the platform's global IDs.
            pub const RESOURCE: &'static str = $resource;

            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// The platform global ID, e.g. `gid://shopify/Customer/42`.
            #[must_use]
            pub fn to_gid(&self) -> String {
                format!("{}{}/{}", $crate::GID_PREFIX, $resource, self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseIdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::parse_platform_id($resource, s).map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// A customer account on the commerce platform.
    CustomerId => "Customer"
);
define_id!(
    /// A product in the shop catalog.
    ProductId => "Product"
);

/// Identifier of a wishlist.
///
/// Generated by the service (UUID v4) before the first save, so persisting
/// the same wishlist twice updates a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
#[serde(transparent)]
pub struct WishlistId(Uuid);

impl WishlistId {
    /// Generate a fresh random wishlist ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for WishlistId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for WishlistId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<WishlistId> for Uuid {
    fn from(id: WishlistId) -> Self {
        id.0
    }
}
