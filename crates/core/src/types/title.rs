//! Wishlist title type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`WishlistTitle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// The input is empty or whitespace only.
    #[error("wishlist title cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("wishlist title must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A display title for a wishlist.
///
/// ## Constraints
///
/// - Leading and trailing whitespace is trimmed
/// - Length: 1-255 characters after trimming
///
/// ## Examples
///
/// ```
/// use wishlist_core::WishlistTitle;
///
/// assert_eq!(WishlistTitle::parse("  My Wishlist ").unwrap().as_str(), "My Wishlist");
/// assert!(WishlistTitle::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct WishlistTitle(String);

impl WishlistTitle {
    /// Maximum length of a title, in characters.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `WishlistTitle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, TitleError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WishlistTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for WishlistTitle {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WishlistTitle {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WishlistTitle> for String {
    fn from(title: WishlistTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for WishlistTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for WishlistTitle {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for WishlistTitle {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(&s)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for WishlistTitle {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let title = WishlistTitle::parse("\tBirthday ideas  ").unwrap();
        assert_eq!(title.as_str(), "Birthday ideas");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(WishlistTitle::parse(""), Err(TitleError::Empty));
        assert_eq!(WishlistTitle::parse("   "), Err(TitleError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(WishlistTitle::MAX_LENGTH + 1);
        assert!(matches!(
            WishlistTitle::parse(&long),
            Err(TitleError::TooLong { max: 255 })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 255 two-byte characters are still within the limit
        let title = "ž".repeat(WishlistTitle::MAX_LENGTH);
        assert!(WishlistTitle::parse(&title).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let parsed: WishlistTitle = serde_json::from_str("\"Moja lista želja\"").unwrap();
        assert_eq!(parsed.as_str(), "Moja lista želja");
        assert!(serde_json::from_str::<WishlistTitle>("\"  \"").is_err());
    }
}
