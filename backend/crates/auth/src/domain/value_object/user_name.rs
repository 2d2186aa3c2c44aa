//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための公開識別子（ハンドル）。
//! ログイン、画面表示、一意性チェックに使用される。
//!
//! ## 設計方針
//! - NFKC正規化 → 検証 → 小文字化（canonical）の順で処理
//! - 入力の大文字小文字は表示用に保持し、一意性は canonical で判定
//!
//! ## 不変条件
//! - 正規化後に空でない
//! - 長さ: 最大64文字（正規化後）
//! - 空白・制御文字を含まない

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains whitespace
    ContainsWhitespace,

    /// User name contains control characters
    ContainsControl,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::ContainsWhitespace => {
                write!(f, "User name cannot contain whitespace")
            }
            Self::ContainsControl => {
                write!(f, "User name cannot contain control characters")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized user name
///
/// # Invariants
/// - Non-empty after NFKC normalization and trimming
/// - At most USER_NAME_MAX_LENGTH characters
/// - No interior whitespace, no control characters
///
/// # Storage
/// - `original`: The user's input (trimmed, NFKC normalized, preserves case)
/// - `canonical`: Lowercase form for uniqueness checks
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    /// Original user input (preserves case)
    original: String,
    /// Lowercase canonical form (indexed for uniqueness)
    canonical: String,
}

impl UserName {
    /// Create a new user name with validation
    ///
    /// Processing order: NFKC normalize, trim, validate, lowercase.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = input.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length: char_count,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        for ch in trimmed.chars() {
            if ch.is_whitespace() {
                return Err(UserNameError::ContainsWhitespace);
            }
            if ch.is_control() {
                return Err(UserNameError::ContainsControl);
            }
        }

        Ok(Self {
            original: trimmed.to_string(),
            canonical: trimmed.to_lowercase(),
        })
    }

    /// Reconstruct from trusted database values
    ///
    /// The stored value was validated at creation time; revalidate anyway so
    /// a corrupted row surfaces as an error instead of an invalid invariant.
    pub fn from_db(original: &str) -> Result<Self, UserNameError> {
        Self::new(original)
    }

    /// The user's original input (display form)
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase canonical form (uniqueness key)
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Alias for the display form
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.original
    }
}
