//! Response bodies shared by the endpoint wrappers.
//!
//! The platform wraps most responses in `{ success, message, <payload> }`,
//! with the payload under an endpoint-specific key. Some deployments return
//! the payload bare. [`ListBody`] and [`ItemBody`] accept both.

use serde::Deserialize;

use super::ApiError;

pub(crate) const fn succeeded() -> bool {
    true
}

fn unsuccessful(message: Option<String>) -> ApiError {
    ApiError::Unsuccessful(message.unwrap_or_else(|| "request was not successful".to_string()))
}

/// `{ success, message }` with no payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusBody {
    #[serde(default = "succeeded")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusBody {
    /// `Ok` unless the platform reported `success: false`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` with the platform's message.
    pub fn check(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(unsuccessful(self.message))
        }
    }
}

/// A list payload, bare or enveloped.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default = "succeeded")]
        success: bool,
        #[serde(default)]
        message: Option<String>,
        #[serde(
            default = "Vec::new",
            alias = "customFields",
            alias = "values",
            alias = "categories",
            alias = "brands"
        )]
        items: Vec<T>,
    },
}

impl<T> ListBody<T> {
    /// The items, or the platform's failure message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` for `success: false` envelopes.
    pub fn into_items(self) -> Result<Vec<T>, ApiError> {
        match self {
            Self::Bare(items) => Ok(items),
            Self::Wrapped {
                success: true,
                items,
                ..
            } => Ok(items),
            Self::Wrapped { message, .. } => Err(unsuccessful(message)),
        }
    }
}

/// A single-entity payload, bare or enveloped.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemBody<T> {
    Bare(T),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default = "succeeded")]
        success: bool,
        #[serde(default)]
        message: Option<String>,
        #[serde(
            default = "Option::default",
            alias = "marketplace",
            alias = "customField",
            alias = "value",
            alias = "brand",
            alias = "category"
        )]
        item: Option<T>,
    },
}

impl<T> ItemBody<T> {
    /// The entity, failing when the envelope is unsuccessful or empty.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` for `success: false` envelopes and
    /// `ApiError::NotFound` when a successful envelope carries no entity.
    pub fn into_item(self, what: &str) -> Result<T, ApiError> {
        match self {
            Self::Bare(item)
            | Self::Wrapped {
                success: true,
                item: Some(item),
                ..
            } => Ok(item),
            Self::Wrapped {
                success: true,
                item: None,
                ..
            } => Err(ApiError::NotFound(format!("{what} missing from response"))),
            Self::Wrapped { message, .. } => Err(unsuccessful(message)),
        }
    }

    /// Like [`ItemBody::into_item`], but a successful envelope without an
    /// entity is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` for `success: false` envelopes.
    pub fn into_optional_item(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Bare(item) => Ok(Some(item)),
            Self::Wrapped {
                success: true,
                item,
                ..
            } => Ok(item),
            Self::Wrapped { message, .. } => Err(unsuccessful(message)),
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}
