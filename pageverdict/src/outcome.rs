//! The structured verdict produced by the engine.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::portal;

/// The result of interpreting one submission response page.
///
/// Exactly one variant per invocation: either the page carried an
/// application number (success) or it did not, in which case a non-empty
/// failure message is always produced.
///
/// # Examples
///
/// ```
/// use pageverdict::ParsedOutcome;
///
/// let outcome = ParsedOutcome::success("253754631", None, None);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.application_id(), Some("253754631"));
/// assert_eq!(outcome.error_message(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedOutcome {
    /// The portal accepted the submission.
    Success {
        /// Tracking number assigned by the portal. Never empty.
        application_id: String,
        /// Absolute URL of the printable copy, when the page offered one.
        print_link: Option<String>,
        /// Best-effort confirmation details, when any were found.
        additional_info: Option<AdditionalInfo>,
    },
    /// The portal rejected the submission or showed no outcome at all.
    Failure {
        /// Human-readable reason. Never empty.
        error_message: String,
    },
}

impl ParsedOutcome {
    /// Builds a success outcome.
    #[inline]
    pub fn success(
        application_id: impl Into<String>,
        print_link: Option<String>,
        additional_info: Option<AdditionalInfo>,
    ) -> Self {
        Self::Success {
            application_id: application_id.into(),
            print_link,
            additional_info,
        }
    }

    /// Builds a failure outcome. An empty or whitespace-only message is
    /// replaced with the fixed generic sentence, so the message invariant
    /// holds at the type boundary.
    pub fn failure(error_message: impl Into<String>) -> Self {
        let message = error_message.into();
        let message = if message.trim().is_empty() {
            portal::UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::Failure {
            error_message: message,
        }
    }

    /// Returns `true` for the `Success` variant.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the application id, if this is a success.
    pub fn application_id(&self) -> Option<&str> {
        match self {
            Self::Success { application_id, .. } => Some(application_id),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the absolute print link, if this is a success that had one.
    pub fn print_link(&self) -> Option<&str> {
        match self {
            Self::Success { print_link, .. } => print_link.as_deref(),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the confirmation details, if this is a success that had any.
    pub fn additional_info(&self) -> Option<&AdditionalInfo> {
        match self {
            Self::Success {
                additional_info, ..
            } => additional_info.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure message, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_message } => Some(error_message),
        }
    }
}

// Callers consume the verdict as an object with a boolean discriminator
// plus the variant's fields; absent optionals are omitted entirely.
impl Serialize for ParsedOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                application_id,
                print_link,
                additional_info,
            } => {
                let len =
                    2 + usize::from(print_link.is_some()) + usize::from(additional_info.is_some());
                let mut state = serializer.serialize_struct("ParsedOutcome", len)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("application_id", application_id)?;
                if let Some(link) = print_link {
                    state.serialize_field("print_link", link)?;
                }
                if let Some(info) = additional_info {
                    state.serialize_field("additional_info", info)?;
                }
                state.end()
            }
            Self::Failure { error_message } => {
                let mut state = serializer.serialize_struct("ParsedOutcome", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error_message", error_message)?;
                state.end()
            }
        }
    }
}

/// Confirmation details shown next to the application number.
///
/// Every field is optional and extracted independently; the whole struct is
/// only attached to a success when at least one field was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct AdditionalInfo {
    /// Kind of application the portal recorded (e.g. new registration).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type_label: Option<String>,
    /// Office that will process the application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_name: Option<String>,
    /// Contact phone number echoed back by the portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Date by which the printed application must be submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_deadline: Option<String>,
}

impl AdditionalInfo {
    /// True when no field was extracted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.application_type_label.is_none()
            && self.office_name.is_none()
            && self.phone_number.is_none()
            && self.submission_deadline.is_none()
    }
}
