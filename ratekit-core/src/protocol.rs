//! Command surface exposed to the application layer
//!
//! The dispatch transport itself lives outside this crate; these types
//! define the request/response pairs it carries and the flat encodings
//! the application layer already relies on: booleans for the review
//! commands, the 0/1/2 result codes for store navigation, and
//! name-plus-message error payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::orchestrator::ReviewOutcome;
use crate::store::StoreNavigationResult;
use crate::Error;

/// Native store application opened
pub const STORE_OPENED_NATIVE: u8 = 0;
/// Web listing opened as fallback
pub const STORE_OPENED_WEB: u8 = 1;
/// Store navigation failed
pub const STORE_FAILED: u8 = 2;

/// Commands the application layer sends to the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum Command {
    /// Attempt the native review flow
    LaunchNativeReviewDialog,
    /// Probe whether the native dialog is currently usable
    IsNativeDialogSupported,
    /// Open the store listing, for `app_id` or the current application
    #[serde(rename_all = "camelCase")]
    LaunchStore {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        app_id: Option<String>,
    },
}

/// Flat response payload returned for every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Response {
    /// The command resolved to a value
    Success { value: Value },
    /// The command failed with a named error
    Error { code: String, message: String },
}

impl Response {
    /// Build a success response from any encodable value
    pub fn success(value: impl Into<Value>) -> Self {
        Response::Success {
            value: value.into(),
        }
    }

    /// Build an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Response::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Encode a review outcome
    ///
    /// `true` only for a completed flow invocation; a plain `false`
    /// when the flow could not be attempted and the service reported no
    /// explicit error; the service's own identity and message otherwise.
    pub fn from_review_outcome(outcome: &ReviewOutcome) -> Self {
        match outcome {
            ReviewOutcome::Completed => Response::success(true),
            ReviewOutcome::Unavailable => Response::success(false),
            ReviewOutcome::Failed(failure) => {
                Response::error(failure.name.clone(), failure.message.clone())
            }
        }
    }

    /// Encode a store navigation result as its boundary code
    pub fn from_store_result(result: StoreNavigationResult) -> Self {
        Response::success(store_result_code(result))
    }

    /// Encode a named bridge error
    pub fn from_error(error: &Error) -> Self {
        Response::error(error.identity(), error.to_string())
    }
}

/// Integer code for a store navigation result, used only at this boundary
pub fn store_result_code(result: StoreNavigationResult) -> u8 {
    match result {
        StoreNavigationResult::OpenedNativeApp => STORE_OPENED_NATIVE,
        StoreNavigationResult::OpenedWebFallback => STORE_OPENED_WEB,
        StoreNavigationResult::Failed => STORE_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ServiceFailure;
    use serde_json::json;

    #[test]
    fn test_store_result_codes() {
        assert_eq!(store_result_code(StoreNavigationResult::OpenedNativeApp), 0);
        assert_eq!(store_result_code(StoreNavigationResult::OpenedWebFallback), 1);
        assert_eq!(store_result_code(StoreNavigationResult::Failed), 2);
    }

    #[test]
    fn test_review_outcome_encoding() {
        assert_eq!(
            Response::from_review_outcome(&ReviewOutcome::Completed),
            Response::success(true)
        );
        assert_eq!(
            Response::from_review_outcome(&ReviewOutcome::Unavailable),
            Response::success(false)
        );

        let failed = ReviewOutcome::Failed(ServiceFailure::new("ApiException", "no quota"));
        assert_eq!(
            Response::from_review_outcome(&failed),
            Response::error("ApiException", "no quota")
        );
    }

    #[test]
    fn test_precondition_error_encoding() {
        let response = Response::from_error(&Error::ActivityUnavailable);
        assert_eq!(
            response,
            Response::error("activity_is_null", "Foreground activity not available.")
        );
    }

    #[test]
    fn test_command_wire_names() {
        let command: Command =
            serde_json::from_value(json!({ "method": "launchNativeReviewDialog" })).unwrap();
        assert_eq!(command, Command::LaunchNativeReviewDialog);

        let command: Command =
            serde_json::from_value(json!({ "method": "launchStore", "appId": "com.example.app" }))
                .unwrap();
        assert_eq!(
            command,
            Command::LaunchStore {
                app_id: Some("com.example.app".to_string())
            }
        );
    }

    #[test]
    fn test_launch_store_app_id_is_optional() {
        let command: Command = serde_json::from_value(json!({ "method": "launchStore" })).unwrap();
        assert_eq!(command, Command::LaunchStore { app_id: None });
    }

    #[test]
    fn test_response_serialization() {
        let success = serde_json::to_value(Response::success(2)).unwrap();
        assert_eq!(success, json!({ "status": "success", "value": 2 }));

        let error = serde_json::to_value(Response::error("context_is_null", "gone")).unwrap();
        assert_eq!(
            error,
            json!({ "status": "error", "code": "context_is_null", "message": "gone" })
        );
    }
}
