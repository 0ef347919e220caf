//! HTTP header names and content types used by the node API.

/// Header identifying the SDK to the node.
pub const X_MERIDIAN_CLIENT: &str = "x-meridian-client";

/// Content type for BCS-encoded signed transaction submissions.
pub const CONTENT_TYPE_SIGNED_TRANSACTION_BCS: &str =
    "application/x.meridian.signed_transaction+bcs";

/// Content type for BCS-encoded view function requests.
///
/// Distinguishes binary view requests from plain JSON ones on the same
/// endpoint.
pub const CONTENT_TYPE_VIEW_FUNCTION_BCS: &str = "application/x.meridian.view_function+bcs";

/// Content type for JSON requests and responses.
pub const CONTENT_TYPE_JSON: &str = "application/json";
