//! Build-time configuration for the demo's one outbound call.
//!
//! Both values are baked in from the build environment; when unset the
//! request simply goes nowhere and fails loudly in the console.

/// Endpoint for the fixed PUT request.
pub fn api_endpoint() -> &'static str {
    option_env!("PLAYGROUND_API_URL").unwrap_or("")
}

/// Value for the x-api-key header.
pub fn api_key() -> &'static str {
    option_env!("PLAYGROUND_API_KEY").unwrap_or("")
}
