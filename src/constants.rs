//! Application-wide constants for grant-desk.
//!
//! Centralizes all magic values so the request contract and the report
//! sentinels live in one place.

// ============================================================================
// Application Identity
// ============================================================================

/// GTK Application ID following reverse-DNS convention.
pub const APP_ID: &str = "com.github.grant-desk";

/// Application name displayed in window title.
pub const APP_NAME: &str = "Grant Desk";

// ============================================================================
// Window Configuration
// ============================================================================

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1000;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;

// ============================================================================
// Backend Contract
// ============================================================================

/// Default base URL of the grant writer backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Path of the loading fragment endpoint, relative to the base URL.
pub const LOADING_FRAGMENT_PATH: &str = "/loading-fragment";

/// Path of the report generation endpoint, relative to the base URL.
pub const RUN_GRANT_WRITER_PATH: &str = "/run-grant-writer";

/// Message used when an error response carries no usable `error` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

// ============================================================================
// Report Sentinels
// ============================================================================

/// Banner printed by the generation pipeline between its log output and the
/// report body. Everything up to and including the first occurrence is log
/// noise.
pub const REPORT_BANNER_MARKER: &str = "FINAL GRANT REPORT";

/// Status line printed after the report body. Everything from its first
/// occurrence onward is trailing noise.
pub const REPORT_SAVED_MARKER: &str = "[Success] Report saved to";

// ============================================================================
// Result Fragment
// ============================================================================

/// Element id of the hidden field carrying the raw pipeline output.
pub const RAW_DATA_ID: &str = "raw-data";

/// Element id of the container the rendered report is injected into.
pub const MARKDOWN_OUTPUT_ID: &str = "markdown-output";

// ============================================================================
// Security
// ============================================================================

/// WebKit sandbox disable environment variable (use with caution).
pub const WEBKIT_SANDBOX_DISABLE_VAR: &str = "WEBKIT_DISABLE_SANDBOX_THIS_IS_DANGEROUS";
