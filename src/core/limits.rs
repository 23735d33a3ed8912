/*!
 * System Limits and Constants
 *
 * Centralized location for defaults, thresholds, and environment variable names.
 */

use super::types::Size;

// =============================================================================
// SIZE CLASSES
// =============================================================================

/// Size classes that get their own free-list queue when none are configured
pub const DEFAULT_COMMON_SIZES: [Size; 4] = [10, 20, 50, 100];

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Occupied share of total capacity at which pressure becomes Medium
pub const PRESSURE_MEDIUM_THRESHOLD: f64 = 0.60;

/// Occupied share at which pressure becomes High
pub const PRESSURE_HIGH_THRESHOLD: f64 = 0.80;

/// Occupied share at which pressure becomes Critical
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 0.95;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Path to a JSON allocator config file
pub const ENV_CONFIG_PATH: &str = "QUICKFIT_CONFIG";

/// Comma-separated override for the common size classes
pub const ENV_COMMON_SIZES: &str = "QUICKFIT_COMMON_SIZES";

/// `strict` or `replenishing`
pub const ENV_FREE_LIST_POLICY: &str = "QUICKFIT_FREE_LIST_POLICY";

/// `1`/`true` switches log output to JSON
pub const ENV_TRACE_JSON: &str = "QUICKFIT_TRACE_JSON";

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
