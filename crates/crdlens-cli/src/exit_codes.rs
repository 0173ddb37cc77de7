//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

#![allow(dead_code)]

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Detection negative - the document is not a CRD (a normal outcome,
/// reported as a code so callers can branch without parsing output)
pub const DETECTION_NEGATIVE: i32 = 2;

/// Invalid input - target is not YAML-eligible or not a CRD
pub const INVALID_INPUT: i32 = 3;

/// Tool unavailable - the cty executable could not be probed
pub const TOOL_UNAVAILABLE: i32 = 4;

/// Generation error - the generator exited non-zero or failed to spawn
pub const GENERATION_ERROR: i32 = 5;

/// Output resolution error - the generated sample could not be located
pub const OUTPUT_ERROR: i32 = 6;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: i32 = 7;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
