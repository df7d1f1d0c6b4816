//! Graphics-driver diagnostic filtering
//!
//! Backends forward every message from the driver's debug channel. A fixed
//! allow-list of notice codes is known to be benign chatter; anything else
//! indicates a programming defect (invalid program, mismatched attribute
//! layout, buffer overflow past a hard driver limit) and is fatal.

use log::trace;

/// Severity reported by the graphics driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Informational notice
    Notification,
    /// Low-severity warning
    Low,
    /// Medium-severity warning
    Medium,
    /// High-severity error
    High,
}

/// A message emitted by the graphics driver's debug channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDiagnostic {
    /// Driver-assigned numeric code
    pub code: u32,
    /// Reported severity
    pub severity: DiagnosticSeverity,
    /// Human-readable driver message
    pub message: String,
}

/// Buffer usage info notice.
const BUFFER_INFO: u32 = 0x20071;
/// Shader recompiled due to state change.
const SHADER_RECOMPILED: u32 = 0x20092;
/// Draw issued with no textures bound.
const NO_TEXTURES: u32 = 0x20084;

/// Whether a driver code is on the benign allow-list.
pub fn is_benign(code: u32) -> bool {
    matches!(code, BUFFER_INFO | SHADER_RECOMPILED | NO_TEXTURES)
}

/// Filter a drained diagnostic queue.
///
/// Benign notices are logged at trace level and dropped. Any other
/// diagnostic is a programming defect, not a transient condition: panic
/// with the driver's code and message.
pub(crate) fn escalate(diagnostics: Vec<DriverDiagnostic>) {
    for diagnostic in diagnostics {
        if is_benign(diagnostic.code) {
            trace!(
                "driver notice (0x{:04x}): {}",
                diagnostic.code,
                diagnostic.message
            );
            continue;
        }
        panic!(
            "driver error (0x{:04x}): {}",
            diagnostic.code, diagnostic.message
        );
    }
}
