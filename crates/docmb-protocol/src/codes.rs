//! Error code space shared by the message bus and the document protocol.
//!
//! Codes are partitioned into ranges: `[TRANSIENT_ERROR, FATAL_ERROR)` is
//! transient (a resend may succeed), `[FATAL_ERROR, ERROR_LIMIT)` is fatal.
//! Application protocols allocate from the `APP_*` sub-ranges.

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

pub const NONE: u32 = 0;
pub const TRANSIENT_ERROR: u32 = 100_000;
pub const APP_TRANSIENT_ERROR: u32 = TRANSIENT_ERROR + 50_000;
pub const FATAL_ERROR: u32 = 200_000;
pub const APP_FATAL_ERROR: u32 = FATAL_ERROR + 50_000;
pub const ERROR_LIMIT: u32 = APP_FATAL_ERROR + 50_000;

// ---------------------------------------------------------------------------
// Message bus (transport) codes
// ---------------------------------------------------------------------------

pub const SEND_QUEUE_FULL: u32 = TRANSIENT_ERROR + 1;
pub const NO_ADDRESS_FOR_SERVICE: u32 = TRANSIENT_ERROR + 2;
pub const CONNECTION_ERROR: u32 = TRANSIENT_ERROR + 3;
pub const UNKNOWN_SESSION: u32 = TRANSIENT_ERROR + 4;
pub const SESSION_BUSY: u32 = TRANSIENT_ERROR + 5;
pub const SEND_ABORTED: u32 = TRANSIENT_ERROR + 6;
pub const HANDSHAKE_FAILED: u32 = TRANSIENT_ERROR + 7;
pub const TIMEOUT: u32 = TRANSIENT_ERROR + 8;

pub const SEND_QUEUE_CLOSED: u32 = FATAL_ERROR + 1;
pub const ILLEGAL_ROUTE: u32 = FATAL_ERROR + 2;
pub const NO_SERVICES_FOR_ROUTE: u32 = FATAL_ERROR + 3;
pub const ENCODE_ERROR: u32 = FATAL_ERROR + 5;
pub const NETWORK_ERROR: u32 = FATAL_ERROR + 6;
pub const UNKNOWN_PROTOCOL: u32 = FATAL_ERROR + 7;
pub const DECODE_ERROR: u32 = FATAL_ERROR + 8;
pub const INCOMPATIBLE_VERSION: u32 = FATAL_ERROR + 10;
pub const UNKNOWN_POLICY: u32 = FATAL_ERROR + 11;
pub const NETWORK_SHUTDOWN: u32 = FATAL_ERROR + 12;
pub const POLICY_ERROR: u32 = FATAL_ERROR + 13;
pub const SEQUENCE_ERROR: u32 = FATAL_ERROR + 14;

// ---------------------------------------------------------------------------
// Document protocol codes
// ---------------------------------------------------------------------------

/// A routing policy declined the message (e.g. a downstream node did not
/// want it). Treated as noise by the merge engine.
pub const ERROR_MESSAGE_IGNORED: u32 = APP_FATAL_ERROR + 1;
pub const ERROR_POLICY_FAILURE: u32 = APP_FATAL_ERROR + 2;
pub const ERROR_DOCUMENT_NOT_FOUND: u32 = APP_FATAL_ERROR + 1001;
pub const ERROR_DOCUMENT_EXISTS: u32 = APP_FATAL_ERROR + 1002;
pub const ERROR_BUCKET_NOT_FOUND: u32 = APP_FATAL_ERROR + 1004;
pub const ERROR_BUCKET_DELETED: u32 = APP_FATAL_ERROR + 1005;
pub const ERROR_NOT_IMPLEMENTED: u32 = APP_FATAL_ERROR + 1006;
pub const ERROR_ILLEGAL_PARAMETERS: u32 = APP_FATAL_ERROR + 1007;
pub const ERROR_IGNORED: u32 = APP_FATAL_ERROR + 1008;
pub const ERROR_UNKNOWN_COMMAND: u32 = APP_FATAL_ERROR + 1009;
pub const ERROR_UNPARSEABLE: u32 = APP_FATAL_ERROR + 1010;
pub const ERROR_NO_SPACE: u32 = APP_FATAL_ERROR + 1011;
pub const ERROR_INTERNAL_FAILURE: u32 = APP_FATAL_ERROR + 1012;
pub const ERROR_PROCESSING_FAILURE: u32 = APP_FATAL_ERROR + 1013;
pub const ERROR_TIMESTAMP_EXIST: u32 = APP_FATAL_ERROR + 1014;
pub const ERROR_STALE_TIMESTAMP: u32 = APP_FATAL_ERROR + 1015;
pub const ERROR_NODE_NOT_READY: u32 = APP_FATAL_ERROR + 1016;
pub const ERROR_WRONG_DISTRIBUTION: u32 = APP_FATAL_ERROR + 1017;
pub const ERROR_REJECTED: u32 = APP_FATAL_ERROR + 1018;
pub const ERROR_ABORTED: u32 = APP_FATAL_ERROR + 1019;

pub const ERROR_BUSY: u32 = APP_TRANSIENT_ERROR + 1001;
pub const ERROR_NOT_CONNECTED: u32 = APP_TRANSIENT_ERROR + 1002;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Coarse severity of an error code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// `NONE`: not an error.
    None,
    /// Resending the same message may succeed.
    Transient,
    /// Resending will not help.
    Fatal,
}

/// Classify `code` by range.
///
/// Codes below `TRANSIENT_ERROR` other than `NONE` are not allocated by any
/// protocol; they are treated as fatal.
pub fn severity(code: u32) -> Severity {
    match code {
        NONE => Severity::None,
        c if (TRANSIENT_ERROR..FATAL_ERROR).contains(&c) => Severity::Transient,
        _ => Severity::Fatal,
    }
}

pub fn is_transient(code: u32) -> bool {
    severity(code) == Severity::Transient
}

pub fn is_fatal(code: u32) -> bool {
    severity(code) == Severity::Fatal
}

/// Stable upper-snake name for a known code, `"UNKNOWN"` otherwise.
pub fn error_name(code: u32) -> &'static str {
    match code {
        NONE => "NONE",
        SEND_QUEUE_FULL => "SEND_QUEUE_FULL",
        NO_ADDRESS_FOR_SERVICE => "NO_ADDRESS_FOR_SERVICE",
        CONNECTION_ERROR => "CONNECTION_ERROR",
        UNKNOWN_SESSION => "UNKNOWN_SESSION",
        SESSION_BUSY => "SESSION_BUSY",
        SEND_ABORTED => "SEND_ABORTED",
        HANDSHAKE_FAILED => "HANDSHAKE_FAILED",
        TIMEOUT => "TIMEOUT",
        SEND_QUEUE_CLOSED => "SEND_QUEUE_CLOSED",
        ILLEGAL_ROUTE => "ILLEGAL_ROUTE",
        NO_SERVICES_FOR_ROUTE => "NO_SERVICES_FOR_ROUTE",
        ENCODE_ERROR => "ENCODE_ERROR",
        NETWORK_ERROR => "NETWORK_ERROR",
        UNKNOWN_PROTOCOL => "UNKNOWN_PROTOCOL",
        DECODE_ERROR => "DECODE_ERROR",
        INCOMPATIBLE_VERSION => "INCOMPATIBLE_VERSION",
        UNKNOWN_POLICY => "UNKNOWN_POLICY",
        NETWORK_SHUTDOWN => "NETWORK_SHUTDOWN",
        POLICY_ERROR => "POLICY_ERROR",
        SEQUENCE_ERROR => "SEQUENCE_ERROR",
        ERROR_MESSAGE_IGNORED => "MESSAGE_IGNORED",
        ERROR_POLICY_FAILURE => "POLICY_FAILURE",
        ERROR_DOCUMENT_NOT_FOUND => "DOCUMENT_NOT_FOUND",
        ERROR_DOCUMENT_EXISTS => "DOCUMENT_EXISTS",
        ERROR_BUCKET_NOT_FOUND => "BUCKET_NOT_FOUND",
        ERROR_BUCKET_DELETED => "BUCKET_DELETED",
        ERROR_NOT_IMPLEMENTED => "NOT_IMPLEMENTED",
        ERROR_ILLEGAL_PARAMETERS => "ILLEGAL_PARAMETERS",
        ERROR_IGNORED => "IGNORED",
        ERROR_UNKNOWN_COMMAND => "UNKNOWN_COMMAND",
        ERROR_UNPARSEABLE => "UNPARSEABLE",
        ERROR_NO_SPACE => "NO_SPACE",
        ERROR_INTERNAL_FAILURE => "INTERNAL_FAILURE",
        ERROR_PROCESSING_FAILURE => "PROCESSING_FAILURE",
        ERROR_TIMESTAMP_EXIST => "TIMESTAMP_EXIST",
        ERROR_STALE_TIMESTAMP => "STALE_TIMESTAMP",
        ERROR_NODE_NOT_READY => "NODE_NOT_READY",
        ERROR_WRONG_DISTRIBUTION => "WRONG_DISTRIBUTION",
        ERROR_REJECTED => "REJECTED",
        ERROR_ABORTED => "ABORTED",
        ERROR_BUSY => "BUSY",
        ERROR_NOT_CONNECTED => "NOT_CONNECTED",
        _ => "UNKNOWN",
    }
}
