//! Domain layer constants
//!
//! Values that are part of the Grouper protocol contract or serve as
//! synchronization defaults. Infrastructure-specific constants live in
//! `memsync-infrastructure`.

// ============================================================================
// GROUPER PROTOCOL CONSTANTS
// ============================================================================

/// Result code Grouper returns when a membership mutation succeeded
pub const RESULT_CODE_SUCCESS: &str = "SUCCESS";

/// Value sent for `replaceAllExisting`; mutations never replace the full membership
pub const REPLACE_ALL_EXISTING_FALSE: &str = "F";

/// Request envelope key for adding members
pub const ADD_MEMBER_REQUEST_KEY: &str = "WsRestAddMemberRequest";

/// Response envelope key for adding members
pub const ADD_MEMBER_RESULTS_KEY: &str = "WsAddMemberResults";

/// Request envelope key for deleting members
pub const DELETE_MEMBER_REQUEST_KEY: &str = "WsRestDeleteMemberRequest";

/// Response envelope key for deleting members
pub const DELETE_MEMBER_RESULTS_KEY: &str = "WsDeleteMemberResults";

// ============================================================================
// SYNCHRONIZATION DEFAULTS
// ============================================================================

/// Default number of members per remote request
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Default per-request deadline in seconds
pub const DEFAULT_BATCH_TIMEOUT_SECS: u64 = 60;

/// Default pause after each batch in seconds
pub const DEFAULT_BATCH_DELAY_SECS: u64 = 1;

/// Default maximum adds plus drops before synchronization is refused
pub const DEFAULT_SYNC_MAX: usize = 1000;
