//! Type-name suffixes of service and action types.
//!
//! User structures must not end with these; the lifter relies on them to
//! classify a file's structures.

pub const SERVICE_REQUEST: &str = "_Request";
pub const SERVICE_RESPONSE: &str = "_Response";
pub const SERVICE_EVENT: &str = "_Event";

pub const ACTION_GOAL: &str = "_Goal";
pub const ACTION_RESULT: &str = "_Result";
pub const ACTION_FEEDBACK: &str = "_Feedback";

pub const ACTION_SEND_GOAL: &str = "_SendGoal";
pub const ACTION_GET_RESULT: &str = "_GetResult";
pub const ACTION_FEEDBACK_MESSAGE: &str = "_FeedbackMessage";

/// Suffix of the sibling module holding a structure's constants.
pub const CONSTANTS_MODULE: &str = "_Constants";
