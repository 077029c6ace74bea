//! Lifts a parsed IDL tree into the ROS interface model.
//!
//! An interface file declares its structures inside exactly two modules,
//! `<package>::<kind>`. The number of structures decides what the file is:
//!
//! | structures | interface | synthesized types                                   |
//! |------------|-----------|-----------------------------------------------------|
//! | 1          | message   | none                                                |
//! | 2          | service   | `_Event`                                            |
//! | 3          | action    | `_SendGoal`, `_GetResult` (each with `_Event`), `_FeedbackMessage` |

mod error;
mod lift;
mod model;
pub mod naming;
mod non_ascii;
mod synth;

pub use error::LiftError;
pub use lift::convert_idl_to_interface;
pub use model::{
    ActionModel, InterfaceModel, InterfacePath, MessageInterface, MessageModel, QualifiedType,
    ServiceModel,
};
pub use non_ascii::has_non_ascii;
pub use synth::{action_feedback_message, action_get_result, action_send_goal, service_event};
