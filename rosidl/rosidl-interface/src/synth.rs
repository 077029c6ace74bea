//! Implicit message and service types derived from declared ones.

use rosidl_core::{Member, TypeDescriptor};

use crate::{
    model::{MessageModel, QualifiedType, ServiceModel},
    naming::{
        ACTION_FEEDBACK, ACTION_FEEDBACK_MESSAGE, ACTION_GET_RESULT, ACTION_GOAL, ACTION_RESULT,
        ACTION_SEND_GOAL, SERVICE_EVENT, SERVICE_REQUEST, SERVICE_RESPONSE,
    },
};

fn interface_type(namespaces: [&str; 2], name: &str) -> TypeDescriptor {
    TypeDescriptor::namespaced(namespaces, name)
}

fn goal_id() -> Member {
    Member::new(
        "goal_id",
        interface_type(["unique_identifier_msgs", "msg"], "UUID"),
    )
}

/// `<Service>_Event`: call metadata plus the request and response, each as a
/// sequence of at most one element.
pub fn service_event(service: &QualifiedType) -> MessageModel {
    let optional = |suffix: &str| {
        TypeDescriptor::sequence(service.with_suffix(suffix).to_descriptor(), Some(1))
    };
    MessageModel::synthesized(
        service.with_suffix(SERVICE_EVENT),
        vec![
            Member::new(
                "info",
                interface_type(["service_msgs", "msg"], "ServiceEventInfo"),
            ),
            Member::new("request", optional(SERVICE_REQUEST)),
            Member::new("response", optional(SERVICE_RESPONSE)),
        ],
    )
}

/// Service whose request and response types are `<ty>_Request` and `<ty>_Response`.
fn synthesized_service(
    ty: QualifiedType,
    request: Vec<Member>,
    response: Vec<Member>,
) -> ServiceModel {
    ServiceModel {
        interface_path: None,
        request_message: MessageModel::synthesized(ty.with_suffix(SERVICE_REQUEST), request),
        response_message: MessageModel::synthesized(ty.with_suffix(SERVICE_RESPONSE), response),
        event_message: service_event(&ty),
        ty,
    }
}

/// `<Action>_SendGoal`: submits a goal under a fresh id, answers with
/// acceptance and a timestamp.
pub fn action_send_goal(action: &QualifiedType) -> ServiceModel {
    synthesized_service(
        action.with_suffix(ACTION_SEND_GOAL),
        vec![
            goal_id(),
            Member::new("goal", action.with_suffix(ACTION_GOAL).to_descriptor()),
        ],
        vec![
            Member::new("accepted", TypeDescriptor::scalar("boolean")),
            Member::new("stamp", interface_type(["builtin_interfaces", "msg"], "Time")),
        ],
    )
}

/// `<Action>_GetResult`: asks for a goal's outcome, answers with its status and result.
pub fn action_get_result(action: &QualifiedType) -> ServiceModel {
    synthesized_service(
        action.with_suffix(ACTION_GET_RESULT),
        vec![goal_id()],
        vec![
            Member::new("status", TypeDescriptor::scalar("int8")),
            Member::new("result", action.with_suffix(ACTION_RESULT).to_descriptor()),
        ],
    )
}

/// `<Action>_FeedbackMessage`: feedback tagged with the goal it belongs to.
pub fn action_feedback_message(action: &QualifiedType) -> MessageModel {
    MessageModel::synthesized(
        action.with_suffix(ACTION_FEEDBACK_MESSAGE),
        vec![
            goal_id(),
            Member::new("feedback", action.with_suffix(ACTION_FEEDBACK).to_descriptor()),
        ],
    )
}
