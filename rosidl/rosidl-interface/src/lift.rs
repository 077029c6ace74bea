use rosidl_core::{Constant, IdlFile, Module, Structure};
use tracing::debug;

use crate::{
    error::LiftError,
    model::{
        ActionModel, InterfaceModel, InterfacePath, MessageInterface, MessageModel, QualifiedType,
        ServiceModel,
    },
    naming::{ACTION_FEEDBACK, ACTION_GOAL, ACTION_RESULT, CONSTANTS_MODULE, SERVICE_REQUEST},
    non_ascii::has_non_ascii,
    synth::{action_feedback_message, action_get_result, action_send_goal, service_event},
};

/// Structures of an interface file, by what they declare.
enum Classified<'a> {
    Message(&'a Structure),
    Service {
        request: &'a Structure,
        response: &'a Structure,
    },
    Action {
        goal: &'a Structure,
        result: &'a Structure,
        feedback: &'a Structure,
    },
}

/// Classify by structure count: 1 is a message, 2 a service, 3 an action.
fn classify<'a>(module: &'a Module) -> Result<Classified<'a>, LiftError> {
    let find = move |suffix: &'static str| {
        module
            .structures
            .iter()
            .find(|s| s.name.ends_with(suffix))
            .ok_or_else(|| LiftError::MissingStructure {
                suffix,
                module: module.name.clone(),
            })
    };

    match module.structures.as_slice() {
        [message] => Ok(Classified::Message(message)),
        [first, second] => {
            let request = find(SERVICE_REQUEST)?;
            let response = if std::ptr::eq(request, first) {
                second
            } else {
                first
            };
            Ok(Classified::Service { request, response })
        }
        [_, _, _] => Ok(Classified::Action {
            goal: find(ACTION_GOAL)?,
            result: find(ACTION_RESULT)?,
            feedback: find(ACTION_FEEDBACK)?,
        }),
        other => Err(LiftError::StructureCount(other.len())),
    }
}

/// Constants of the sibling `<name>_Constants` module, if declared.
fn constants_for(module: &Module, name: &str) -> Vec<Constant> {
    module
        .module(&format!("{name}{CONSTANTS_MODULE}"))
        .map(|constants| constants.constants.clone())
        .unwrap_or_default()
}

fn declared_message(structure: &Structure, module: &Module, namespaces: &[String]) -> MessageModel {
    MessageModel {
        name: Some(structure.name.clone()),
        ty: QualifiedType::new(namespaces.to_vec(), structure.name.clone()),
        comments: structure.comments.clone(),
        members: structure.members.clone(),
        constants: constants_for(module, &structure.name),
    }
}

/// `name` without `suffix`; the classifier guarantees the suffix is present.
fn base_name<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Lift one parsed interface file into the interface model.
///
/// `file_path` is the package-relative path (`msg/Header.idl`); its stem names
/// the interface. The namespaces are the names of the two outermost modules,
/// whose inner one holds the declared structures.
pub fn convert_idl_to_interface(idl: &IdlFile, file_path: &str) -> Result<InterfaceModel, LiftError> {
    let interface_path = InterfacePath::new(file_path);

    let package = idl
        .modules
        .first()
        .ok_or(LiftError::MissingModule { depth: 0 })?;
    let module = package
        .modules
        .first()
        .ok_or(LiftError::MissingModule { depth: 1 })?;
    let namespaces = vec![package.name.clone(), module.name.clone()];

    let mut model = InterfaceModel {
        ty: QualifiedType::new(namespaces.clone(), interface_path.filename.clone()),
        interface_path: interface_path.clone(),
        messages: Vec::new(),
        services: Vec::new(),
        actions: Vec::new(),
        has_non_ascii: false,
    };

    let kind = match classify(module)? {
        Classified::Message(structure) => {
            model.messages.push(MessageInterface {
                interface_path,
                message: declared_message(structure, module, &namespaces),
            });
            "message"
        }
        Classified::Service { request, response } => {
            let ty = QualifiedType::new(
                namespaces.clone(),
                base_name(&request.name, SERVICE_REQUEST),
            );
            model.services.push(ServiceModel {
                interface_path: Some(interface_path),
                request_message: declared_message(request, module, &namespaces),
                response_message: declared_message(response, module, &namespaces),
                event_message: service_event(&ty),
                ty,
            });
            "service"
        }
        Classified::Action {
            goal,
            result,
            feedback,
        } => {
            let ty = QualifiedType::new(namespaces.clone(), base_name(&goal.name, ACTION_GOAL));
            model.actions.push(ActionModel {
                interface_path,
                goal: declared_message(goal, module, &namespaces),
                result: declared_message(result, module, &namespaces),
                feedback: declared_message(feedback, module, &namespaces),
                send_goal_service: action_send_goal(&ty),
                get_result_service: action_get_result(&ty),
                feedback_message: action_feedback_message(&ty),
                ty,
            });
            "action"
        }
    };

    model.has_non_ascii = has_non_ascii(&model)?;
    debug!(
        file_path,
        kind,
        has_non_ascii = model.has_non_ascii,
        "lifted interface"
    );
    Ok(model)
}
