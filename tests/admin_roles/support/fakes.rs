use std::{
    collections::{BTreeSet, HashMap},
    sync::Mutex,
};

use async_trait::async_trait;
use okta_admin_roles::admin_roles::{
    domain::model::{
        entities::role_assignment::RoleAssignment,
        enums::admin_role_type::AdminRoleType,
        value_objects::{assignment_id::AssignmentId, target::Target},
    },
    infrastructure::okta::clients::role_assignment_client::{OktaApiError, RoleAssignmentClient},
};

/// Every call the reconciler made, in order. Targets are rendered as `groups/<id>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemoteCall {
    List(String),
    Add(String, String),
    Remove(String, String),
}

#[derive(Default)]
struct FakeRoleAssignmentState {
    roles_by_target: HashMap<String, Vec<RoleAssignment>>,
    calls: Vec<RemoteCall>,
    next_id: usize,
    fail_listing: bool,
    fail_adding: Option<AdminRoleType>,
    fail_removing: Option<String>,
}

pub struct FakeRoleAssignmentClient {
    state: Mutex<FakeRoleAssignmentState>,
}

impl FakeRoleAssignmentClient {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRoleAssignmentState::default()),
        }
    }

    pub fn seed_roles(&self, target: &Target, roles: &[(&str, &str)]) {
        let assignments = roles
            .iter()
            .map(|(role_type, id)| {
                RoleAssignment::new(
                    role_type.to_string(),
                    AssignmentId::new(id.to_string()).expect("valid assignment id"),
                )
            })
            .collect();
        self.state
            .lock()
            .expect("mutex poisoned")
            .roles_by_target
            .insert(target.to_string(), assignments);
    }

    pub fn fail_listing(&self) {
        self.state.lock().expect("mutex poisoned").fail_listing = true;
    }

    pub fn fail_adding(&self, role_type: AdminRoleType) {
        self.state.lock().expect("mutex poisoned").fail_adding = Some(role_type);
    }

    pub fn fail_removing(&self, assignment_id: &str) {
        self.state.lock().expect("mutex poisoned").fail_removing = Some(assignment_id.to_string());
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.state.lock().expect("mutex poisoned").calls.clone()
    }

    pub fn mutating_calls(&self) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, RemoteCall::List(_)))
            .collect()
    }

    pub fn role_types(&self, target: &Target) -> BTreeSet<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .roles_by_target
            .get(&target.to_string())
            .map(|roles| roles.iter().map(|r| r.role_type().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn assignment_count(&self, target: &Target) -> usize {
        self.state
            .lock()
            .expect("mutex poisoned")
            .roles_by_target
            .get(&target.to_string())
            .map_or(0, Vec::len)
    }
}

fn server_error() -> OktaApiError {
    OktaApiError::Status {
        status: 500,
        error_code: Some("E0000009".to_string()),
        summary: "Internal Server Error".to_string(),
    }
}

#[async_trait]
impl RoleAssignmentClient for FakeRoleAssignmentClient {
    async fn list_roles(&self, target: &Target) -> Result<Vec<RoleAssignment>, OktaApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls.push(RemoteCall::List(target.to_string()));
        if state.fail_listing {
            return Err(server_error());
        }
        Ok(state
            .roles_by_target
            .get(&target.to_string())
            .cloned()
            .unwrap_or_default())
    }

    async fn add_role(
        &self,
        target: &Target,
        role_type: AdminRoleType,
    ) -> Result<RoleAssignment, OktaApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls.push(RemoteCall::Add(
            target.to_string(),
            role_type.as_str().to_string(),
        ));
        if state.fail_adding == Some(role_type) {
            return Err(server_error());
        }

        state.next_id += 1;
        let assignment = RoleAssignment::new(
            role_type.as_str().to_string(),
            AssignmentId::new(format!("ra{}", state.next_id)).expect("valid assignment id"),
        );
        state
            .roles_by_target
            .entry(target.to_string())
            .or_default()
            .push(assignment.clone());
        Ok(assignment)
    }

    async fn remove_role(
        &self,
        target: &Target,
        assignment_id: &AssignmentId,
    ) -> Result<(), OktaApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls.push(RemoteCall::Remove(
            target.to_string(),
            assignment_id.value().to_string(),
        ));
        if state.fail_removing.as_deref() == Some(assignment_id.value()) {
            return Err(server_error());
        }

        let roles = state.roles_by_target.entry(target.to_string()).or_default();
        let before = roles.len();
        roles.retain(|role| role.assignment_id() != assignment_id);
        if roles.len() == before {
            return Err(OktaApiError::Status {
                status: 404,
                error_code: Some("E0000007".to_string()),
                summary: "Not found".to_string(),
            });
        }
        Ok(())
    }
}
