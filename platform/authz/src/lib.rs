//! Authorization primitives for the SmartInstall modules.
//!
//! Access is decided by a static [`PermissionMatrix`]. Lookups are
//! fail-closed: an unknown role, module or action is a denial, never an
//! error.

mod matrix;
mod vocab;

use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

pub use matrix::PermissionMatrix;
pub use vocab::{Action, Module, Role};

/// Tracing target for denials caused by unrecognized vocabulary.
pub const AUDIT_TARGET: &str = "smartinstall::audit";

static STANDARD_ENGINE: Lazy<PermissionEngine> = Lazy::new(|| PermissionEngine {
    matrix: PermissionMatrix::standard_shared(),
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("action {action} denied on module {module} for role {role}")]
    Denied {
        role: String,
        module: String,
        action: String,
    },
}

/// Answers whether a role may perform an action on a module.
#[derive(Clone, Debug)]
pub struct PermissionEngine {
    matrix: Arc<PermissionMatrix>,
}

impl Default for PermissionEngine {
    fn default() -> Self {
        STANDARD_ENGINE.clone()
    }
}

impl PermissionEngine {
    pub fn new(matrix: PermissionMatrix) -> Self {
        Self {
            matrix: Arc::new(matrix),
        }
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    /// String-level check used by controllers. Total over all inputs.
    pub fn check_permission(&self, role: &str, module: &str, action: &str) -> bool {
        let Some(role_id) = Role::parse(role) else {
            debug!(target: AUDIT_TARGET, role, module, action, "denied: unknown role");
            return false;
        };
        let Some(module_id) = Module::parse(module) else {
            debug!(target: AUDIT_TARGET, role, module, action, "denied: unknown module");
            return false;
        };
        let Some(action_id) = Action::parse(action) else {
            debug!(target: AUDIT_TARGET, role, module, action, "denied: unknown action");
            return false;
        };
        self.matrix.allows(role_id, module_id, action_id)
    }

    /// Same decision as [`check_permission`](Self::check_permission), shaped
    /// for callers that propagate with `?`.
    pub fn authorize(&self, role: &str, module: &str, action: &str) -> Result<(), AuthzError> {
        if self.check_permission(role, module, action) {
            Ok(())
        } else {
            Err(AuthzError::Denied {
                role: role.to_string(),
                module: module.to_string(),
                action: action.to_string(),
            })
        }
    }
}

/// Check against the standard matrix.
pub fn check_permission(role: &str, module: &str, action: &str) -> bool {
    STANDARD_ENGINE.check_permission(role, module, action)
}
