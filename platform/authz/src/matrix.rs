use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::vocab::Action::{Add, Delete, Edit, Execute, Export, View};
use crate::vocab::{Action, Module, Role};

type Grants = &'static [(Module, &'static [Action])];

/// Declared grants per role. Modules left out grant nothing.
const STANDARD_GRANTS: &[(Role, Grants)] = &[
    (
        Role::Admin,
        &[
            (Module::Customers, &[View, Add, Edit, Delete]),
            (Module::Inventory, &[View, Add, Edit, Delete]),
            (Module::Contracts, &[View, Add, Edit, Delete]),
            (Module::Payments, &[View, Add, Edit, Delete]),
            (Module::Reports, &[View, Export]),
            (Module::Settings, &[View, Edit]),
            (Module::Users, &[View, Add, Edit, Delete]),
            (Module::AutoDebit, &[View, Execute]),
        ],
    ),
    (
        Role::Accountant,
        &[
            (Module::Customers, &[View]),
            (Module::Inventory, &[View]),
            (Module::Contracts, &[View]),
            (Module::Payments, &[View, Add, Edit]),
            (Module::Reports, &[View, Export]),
            (Module::Settings, &[View]),
            (Module::Users, &[]),
            (Module::AutoDebit, &[View, Execute]),
        ],
    ),
    (
        Role::Sales,
        &[
            (Module::Customers, &[View, Add, Edit]),
            (Module::Inventory, &[View]),
            (Module::Contracts, &[View, Add]),
            (Module::Payments, &[View]),
            (Module::Reports, &[]),
            (Module::Settings, &[]),
            (Module::Users, &[]),
            (Module::AutoDebit, &[]),
        ],
    ),
    (
        Role::Warehouse,
        &[
            (Module::Customers, &[]),
            (Module::Inventory, &[View, Add, Edit]),
            (Module::Contracts, &[]),
            (Module::Payments, &[]),
            (Module::Reports, &[]),
            (Module::Settings, &[]),
            (Module::Users, &[]),
            (Module::AutoDebit, &[]),
        ],
    ),
];

static STANDARD: Lazy<Arc<PermissionMatrix>> = Lazy::new(|| Arc::new(PermissionMatrix::default()));

/// Role -> module -> granted actions.
///
/// Every role carries an explicit (possibly empty) action list for every
/// module. There is no way to change a matrix once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionMatrix {
    cells: [[Vec<Action>; Module::COUNT]; Role::COUNT],
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        Self::from_grants(STANDARD_GRANTS.iter().flat_map(|(role, grants)| {
            grants
                .iter()
                .map(move |(module, actions)| (*role, *module, *actions))
        }))
    }
}

impl PermissionMatrix {
    /// The process-wide matrix shipped with the application.
    pub fn standard() -> &'static PermissionMatrix {
        &STANDARD
    }

    /// Shared handle to the same allocation [`standard`](Self::standard)
    /// returns.
    pub(crate) fn standard_shared() -> Arc<PermissionMatrix> {
        Arc::clone(&STANDARD)
    }

    /// A matrix where nothing is granted.
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Vec::new())),
        }
    }

    /// Build a matrix from grant rows. Repeated rows for the same cell are
    /// merged; actions keep their first-seen order.
    pub fn from_grants<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Role, Module, &'a [Action])>,
    {
        let mut matrix = Self::empty();
        for (role, module, actions) in rows {
            let cell = &mut matrix.cells[role.index()][module.index()];
            for action in actions {
                if !cell.contains(action) {
                    cell.push(*action);
                }
            }
        }
        matrix
    }

    pub fn actions(&self, role: Role, module: Module) -> &[Action] {
        &self.cells[role.index()][module.index()]
    }

    pub fn allows(&self, role: Role, module: Module, action: Action) -> bool {
        self.actions(role, module).contains(&action)
    }

    /// Every explicit grant, ordered by role, then module, then declaration.
    pub fn grants(&self) -> impl Iterator<Item = (Role, Module, Action)> + '_ {
        Role::ALL.into_iter().flat_map(move |role| {
            Module::ALL.into_iter().flat_map(move |module| {
                self.actions(role, module)
                    .iter()
                    .map(move |action| (role, module, *action))
            })
        })
    }
}

struct ModuleRow<'a> {
    matrix: &'a PermissionMatrix,
    role: Role,
}

impl Serialize for ModuleRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Module::COUNT))?;
        for module in Module::ALL {
            map.serialize_entry(&module, self.matrix.actions(self.role, module))?;
        }
        map.end()
    }
}

impl Serialize for PermissionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for role in Role::ALL {
            map.serialize_entry(&role, &ModuleRow { matrix: self, role })?;
        }
        map.end()
    }
}
