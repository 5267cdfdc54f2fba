//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{NewChemicalLog, NewEquipmentLog};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Subtract from a chemical's stock.
    DebitChemical {
        /// The chemical to debit.
        chemical_id: i64,
        /// Amount to subtract.
        amount: i64,
    },

    /// Subtract from a piece of equipment's stock.
    DebitEquipment {
        /// The equipment to debit.
        equipment_id: i64,
        /// Units to subtract.
        amount: i64,
    },

    /// Record a chemical reservation.
    AppendChemicalLog(NewChemicalLog),

    /// Record an equipment reservation.
    AppendEquipmentLog(NewEquipmentLog),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::DebitChemical {
                chemical_id,
                amount,
            } => format!("Debit {amount} from chemical {chemical_id}"),
            Self::DebitEquipment {
                equipment_id,
                amount,
            } => format!("Debit {amount} from equipment {equipment_id}"),
            Self::AppendChemicalLog(log) => format!(
                "Log {} of chemical {} for group {} on {}",
                log.qty,
                log.chemical_id,
                log.group_code,
                log.date_procured.date()
            ),
            Self::AppendEquipmentLog(log) => format!(
                "Log {} of equipment {} for group {} from {} to {}",
                log.qty,
                log.equipment_id,
                log.group_code,
                log.date_procured.date(),
                log.date_return.date()
            ),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use streserve::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reserve chemical 1");
    /// assert_eq!(plan.description, "Reserve chemical 1");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use streserve::operations::{OperationPlan, PlanAction};
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_action(PlanAction::DebitChemical { chemical_id: 1, amount: 50 });
    ///
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
