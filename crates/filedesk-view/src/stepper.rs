//! Project stage stepper.

use serde::Serialize;

/// Progress of a project stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    /// CSS class of the step icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Completed => "step-icon-completed",
            Self::Active => "step-icon-active",
            Self::Pending => "step-icon-pending",
        }
    }

    /// Terminal marker for the step.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Active => "●",
            Self::Pending => "○",
        }
    }
}

/// One project stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStep {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
}

/// Ordered project stages.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStepper {
    steps: Vec<ProjectStep>,
}

impl Default for ProjectStepper {
    fn default() -> Self {
        let steps = [
            ("recce", "Recce", StepStatus::Completed),
            ("design", "Design", StepStatus::Active),
            ("boq", "BOQ", StepStatus::Pending),
            ("order", "Order", StepStatus::Pending),
            ("work-progress", "Work Progress", StepStatus::Pending),
            ("snag", "Snag", StepStatus::Pending),
            ("finance", "Finance", StepStatus::Pending),
        ];
        Self {
            steps: steps
                .into_iter()
                .map(|(id, name, status)| ProjectStep {
                    id: id.to_string(),
                    name: name.to_string(),
                    status,
                })
                .collect(),
        }
    }
}

impl ProjectStepper {
    /// All steps in order.
    pub fn steps(&self) -> &[ProjectStep] {
        &self.steps
    }

    /// The step currently in progress, if any.
    pub fn active_step(&self) -> Option<&ProjectStep> {
        self.steps.iter().find(|s| s.status == StepStatus::Active)
    }
}
