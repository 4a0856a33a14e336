//! Fix actions and plans.

use crate::checks::Risk;

/// A remediation derived from a failing check or a project fact.
///
/// Fields are private so the risk gate cannot be bypassed: a CAUTION action
/// is never applyable, and an applyable action always has commands.
///
/// For an applyable action, `commands` is the argv of the one command to
/// run. For guidance actions each entry is a command line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixAction {
    id: String,
    title: String,
    description: String,
    risk: Risk,
    commands: Vec<String>,
    applyable: bool,
}

impl FixAction {
    /// Create an action. `applyable` is forced off unless the action is SAFE
    /// and has commands whose first entry is a bare program name.
    ///
    /// An applyable action runs `commands` once as a single argv, so
    /// `["npm", "ci"]` is applyable while command lines such as
    /// `["npm install", "npm run build"]` stay guidance.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        risk: Risk,
        commands: Vec<String>,
        applyable: bool,
    ) -> Self {
        let runnable = commands
            .first()
            .is_some_and(|program| !program.is_empty() && !program.contains(char::is_whitespace));
        let applyable = applyable && risk == Risk::Safe && runnable;
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            risk,
            commands,
            applyable,
        }
    }

    /// A guidance-only action.
    pub fn caution(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        commands: Vec<String>,
    ) -> Self {
        Self::new(id, title, description, Risk::Caution, commands, false)
    }

    /// Id of the check (or fact) this action remedies.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn risk(&self) -> Risk {
        self.risk
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Whether the action may run without further human judgment.
    pub fn applyable(&self) -> bool {
        self.applyable
    }

    /// Whether the action belongs to the `system.` namespace.
    pub fn is_system(&self) -> bool {
        self.id.starts_with("system.")
    }

    /// Commands as displayed: an applyable argv is one command line.
    pub fn display_commands(&self) -> Vec<String> {
        if self.applyable {
            vec![self.commands.join(" ")]
        } else {
            self.commands.clone()
        }
    }
}

/// Ordered actions, at most one per id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixPlan {
    actions: Vec<FixAction>,
}

impl FixPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action unless one with the same id exists. Returns whether it
    /// was added.
    pub fn push(&mut self, action: FixAction) -> bool {
        if self.contains(action.id()) {
            return false;
        }
        self.actions.push(action);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.iter().any(|a| a.id == id)
    }

    pub fn actions(&self) -> &[FixAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Number of actions with the given risk.
    pub fn count(&self, risk: Risk) -> usize {
        self.actions.iter().filter(|a| a.risk == risk).count()
    }

    /// Actions that may be applied automatically, in plan order.
    pub fn applyable(&self) -> impl Iterator<Item = &FixAction> {
        self.actions.iter().filter(|a| a.applyable)
    }

    /// CAUTION actions, in plan order.
    pub fn caution(&self) -> impl Iterator<Item = &FixAction> {
        self.actions.iter().filter(|a| a.risk == Risk::Caution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn caution_is_never_applyable() {
        let action = FixAction::new(
            "system.docker",
            "Install Docker",
            "",
            Risk::Caution,
            argv(&["brew install --cask docker"]),
            true,
        );
        assert!(!action.applyable());
    }

    #[test]
    fn safe_without_commands_is_not_applyable() {
        let action = FixAction::new("x", "t", "d", Risk::Safe, Vec::new(), true);
        assert!(!action.applyable());
    }

    #[test]
    fn safe_command_lines_are_not_applyable() {
        let action = FixAction::new(
            "project.node.dependencies",
            "Install and build",
            "",
            Risk::Safe,
            argv(&["npm install", "npm run build"]),
            true,
        );
        assert!(!action.applyable());
        assert_eq!(action.display_commands(), vec!["npm install", "npm run build"]);

        let mut plan = FixPlan::new();
        plan.push(action);
        assert_eq!(plan.applyable().count(), 0);
    }

    #[test]
    fn safe_with_commands_is_applyable() {
        let action = FixAction::new("x", "t", "d", Risk::Safe, argv(&["npm", "ci"]), true);
        assert!(action.applyable());
        assert_eq!(action.display_commands(), vec!["npm ci"]);
    }

    #[test]
    fn first_action_per_id_wins() {
        let mut plan = FixPlan::new();
        assert!(plan.push(FixAction::caution("project.node.requirements", "first", "", vec![])));
        assert!(!plan.push(FixAction::caution("project.node.requirements", "second", "", vec![])));

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.actions()[0].title(), "first");
    }

    #[test]
    fn counts_by_risk() {
        let mut plan = FixPlan::new();
        plan.push(FixAction::caution("system.git", "Install Git", "", vec![]));
        plan.push(FixAction::new("p", "t", "d", Risk::Safe, argv(&["npm", "install"]), true));

        assert_eq!(plan.count(Risk::Safe), 1);
        assert_eq!(plan.count(Risk::Caution), 1);
        assert_eq!(plan.applyable().count(), 1);
        assert_eq!(plan.caution().count(), 1);
    }
}
