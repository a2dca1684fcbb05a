use std::collections::HashMap;

/// Prefix for per-person-per-day scheduling variables, matching the wire
/// naming convention: `Schedule_{uid}_{day}`.
pub const SCHEDULE_VAR_PREFIX: &str = "Schedule";
/// Prefix for per-synergy-group-per-day coupling variables: `Synergy_{sid}_{day}`.
pub const SYNERGY_VAR_PREFIX: &str = "Synergy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Le,
    Ge,
    Eq,
}

#[derive(Debug, Clone)]
pub struct LpConstraint {
    pub name: String,
    /// Sparse `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

/// A continuous LP relaxation: every variable bounded to `[0, 1]`, a linear
/// objective, and a list of linear constraints.
///
/// Variables are never added or removed once the root LP is built --
/// branching only ever appends constraints. Cloning an `Lp` gives a node its
/// own independent copy of the constraint list to tighten without disturbing
/// its parent or siblings; this is the "deep copy per node" strategy, chosen
/// over incremental undo for its simplicity.
#[derive(Debug, Clone)]
pub struct Lp {
    pub var_names: Vec<String>,
    var_index: HashMap<String, usize>,
    /// `(variable index, coefficient)` pairs contributing to the objective.
    pub objective: Vec<(usize, f64)>,
    pub constraints: Vec<LpConstraint>,
    /// Maps a department bound's canonical name to the index of its
    /// *original* (root) constraint. Frozen at build time: later branches
    /// always tighten relative to this root constraint, never to a
    /// previously-tightened copy, so the map is never updated after the
    /// root LP is built.
    root_constraint_index: HashMap<String, usize>,
}

impl Lp {
    pub fn new() -> Self {
        Self {
            var_names: Vec::new(),
            var_index: HashMap::new(),
            objective: Vec::new(),
            constraints: Vec::new(),
            root_constraint_index: HashMap::new(),
        }
    }

    pub fn add_variable(&mut self, name: String) -> usize {
        let idx = self.var_names.len();
        self.var_index.insert(name.clone(), idx);
        self.var_names.push(name);
        idx
    }

    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.var_index.get(name).copied()
    }

    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    /// Appends a constraint as part of building the root LP, remembering its
    /// index as the canonical "original" for that name if it's a named
    /// department bound.
    pub fn add_root_constraint(&mut self, constraint: LpConstraint) {
        let idx = self.constraints.len();
        self.root_constraint_index.insert(constraint.name.clone(), idx);
        self.constraints.push(constraint);
    }

    /// Appends an unnamed or non-canonical constraint (availability caps,
    /// synergy coupling) that branching never needs to locate again.
    pub fn add_constraint(&mut self, constraint: LpConstraint) {
        self.constraints.push(constraint);
    }

    /// Looks up the root (never-tightened) copy of a named department bound
    /// constraint, by its canonical name.
    pub fn root_constraint(&self, name: &str) -> Option<&LpConstraint> {
        self.root_constraint_index.get(name).map(|&idx| &self.constraints[idx])
    }

    pub fn schedule_var_name(uid: &str, day: usize) -> String {
        format!("{SCHEDULE_VAR_PREFIX}_{uid}_{day}")
    }

    pub fn synergy_var_name(sid: &str, day: usize) -> String {
        format!("{SYNERGY_VAR_PREFIX}_{sid}_{day}")
    }
}

impl Default for Lp {
    fn default() -> Self {
        Self::new()
    }
}
