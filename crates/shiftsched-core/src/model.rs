use std::collections::HashSet;

use thiserror::Error;

/// Unique identifier for a person.
pub type PersonId = String;

/// Unique identifier for a set constraint (a department or a synergy group).
pub type SetId = String;

/// A person being scheduled, with their per-day availability over the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub uid: PersonId,
    /// `available[d]` is whether this person can work on day `d` (0-based).
    pub available: Vec<bool>,
}

impl Person {
    pub fn new(uid: impl Into<PersonId>, available: Vec<bool>) -> Self {
        Self { uid: uid.into(), available }
    }

    pub fn is_available(&self, day: usize) -> bool {
        self.available.get(day).copied().unwrap_or(false)
    }
}

/// The two families of set constraint a group of people can be subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetConstraintKind {
    /// At least `lo` and, if `hi` is `Some`, at most `hi` members present per day.
    /// `hi == None` means unbounded (normalized to the set's full membership
    /// wherever an upper bound is actually needed).
    Department { lo: u32, hi: Option<u32> },
    /// All members present together on at least `lo` days over the horizon.
    Synergy { lo: u32 },
}

/// A named group of people subject to a department or synergy constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetConstraint {
    pub sid: SetId,
    pub members: Vec<PersonId>,
    pub kind: SetConstraintKind,
}

impl SetConstraint {
    pub fn new(sid: impl Into<SetId>, members: Vec<PersonId>, kind: SetConstraintKind) -> Self {
        Self { sid: sid.into(), members, kind }
    }

    /// The upper bound to enforce, with `Department`'s unbounded case normalized
    /// to full membership. `None` for synergy constraints, which carry no cap.
    pub fn effective_upper_bound(&self) -> Option<u32> {
        match self.kind {
            SetConstraintKind::Department { hi, .. } => {
                Some(hi.unwrap_or(self.members.len() as u32))
            }
            SetConstraintKind::Synergy { .. } => None,
        }
    }

    pub fn lower_bound(&self) -> u32 {
        match self.kind {
            SetConstraintKind::Department { lo, .. } | SetConstraintKind::Synergy { lo } => lo,
        }
    }

    pub fn is_department(&self) -> bool {
        matches!(self.kind, SetConstraintKind::Department { .. })
    }

    pub fn is_synergy(&self) -> bool {
        matches!(self.kind, SetConstraintKind::Synergy { .. })
    }
}

/// A fully validated scheduling problem: a horizon, the people to schedule
/// over it, and the set constraints they're subject to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub horizon: usize,
    pub people: Vec<Person>,
    pub constraints: Vec<SetConstraint>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("horizon must be at least 1 day")]
    ZeroHorizon,

    #[error("duplicate person uid: {0}")]
    DuplicatePerson(PersonId),

    #[error("duplicate set id: {0}")]
    DuplicateSet(SetId),

    #[error("person {uid} has {actual} availability entries, expected {expected}")]
    AvailabilityLengthMismatch { uid: PersonId, expected: usize, actual: usize },

    #[error("set {sid} references unknown person uid {uid}")]
    UnknownMember { sid: SetId, uid: PersonId },

    #[error("set {sid} lists member {uid} more than once")]
    DuplicateMember { sid: SetId, uid: PersonId },

    #[error("department {sid} has lower bound {lo} greater than upper bound {hi}")]
    InvertedBounds { sid: SetId, lo: u32, hi: u32 },
}

impl Model {
    /// Validates and constructs a model. All invariants are checked once here;
    /// every other component in this crate and in `shiftsched-solver` assumes
    /// a `Model` already satisfies them.
    pub fn new(
        horizon: usize,
        people: Vec<Person>,
        constraints: Vec<SetConstraint>,
    ) -> Result<Self, ModelError> {
        if horizon == 0 {
            return Err(ModelError::ZeroHorizon);
        }

        let mut seen_uids = HashSet::with_capacity(people.len());
        for person in &people {
            if !seen_uids.insert(person.uid.clone()) {
                return Err(ModelError::DuplicatePerson(person.uid.clone()));
            }
            if person.available.len() != horizon {
                return Err(ModelError::AvailabilityLengthMismatch {
                    uid: person.uid.clone(),
                    expected: horizon,
                    actual: person.available.len(),
                });
            }
        }

        let mut seen_sids = HashSet::with_capacity(constraints.len());
        for constraint in &constraints {
            if !seen_sids.insert(constraint.sid.clone()) {
                return Err(ModelError::DuplicateSet(constraint.sid.clone()));
            }

            let mut seen_members = HashSet::with_capacity(constraint.members.len());
            for uid in &constraint.members {
                if !seen_members.insert(uid.clone()) {
                    return Err(ModelError::DuplicateMember {
                        sid: constraint.sid.clone(),
                        uid: uid.clone(),
                    });
                }
                if !seen_uids.contains(uid) {
                    return Err(ModelError::UnknownMember {
                        sid: constraint.sid.clone(),
                        uid: uid.clone(),
                    });
                }
            }

            if let SetConstraintKind::Department { lo, hi: Some(hi) } = constraint.kind {
                if lo > hi {
                    return Err(ModelError::InvertedBounds { sid: constraint.sid.clone(), lo, hi });
                }
            }
        }

        Ok(Self { horizon, people, constraints })
    }

    pub fn person_index(&self, uid: &str) -> Option<usize> {
        self.people.iter().position(|p| p.uid == uid)
    }

    pub fn department_constraints(&self) -> impl Iterator<Item = &SetConstraint> {
        self.constraints.iter().filter(|c| c.is_department())
    }

    pub fn synergy_constraints(&self) -> impl Iterator<Item = &SetConstraint> {
        self.constraints.iter().filter(|c| c.is_synergy())
    }
}
