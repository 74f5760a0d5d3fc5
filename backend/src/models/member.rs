//! Member model
//!
//! Represents one participant in a trip. Each member has:
//! - An opaque identifier, unique within the trip
//! - A display name (the only mutable field)
//!
//! The `Roster` holds the full member set for a trip, keyed by id but
//! preserving join order. Join order matters: it is the deterministic
//! secondary sort key the settlement planner uses to break ties between
//! equal balances.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when constructing members or a roster
#[derive(Debug, Error, PartialEq)]
pub enum MemberError {
    #[error("Member id must not be empty")]
    EmptyId,

    #[error("Member display name must not be empty")]
    EmptyDisplayName,

    #[error("Duplicate member id: {id}")]
    DuplicateId { id: String },
}

/// A trip participant
///
/// # Example
/// ```
/// use trip_settlement_core_rs::Member;
///
/// let alice = Member::new("u-alice".to_string(), "Alice".to_string()).unwrap();
/// assert_eq!(alice.id(), "u-alice");
/// assert_eq!(alice.display_name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque identifier, unique per trip
    id: String,

    /// Human-readable name shown in reports
    display_name: String,
}

impl Member {
    /// Create a new member, validating both fields are non-empty
    pub fn new(id: String, display_name: String) -> Result<Self, MemberError> {
        if id.is_empty() {
            return Err(MemberError::EmptyId);
        }
        if display_name.is_empty() {
            return Err(MemberError::EmptyDisplayName);
        }
        Ok(Self { id, display_name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Rename the member. Display name is the only mutable field.
    pub fn set_display_name(&mut self, display_name: String) -> Result<(), MemberError> {
        if display_name.is_empty() {
            return Err(MemberError::EmptyDisplayName);
        }
        self.display_name = display_name;
        Ok(())
    }
}

/// The member set of one trip, keyed by id, iteration in join order
///
/// Construction rejects duplicate ids up front so the engine downstream can
/// assume each id maps to exactly one member. An empty roster is valid
/// (a trip with no members yields an empty balance report).
///
/// # Example
/// ```
/// use trip_settlement_core_rs::{Member, Roster};
///
/// let roster = Roster::new(vec![
///     Member::new("a".to_string(), "Alice".to_string()).unwrap(),
///     Member::new("b".to_string(), "Bob".to_string()).unwrap(),
/// ]).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert!(roster.contains("a"));
/// assert!(roster.get("c").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Members in join order
    members: Vec<Member>,

    /// Index from member id into `members`
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster from members in join order
    ///
    /// Fails fast on the first duplicate id encountered.
    pub fn new(members: Vec<Member>) -> Result<Self, MemberError> {
        let mut index = HashMap::with_capacity(members.len());
        for (pos, member) in members.iter().enumerate() {
            if index.insert(member.id().to_string(), pos).is_some() {
                return Err(MemberError::DuplicateId {
                    id: member.id().to_string(),
                });
            }
        }
        Ok(Self { members, index })
    }

    /// Look up a member by id
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.index.get(id).map(|&pos| &self.members[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Join-order position of a member id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Members in join order
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Display name for an id, or `None` for ids outside the roster
    pub fn display_name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(Member::display_name)
    }
}
