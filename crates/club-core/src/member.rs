//! Club member record.

use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::flatten::{Collision, FlatRecord, flatten_section, merge_flat};

/// Top-level sections of a flattened member, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    User,
    Membership,
    Stats,
    PeakRating,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::User, Self::Membership, Self::Stats, Self::PeakRating];

    /// Key prefix used when flattening this section.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Membership => "membership",
            Self::Stats => "stats",
            Self::PeakRating => "peakRating",
        }
    }
}

/// One club member: membership fields, embedded user fields, and the
/// per-user sections fetched after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubMember {
    membership: Map<String, Value>,
    user: Map<String, Value>,
    user_id: String,
    stats: Map<String, Value>,
    peak_rating: Map<String, Value>,
}

impl ClubMember {
    /// Split a membership entry into membership fields and `user` fields.
    ///
    /// A non-object entry yields an empty member; a non-object `user` yields
    /// empty user fields.
    #[must_use]
    pub fn from_entry(entry: Value) -> Self {
        let Value::Object(fields) = entry else {
            return Self::default();
        };

        let mut membership = Map::new();
        let mut user = Map::new();
        for (key, value) in fields {
            if key != "user" {
                membership.insert(key, value);
            } else if let Value::Object(fields) = value {
                user = fields;
            }
        }

        let user_id = match user.get("userId") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Self {
            membership,
            user,
            user_id,
            stats: Map::new(),
            peak_rating: Map::new(),
        }
    }

    /// The member's user id, or `""` when the entry carried none.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Display name, or `""` when absent.
    #[must_use]
    pub fn nick(&self) -> &str {
        self.user.get("nick").and_then(Value::as_str).unwrap_or_default()
    }

    #[must_use]
    pub const fn membership(&self) -> &Map<String, Value> {
        &self.membership
    }

    #[must_use]
    pub const fn user(&self) -> &Map<String, Value> {
        &self.user
    }

    #[must_use]
    pub const fn stats(&self) -> &Map<String, Value> {
        &self.stats
    }

    #[must_use]
    pub const fn peak_rating(&self) -> &Map<String, Value> {
        &self.peak_rating
    }

    /// Replace the stats section. `None` or a non-object stores an empty map.
    pub fn update_stats(&mut self, stats: Option<Value>) {
        self.stats = into_object(stats);
    }

    /// Replace the peak-rating section. `None` or a non-object stores an empty map.
    pub fn update_peak_rating(&mut self, rating: Option<Value>) {
        self.peak_rating = into_object(rating);
    }

    fn section(&self, section: Section) -> &Map<String, Value> {
        match section {
            Section::User => &self.user,
            Section::Membership => &self.membership,
            Section::Stats => &self.stats,
            Section::PeakRating => &self.peak_rating,
        }
    }

    /// Flatten every section under its prefix and merge them in
    /// [`Section::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeyCollision`] if two sections yield the same key,
    /// which the distinct prefixes rule out for well-formed input.
    pub fn to_flattened_record(&self) -> Result<FlatRecord, CoreError> {
        let sections = Section::ALL
            .into_iter()
            .map(|section| flatten_section(section.prefix(), self.section(section)));
        merge_flat(sections, Collision::Reject)
    }
}

fn into_object(value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
