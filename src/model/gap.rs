use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A stroke field that could not be derived from the hole summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissingField {
    StartingLocationLie,
    StartingLocationDistance,
    LandingLocationLie,
    LandingLocationDistance,
}

impl MissingField {
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            MissingField::StartingLocationLie => "starting_location_lie",
            MissingField::StartingLocationDistance => "starting_location_distance",
            MissingField::LandingLocationLie => "landing_location_lie",
            MissingField::LandingLocationDistance => "landing_location_distance",
        }
    }
}

/// Ordered set of missing fields. Renders as `a`, `a and b`, `a, b and c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingData(BTreeSet<MissingField>);

impl MissingData {
    pub fn insert(&mut self, field: MissingField) {
        self.0.insert(field);
    }

    #[must_use]
    pub fn contains(&self, field: MissingField) -> bool {
        self.0.contains(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MissingField> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<MissingField> for MissingData {
    fn from_iter<T: IntoIterator<Item = MissingField>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MissingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(MissingField::column).collect();
        match names.split_last() {
            None => Ok(()),
            Some((last, [])) => f.write_str(last),
            Some((last, rest)) => write!(f, "{} and {last}", rest.join(", ")),
        }
    }
}

impl Serialize for MissingData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A stroke that needs manual input before strokes gained means anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapEntry {
    pub round_id: String,
    pub hole_number: Option<i64>,
    pub shot_number: usize,
    pub missing_data: MissingData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_landing_taxonomy() {
        let distance: MissingData = [MissingField::LandingLocationDistance].into_iter().collect();
        assert_eq!(distance.to_string(), "landing_location_distance");

        let both: MissingData = [
            MissingField::LandingLocationDistance,
            MissingField::LandingLocationLie,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            both.to_string(),
            "landing_location_lie and landing_location_distance"
        );
    }

    #[test]
    fn renders_three_fields_in_column_order() {
        let three: MissingData = [
            MissingField::LandingLocationLie,
            MissingField::StartingLocationDistance,
            MissingField::LandingLocationDistance,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            three.to_string(),
            "starting_location_distance, landing_location_lie and landing_location_distance"
        );
    }
}
