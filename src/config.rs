//! Enumerations described as data, e.g. read from a JSON file.
use serde::{Deserialize, Serialize};

use crate::{AnyCodedSequences, SequenceSpec, family::FamilyKind};

///A family together with the spec to enumerate it under.
///
///```
///use coded_sequences::{EnumerationConfig, FamilyKind};
///
///let config = EnumerationConfig::from_json(
///    r#"{"family": "permutations", "spec": {"item_count": 3, "allow_duplicate_items": true, "min_size": 2, "max_size": 2}}"#,
///)?;
///assert_eq!(config.family, FamilyKind::Permutations);
///assert_eq!(config.codes().count(), 9);
///# Ok::<(), serde_json::Error>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumerationConfig {
    pub family: FamilyKind,
    pub spec: SequenceSpec,
}

impl EnumerationConfig {
    #[must_use]
    pub fn new(family: FamilyKind, spec: SequenceSpec) -> Self {
        EnumerationConfig { family, spec }
    }

    ///Parses a config, rejecting any spec [`SequenceSpec::new`] would reject.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    ///Starts a new enumeration of the configured family.
    #[must_use]
    pub fn codes(&self) -> AnyCodedSequences {
        AnyCodedSequences::new(self.family, self.spec)
    }

    ///See [`SequenceSpec::count`].
    #[must_use]
    pub fn count(&self) -> Option<u128> {
        self.family.count(&self.spec)
    }
}
