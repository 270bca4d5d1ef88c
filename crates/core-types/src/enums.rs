use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The customer age bracket attached to every order line.
///
/// The declaration order is the reporting order: `Youth < Adults < Seniors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Youth,
    Adults,
    Seniors,
}

impl AgeGroup {
    /// All groups in reporting order.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Youth, AgeGroup::Adults, AgeGroup::Seniors];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "Youth",
            AgeGroup::Adults => "Adults",
            AgeGroup::Seniors => "Seniors",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidInput("age_group".to_string(), s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("youth".parse::<AgeGroup>().unwrap(), AgeGroup::Youth);
        assert_eq!(" Adults ".parse::<AgeGroup>().unwrap(), AgeGroup::Adults);
        assert_eq!("SENIORS".parse::<AgeGroup>().unwrap(), AgeGroup::Seniors);
    }

    #[test]
    fn rejects_unknown_group() {
        let err = "Teens".parse::<AgeGroup>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("age_group".to_string(), "Teens".to_string())
        );
    }

    #[test]
    fn ordering_follows_reporting_order() {
        let mut groups = vec![AgeGroup::Seniors, AgeGroup::Youth, AgeGroup::Adults];
        groups.sort();
        assert_eq!(groups, AgeGroup::ALL.to_vec());
    }
}
