use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Landing = 1,
    Date = 2,
    Time = 3,
    Details = 4,
    Confirmation = 5,
}

impl Step {
    pub const FIRST: Step = Step::Landing;
    pub const LAST: Step = Step::Confirmation;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::Landing),
            2 => Some(Step::Date),
            3 => Some(Step::Time),
            4 => Some(Step::Details),
            5 => Some(Step::Confirmation),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Landing => "landing",
            Step::Date => "date",
            Step::Time => "time",
            Step::Details => "details",
            Step::Confirmation => "confirmation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last() {
        assert_eq!(Step::Details.next(), Step::Confirmation);
        assert_eq!(Step::Confirmation.next(), Step::Confirmation);
    }

    #[test]
    fn test_prev_clamps_at_first() {
        assert_eq!(Step::Date.prev(), Step::Landing);
        assert_eq!(Step::Landing.prev(), Step::Landing);
    }

    #[test]
    fn test_from_number_range() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
        for n in 1..=5 {
            assert_eq!(Step::from_number(n).map(Step::number), Some(n));
        }
    }
}
