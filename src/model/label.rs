//! Label vocabularies for review annotation.

/// Aspect categories that can be assigned to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// Facilities at the location
    Facilities,
    /// Ease of access / getting there
    Access,
    /// Cleanliness of the location
    Cleanliness,
    /// Scenery and views
    Scenery,
    /// Pricing and value
    Price,
}

impl Aspect {
    /// Get the display name for this aspect (also the exported label value).
    pub fn name(&self) -> &'static str {
        match self {
            Aspect::Facilities => "Facilities",
            Aspect::Access => "Access",
            Aspect::Cleanliness => "Cleanliness",
            Aspect::Scenery => "Scenery",
            Aspect::Price => "Price",
        }
    }

    /// Get all aspect options in display order.
    pub fn all() -> &'static [Aspect] {
        &[
            Aspect::Facilities,
            Aspect::Access,
            Aspect::Cleanliness,
            Aspect::Scenery,
            Aspect::Price,
        ]
    }
}

/// Sentiment polarity that can be assigned to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// Positive sentiment
    Positive,
    /// Negative sentiment
    Negative,
}

impl Sentiment {
    /// Get the display name for this sentiment (also the exported label value).
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }

    /// Get all sentiment options in display order.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Negative]
    }
}

/// Annotation progress of a single row.
///
/// A row moves from `Unlabeled` through `PartiallyLabeled` to `FullyLabeled`.
/// Labels can be overwritten but never cleared, so there is no transition back
/// to `Unlabeled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowProgress {
    /// Neither label set
    Unlabeled,
    /// Exactly one of the two labels set
    PartiallyLabeled,
    /// Both labels set
    FullyLabeled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_names() {
        let names: Vec<&str> = Aspect::all().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["Facilities", "Access", "Cleanliness", "Scenery", "Price"]
        );
    }

    #[test]
    fn test_sentiment_names() {
        let names: Vec<&str> = Sentiment::all().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Positive", "Negative"]);
    }
}
