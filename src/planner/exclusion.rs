use crate::planner::constants::DEFAULT_EXCLUSIONS;

/// True if any term occurs (case-insensitively) in the ingredient name or unit.
pub fn is_excluded<S: AsRef<str>>(name: &str, unit: &str, terms: &[S]) -> bool {
    let name = name.to_lowercase();
    let unit = unit.to_lowercase();
    terms.iter().any(|term| {
        let term = term.as_ref().trim().to_lowercase();
        !term.is_empty() && (name.contains(&term) || unit.contains(&term))
    })
}

/// Configurable set of exclusion terms handed to the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    /// Lowercased, trimmed, non-empty, de-duplicated.
    terms: Vec<String>,
}

impl ExclusionFilter {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        filter.extend(terms);
        filter
    }

    /// The stock policy: canteen items, pantry staples and trace amounts.
    pub fn defaults() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }

    /// A filter that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !self.terms.contains(&term) {
                self.terms.push(term);
            }
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn excludes(&self, name: &str, unit: &str) -> bool {
        is_excluded(name, unit, &self.terms)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
