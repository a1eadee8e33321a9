use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// GrowthRow – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation: the growth rate of one indicator in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRow {
    /// Indicator name (never empty).
    pub indicator: String,
    pub year: i32,
    /// Growth rate in percent. `None` when the cell was blank or `NaN`.
    pub growth_rate: Option<f64>,
}

impl GrowthRow {
    pub fn new(indicator: impl Into<String>, year: i32, growth_rate: Option<f64>) -> Self {
        Self {
            indicator: indicator.into(),
            year,
            growth_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// YearRange – inclusive span of years
// ---------------------------------------------------------------------------

/// Inclusive year span. Not validated on construction: a reversed range is
/// representable so the pipeline can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// Clamp both bounds into `bounds`. Each bound is clamped on its own, so a
    /// reversed range stays reversed.
    pub fn clamp_into(&self, bounds: YearRange) -> YearRange {
        YearRange {
            min: self.min.clamp(bounds.min, bounds.max),
            max: self.max.clamp(bounds.min, bounds.max),
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// GrowthDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
#[derive(Debug, Clone, Default)]
pub struct GrowthDataset {
    /// All rows, in file order.
    pub rows: Vec<GrowthRow>,
    /// Distinct indicators in first-seen order.
    pub indicators: Vec<String>,
    /// Observed year span, `None` when there are no rows.
    pub year_bounds: Option<YearRange>,
}

impl GrowthDataset {
    /// Build indices from the loaded rows.
    pub fn from_rows(rows: Vec<GrowthRow>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut indicators = Vec::new();
        let mut year_bounds: Option<YearRange> = None;

        for row in &rows {
            if seen.insert(row.indicator.as_str()) {
                indicators.push(row.indicator.clone());
            }
            year_bounds = Some(match year_bounds {
                None => YearRange::new(row.year, row.year),
                Some(b) => YearRange::new(b.min.min(row.year), b.max.max(row.year)),
            });
        }

        GrowthDataset {
            rows,
            indicators,
            year_bounds,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_indicator(&self, indicator: &str) -> bool {
        self.indicators.iter().any(|i| i == indicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_keep_first_seen_order() {
        let ds = GrowthDataset::from_rows(vec![
            GrowthRow::new("Services", 2001, Some(1.0)),
            GrowthRow::new("Agriculture", 2000, Some(2.0)),
            GrowthRow::new("Services", 2000, None),
        ]);

        assert_eq!(ds.indicators, vec!["Services", "Agriculture"]);
        assert_eq!(ds.year_bounds, Some(YearRange::new(2000, 2001)));
        assert!(ds.has_indicator("Agriculture"));
        assert!(!ds.has_indicator("Industry"));
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let ds = GrowthDataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.indicators.is_empty());
        assert_eq!(ds.year_bounds, None);
    }

    #[test]
    fn test_year_range_clamp_keeps_reversal() {
        let bounds = YearRange::new(2000, 2020);
        assert_eq!(
            YearRange::new(1990, 2030).clamp_into(bounds),
            YearRange::new(2000, 2020)
        );

        let reversed = YearRange::new(2015, 2005).clamp_into(bounds);
        assert!(reversed.is_reversed());
        assert!(YearRange::new(2000, 2000).contains(2000));
        assert!(!YearRange::new(2000, 2001).contains(2002));
    }
}
