use thiserror::Error;

use super::model::{GrowthDataset, GrowthRow};
use super::selection::Selection;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Selection problems the user can fix by changing the sidebar widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("no indicator selected")]
    NoSelection,

    #[error("invalid year range: {min} is after {max}")]
    InvalidRange { min: i32, max: i32 },
}

// ---------------------------------------------------------------------------
// FilteredView – rows matching a selection
// ---------------------------------------------------------------------------

/// The rows of a dataset that match a [`Selection`], in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a GrowthRow>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a GrowthRow> + '_ {
        self.rows.iter().copied()
    }
}

impl<'a> FromIterator<&'a GrowthRow> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a GrowthRow>>(iter: I) -> Self {
        FilteredView {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Return the rows whose indicator is selected and whose year lies in the
/// selected range (both bounds inclusive).
///
/// * An empty indicator set is [`FilterError::NoSelection`].
/// * A reversed year range is [`FilterError::InvalidRange`].
/// * Selected indicators absent from the dataset simply match nothing.
pub fn filter<'a>(
    dataset: &'a GrowthDataset,
    selection: &Selection,
) -> Result<FilteredView<'a>, FilterError> {
    if selection.indicators.is_empty() {
        return Err(FilterError::NoSelection);
    }
    let years = selection.years;
    if years.is_reversed() {
        return Err(FilterError::InvalidRange {
            min: years.min,
            max: years.max,
        });
    }

    Ok(dataset
        .rows
        .iter()
        .filter(|row| years.contains(row.year) && selection.contains(&row.indicator))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::YearRange;

    fn dataset() -> GrowthDataset {
        GrowthDataset::from_rows(vec![
            GrowthRow::new("A", 2020, Some(3.0)),
            GrowthRow::new("A", 2021, Some(4.0)),
            GrowthRow::new("B", 2020, Some(-1.0)),
        ])
    }

    fn selection(indicators: &[&str], min: i32, max: i32) -> Selection {
        Selection {
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
            years: YearRange::new(min, max),
        }
    }

    fn owned(view: &FilteredView<'_>) -> Vec<GrowthRow> {
        view.iter().cloned().collect()
    }

    #[test]
    fn test_single_indicator_full_range() {
        let ds = dataset();
        let view = filter(&ds, &selection(&["A"], 2020, 2021)).unwrap();
        assert_eq!(
            owned(&view),
            vec![
                GrowthRow::new("A", 2020, Some(3.0)),
                GrowthRow::new("A", 2021, Some(4.0)),
            ]
        );
    }

    #[test]
    fn test_two_indicators_single_year() {
        let ds = dataset();
        let view = filter(&ds, &selection(&["A", "B"], 2020, 2020)).unwrap();
        assert_eq!(
            owned(&view),
            vec![
                GrowthRow::new("A", 2020, Some(3.0)),
                GrowthRow::new("B", 2020, Some(-1.0)),
            ]
        );
    }

    #[test]
    fn test_empty_indicator_set_is_no_selection() {
        let ds = dataset();
        assert_eq!(
            filter(&ds, &selection(&[], 2020, 2021)),
            Err(FilterError::NoSelection)
        );
    }

    #[test]
    fn test_reversed_range_is_invalid() {
        let ds = dataset();
        assert_eq!(
            filter(&ds, &selection(&["A"], 2022, 2020)),
            Err(FilterError::InvalidRange {
                min: 2022,
                max: 2020
            })
        );
    }

    #[test]
    fn test_unknown_indicator_matches_nothing() {
        let ds = dataset();
        let view = filter(&ds, &selection(&["Z"], 2000, 2030)).unwrap();
        assert!(view.is_empty());

        let view = filter(&ds, &selection(&["Z", "B"], 2000, 2030)).unwrap();
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_empty_dataset_yields_empty_view() {
        let ds = GrowthDataset::default();
        let view = filter(&ds, &selection(&["A"], 2020, 2021)).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_preserves_dataset_order() {
        let ds = GrowthDataset::from_rows(vec![
            GrowthRow::new("B", 2022, Some(1.0)),
            GrowthRow::new("A", 2020, Some(2.0)),
            GrowthRow::new("B", 2019, Some(3.0)),
            GrowthRow::new("A", 2018, Some(4.0)),
        ]);
        let view = filter(&ds, &selection(&["A", "B"], 2000, 2030)).unwrap();
        let years: Vec<i32> = view.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2022, 2020, 2019, 2018]);
    }

    #[test]
    fn test_filter_is_exact() {
        let ds = GrowthDataset::from_rows(
            (0..40)
                .map(|i| GrowthRow::new(["A", "B", "C"][i % 3], 2000 + (i as i32 % 11), Some(i as f64)))
                .collect(),
        );
        let sel = selection(&["A", "C"], 2003, 2007);
        let view = filter(&ds, &sel).unwrap();

        for row in view.iter() {
            assert!(sel.contains(&row.indicator));
            assert!(sel.years.contains(row.year));
        }
        let expected = ds
            .rows
            .iter()
            .filter(|r| (r.indicator == "A" || r.indicator == "C") && (2003..=2007).contains(&r.year))
            .count();
        assert_eq!(view.len(), expected);

        // Same input, same output.
        assert_eq!(filter(&ds, &sel).unwrap(), view);
    }

    #[test]
    fn test_widening_range_only_adds_rows() {
        let ds = GrowthDataset::from_rows(
            (0..30)
                .map(|i| GrowthRow::new(if i % 2 == 0 { "A" } else { "B" }, 1990 + i, Some(0.5)))
                .collect(),
        );
        let narrow = filter(&ds, &selection(&["A", "B"], 1995, 2000)).unwrap();
        let wide = filter(&ds, &selection(&["A", "B"], 1992, 2010)).unwrap();

        // `narrow` must be a subsequence of `wide`.
        let mut it = wide.iter();
        for row in narrow.iter() {
            assert!(it.any(|w| std::ptr::eq(w, row)));
        }
        assert!(wide.len() >= narrow.len());
    }
}
