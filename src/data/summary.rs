use super::filter::FilteredView;

/// Aggregate growth statistics for one indicator. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub indicator: String,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug)]
struct Accumulator<'a> {
    indicator: &'a str,
    sum: f64,
    count: usize,
    max: f64,
    min: f64,
}

/// Group the view by indicator and compute mean / max / min of the growth
/// rate over present values.
///
/// Groups appear in the order their indicator is first seen in the view.
/// A group whose rows all lack a growth rate produces no row. The mean is
/// clamped into `[min, max]` so rounding in the sum never pushes it outside.
pub fn summarize(view: &FilteredView<'_>) -> Vec<SummaryRow> {
    let mut groups: Vec<Accumulator<'_>> = Vec::new();

    for row in view.iter() {
        let pos = match groups.iter().position(|g| g.indicator == row.indicator) {
            Some(pos) => pos,
            None => {
                groups.push(Accumulator {
                    indicator: &row.indicator,
                    sum: 0.0,
                    count: 0,
                    max: f64::NEG_INFINITY,
                    min: f64::INFINITY,
                });
                groups.len() - 1
            }
        };

        if let Some(value) = row.growth_rate {
            let g = &mut groups[pos];
            g.sum += value;
            g.count += 1;
            g.max = g.max.max(value);
            g.min = g.min.min(value);
        }
    }

    groups
        .into_iter()
        .filter(|g| g.count > 0)
        .map(|g| SummaryRow {
            indicator: g.indicator.to_string(),
            mean: (g.sum / g.count as f64).clamp(g.min, g.max),
            max: g.max,
            min: g.min,
        })
        .collect()
}
