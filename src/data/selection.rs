use super::model::{GrowthDataset, YearRange};

/// Which indicators are selected before the user touches the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultSelection {
    /// Only the first indicator of the file.
    #[default]
    First,
    /// Every indicator of the file.
    All,
}

/// The indicators and inclusive year span the pipeline filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected indicators, without duplicates, in the order they were picked.
    pub indicators: Vec<String>,
    pub years: YearRange,
}

impl Selection {
    /// The selection shown when a dataset has just been loaded: the
    /// indicators given by `policy` and the dataset's full year span.
    pub fn default_for(dataset: &GrowthDataset, policy: DefaultSelection) -> Self {
        let indicators = match policy {
            DefaultSelection::First => dataset.indicators.iter().take(1).cloned().collect(),
            DefaultSelection::All => dataset.indicators.clone(),
        };
        Selection {
            indicators,
            years: dataset
                .year_bounds
                .unwrap_or(YearRange::new(i32::MIN, i32::MAX)),
        }
    }

    /// Validate raw sidebar picks against `dataset`.
    ///
    /// Indicators the dataset does not contain are dropped with a warning and
    /// duplicates collapse. Each year bound is clamped into the dataset span;
    /// a reversed range is kept as is for [`filter`](super::filter::filter)
    /// to report.
    pub fn from_picks<'p, I>(dataset: &GrowthDataset, picks: I, years: YearRange) -> Self
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut indicators: Vec<String> = Vec::new();
        for pick in picks {
            if !dataset.has_indicator(pick) {
                log::warn!("Dropping unknown indicator '{pick}' from selection");
                continue;
            }
            if !indicators.iter().any(|i| i == pick) {
                indicators.push(pick.to_string());
            }
        }

        let years = match dataset.year_bounds {
            Some(bounds) => {
                let clamped = years.clamp_into(bounds);
                if clamped != years {
                    log::debug!("Clamped year range {years} into {clamped}");
                }
                clamped
            }
            None => years,
        };

        Selection { indicators, years }
    }

    pub fn contains(&self, indicator: &str) -> bool {
        self.indicators.iter().any(|i| i == indicator)
    }
}
