use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::data::filter::{filter, FilterError};
use crate::data::loader::{self, DataLoadError};
use crate::data::model::{GrowthDataset, YearRange};
use crate::data::selection::Selection;
use crate::data::summary::{summarize, SummaryRow};
use crate::i18n::Language;
use crate::ui::plot::{chart_series, ChartSeries};

// ---------------------------------------------------------------------------
// Pipeline output cached between frames
// ---------------------------------------------------------------------------

/// Everything the central panel draws for the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub series: Vec<ChartSeries>,
    pub summary: Vec<SummaryRow>,
    /// Rows in the filtered view, including those without a growth rate.
    pub row_count: usize,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub language: Language,

    /// File the current dataset (or load error) came from.
    pub data_path: PathBuf,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<GrowthDataset>>,

    /// Set when the last load failed; the dashboard is not drawn.
    pub load_error: Option<DataLoadError>,

    /// Indicators ticked in the sidebar.
    pub picked_indicators: Vec<String>,

    /// Years chosen in the sidebar.
    pub picked_years: YearRange,

    /// Colour per indicator of the current dataset.
    pub color_map: Option<ColorMap>,

    /// Result of the last pipeline run (cached).
    pub dashboard: Option<Result<Dashboard, FilterError>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            language: config.language,
            data_path: config.data_path.clone(),
            config,
            dataset: None,
            load_error: None,
            picked_indicators: Vec::new(),
            picked_years: YearRange::new(0, 0),
            color_map: None,
            dashboard: None,
        }
    }

    /// Load `path`, replacing the dataset or recording the failure.
    pub fn load(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with indicators {:?} from {}",
                    dataset.len(),
                    dataset.indicators,
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load data: {e}");
                self.set_load_error(e);
            }
        }
    }

    /// Re-read the current file.
    pub fn reload(&mut self) {
        let path = self.data_path.clone();
        self.load(&path);
    }

    /// Ingest a newly loaded dataset and rerun the pipeline.
    ///
    /// On the first load the picks come from the configured default. On a
    /// reload the existing picks are re-validated against the new data.
    pub fn set_dataset(&mut self, dataset: GrowthDataset) {
        let selection = match &self.dataset {
            Some(_) => Selection::from_picks(
                &dataset,
                self.picked_indicators.iter().map(String::as_str),
                self.picked_years,
            ),
            None => Selection::default_for(&dataset, self.config.default_selection),
        };

        self.picked_indicators = selection.indicators;
        self.picked_years = selection.years;
        self.color_map = Some(ColorMap::new(&dataset.indicators));
        self.dataset = Some(Arc::new(dataset));
        self.load_error = None;
        self.refresh();
    }

    pub fn set_load_error(&mut self, err: DataLoadError) {
        self.dataset = None;
        self.color_map = None;
        self.dashboard = None;
        self.picked_indicators.clear();
        self.load_error = Some(err);
    }

    /// The validated selection for the current picks.
    pub fn selection(&self) -> Option<Selection> {
        let dataset = self.dataset.as_ref()?;
        Some(Selection::from_picks(
            dataset,
            self.picked_indicators.iter().map(String::as_str),
            self.picked_years,
        ))
    }

    /// Rerun filter and summary for the current picks.
    ///
    /// A dataset without rows has nothing to pick, so it yields an empty
    /// dashboard rather than a missing-selection error.
    pub fn refresh(&mut self) {
        let (Some(dataset), Some(selection)) = (self.dataset.clone(), self.selection()) else {
            self.dashboard = None;
            return;
        };
        if dataset.is_empty() {
            log::debug!("Dataset has no rows");
            self.dashboard = Some(Ok(Dashboard::default()));
            return;
        }
        let colors = self.color_map.clone().unwrap_or_else(|| ColorMap::new(&dataset.indicators));

        let result = filter(&dataset, &selection).map(|view| Dashboard {
            series: chart_series(&view, &colors),
            summary: summarize(&view),
            row_count: view.len(),
        });

        match &result {
            Ok(d) => log::debug!(
                "Selection {:?} {}: {} rows, {} summary rows",
                selection.indicators,
                selection.years,
                d.row_count,
                d.summary.len()
            ),
            Err(e) => log::debug!("Selection rejected: {e}"),
        }
        self.dashboard = Some(result);
    }

    pub fn is_picked(&self, indicator: &str) -> bool {
        self.picked_indicators.iter().any(|i| i == indicator)
    }

    /// Tick or untick a single indicator.
    pub fn toggle_indicator(&mut self, indicator: &str) {
        if let Some(pos) = self.picked_indicators.iter().position(|i| i == indicator) {
            self.picked_indicators.remove(pos);
        } else {
            self.picked_indicators.push(indicator.to_string());
        }
        self.refresh();
    }

    /// Tick every indicator of the dataset.
    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.picked_indicators = ds.indicators.clone();
            self.refresh();
        }
    }

    /// Untick every indicator.
    pub fn select_none(&mut self) {
        self.picked_indicators.clear();
        self.refresh();
    }

    pub fn set_year_min(&mut self, year: i32) {
        self.picked_years.min = year;
        self.refresh();
    }

    pub fn set_year_max(&mut self, year: i32) {
        self.picked_years.max = year;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GrowthRow;
    use crate::data::selection::DefaultSelection;
    use std::io::Write;

    fn dataset() -> GrowthDataset {
        GrowthDataset::from_rows(vec![
            GrowthRow::new("A", 2020, Some(3.0)),
            GrowthRow::new("A", 2021, Some(4.0)),
            GrowthRow::new("B", 2020, Some(-1.0)),
        ])
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_dataset(dataset());
        state
    }

    fn dashboard(state: &AppState) -> &Dashboard {
        state.dashboard.as_ref().unwrap().as_ref().unwrap()
    }

    #[test]
    fn test_first_load_uses_default_selection() {
        let state = loaded_state();
        assert_eq!(state.picked_indicators, vec!["A"]);
        assert_eq!(state.picked_years, YearRange::new(2020, 2021));

        let d = dashboard(&state);
        assert_eq!(d.row_count, 2);
        assert_eq!(d.summary[0].mean, 3.5);
        assert_eq!(d.series.len(), 1);
    }

    #[test]
    fn test_default_all_from_config() {
        let config = AppConfig {
            default_selection: DefaultSelection::All,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state.set_dataset(dataset());
        assert_eq!(state.picked_indicators, vec!["A", "B"]);
        assert_eq!(dashboard(&state).summary.len(), 2);
    }

    #[test]
    fn test_select_none_reports_no_selection() {
        let mut state = loaded_state();
        state.select_none();
        assert_eq!(state.dashboard, Some(Err(FilterError::NoSelection)));

        state.toggle_indicator("B");
        assert_eq!(dashboard(&state).summary[0].indicator, "B");
    }

    #[test]
    fn test_reversed_years_report_invalid_range() {
        let mut state = loaded_state();
        state.set_year_min(2021);
        state.set_year_max(2020);
        assert_eq!(
            state.dashboard,
            Some(Err(FilterError::InvalidRange {
                min: 2021,
                max: 2020
            }))
        );
    }

    #[test]
    fn test_reload_drops_stale_picks() {
        let mut state = loaded_state();
        state.select_all();
        assert_eq!(state.picked_indicators, vec!["A", "B"]);

        state.set_dataset(GrowthDataset::from_rows(vec![
            GrowthRow::new("B", 2010, Some(1.0)),
            GrowthRow::new("C", 2030, Some(2.0)),
        ]));
        assert_eq!(state.picked_indicators, vec!["B"]);
        assert_eq!(state.picked_years, YearRange::new(2020, 2021));
        assert_eq!(dashboard(&state).row_count, 0);
    }

    #[test]
    fn test_header_only_file_gives_empty_dashboard() {
        let mut state = AppState::new(AppConfig::default());
        state.set_dataset(GrowthDataset::default());

        assert!(state.picked_indicators.is_empty());
        assert_eq!(state.dashboard, Some(Ok(Dashboard::default())));
    }

    #[test]
    fn test_load_error_clears_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded_state();
        state.load(&dir.path().join("missing.csv"));

        assert!(state.dataset.is_none());
        assert!(state.dashboard.is_none());
        assert!(matches!(state.load_error, Some(DataLoadError::NotFound { .. })));
    }

    #[test]
    fn test_load_and_reload_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Indicator,Year,Growth Rate\nGDP,2019,2.6\nGDP,2020,-7.2").unwrap();
        file.flush().unwrap();

        let mut state = AppState::new(AppConfig::default());
        state.load(file.path());
        assert_eq!(dashboard(&state).row_count, 2);

        writeln!(file, "GDP,2021,7.9").unwrap();
        file.flush().unwrap();
        state.reload();
        // Years were clamped to the old span and stay there.
        assert_eq!(state.picked_years, YearRange::new(2019, 2020));
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(3));
    }
}
