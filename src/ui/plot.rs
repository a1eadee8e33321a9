use eframe::egui::{Color32, Ui};
use egui_plot::{uniform_grid_spacer, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::filter::FilteredView;
use crate::i18n::Labels;

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// One line of the chart: the points of a single indicator, sorted by year.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub indicator: String,
    pub color: Color32,
    /// `[year, growth_rate]`, rows without a growth rate left out.
    pub points: Vec<[f64; 2]>,
}

/// Split a filtered view into one series per indicator, in first-seen
/// order. Rows are sorted by year within a series so the line never
/// doubles back when the source is not year-ordered.
pub fn chart_series(view: &FilteredView<'_>, colors: &ColorMap) -> Vec<ChartSeries> {
    let mut series: Vec<ChartSeries> = Vec::new();

    for row in view.iter() {
        let Some(rate) = row.growth_rate else {
            continue;
        };
        let point = [row.year as f64, rate];
        match series.iter_mut().find(|s| s.indicator == row.indicator) {
            Some(s) => s.points.push(point),
            None => series.push(ChartSeries {
                indicator: row.indicator.clone(),
                color: colors.color_for(&row.indicator),
                points: vec![point],
            }),
        }
    }

    for s in &mut series {
        s.points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    }
    series
}

/// Axis label for a year tick; fractional positions stay blank.
pub fn year_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{}", value.round() as i64)
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Growth chart (central panel)
// ---------------------------------------------------------------------------

pub fn growth_plot(ui: &mut Ui, series: &[ChartSeries], labels: &Labels, height: f32) {
    ui.heading(labels.chart_title);

    Plot::new("growth_plot")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(labels.axis_year)
        .y_axis_label(labels.axis_growth)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(|mark, _range| year_tick(mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let line = Line::new(PlotPoints::new(s.points.clone()))
                    .name(&s.indicator)
                    .color(s.color)
                    .width(2.0);
                plot_ui.line(line);

                let markers = Points::new(PlotPoints::new(s.points.clone()))
                    .name(&s.indicator)
                    .color(s.color)
                    .radius(3.5);
                plot_ui.points(markers);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GrowthRow;

    #[test]
    fn test_series_sorted_by_year_per_indicator() {
        let rows = vec![
            GrowthRow::new("GDP", 2021, Some(7.9)),
            GrowthRow::new("Industry", 2019, Some(1.0)),
            GrowthRow::new("GDP", 2019, Some(2.6)),
            GrowthRow::new("GDP", 2020, None),
            GrowthRow::new("Industry", 2018, Some(3.0)),
        ];
        let view: FilteredView<'_> = rows.iter().collect();
        let colors = ColorMap::new(&["GDP".to_string(), "Industry".to_string()]);

        let series = chart_series(&view, &colors);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].indicator, "GDP");
        assert_eq!(series[0].points, vec![[2019.0, 2.6], [2021.0, 7.9]]);
        assert_eq!(series[1].points, vec![[2018.0, 3.0], [2019.0, 1.0]]);
        assert_eq!(series[0].color, colors.color_for("GDP"));
    }

    #[test]
    fn test_year_tick_only_on_integers() {
        assert_eq!(year_tick(2020.0), "2020");
        assert_eq!(year_tick(2020.5), "");
        assert_eq!(year_tick(1999.9999999), "2000");
    }
}
