//! Which analysis views a column classification unlocks.

use crate::classify::ColumnClassification;
use serde::Serialize;
use std::fmt;

/// Analysis views offered for an active dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisView {
    Overview,
    Charts,
    StatisticalTests,
    Outliers,
    TimeSeries,
    Clustering,
    TextNlp,
    PredictiveModeling,
}

impl AnalysisView {
    /// Every view, in display order.
    pub const ALL: [AnalysisView; 8] = [
        AnalysisView::Overview,
        AnalysisView::Charts,
        AnalysisView::StatisticalTests,
        AnalysisView::Outliers,
        AnalysisView::TimeSeries,
        AnalysisView::Clustering,
        AnalysisView::TextNlp,
        AnalysisView::PredictiveModeling,
    ];

    /// Returns true if `classes` has the columns this view needs.
    pub fn is_enabled(&self, classes: &ColumnClassification) -> bool {
        let numeric = classes.numeric.len();
        match self {
            AnalysisView::Overview => true,
            AnalysisView::Charts | AnalysisView::Outliers => numeric > 0,
            AnalysisView::StatisticalTests => numeric > 1 || !classes.categorical.is_empty(),
            AnalysisView::TimeSeries => !classes.datetime.is_empty() && numeric > 0,
            AnalysisView::Clustering => numeric > 2,
            AnalysisView::TextNlp => !classes.text.is_empty(),
            AnalysisView::PredictiveModeling => numeric > 1,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            AnalysisView::Overview => "Overview",
            AnalysisView::Charts => "Charts",
            AnalysisView::StatisticalTests => "Statistical Tests",
            AnalysisView::Outliers => "Outliers",
            AnalysisView::TimeSeries => "Time Series",
            AnalysisView::Clustering => "Clustering",
            AnalysisView::TextNlp => "Text/NLP",
            AnalysisView::PredictiveModeling => "Predictive Modeling",
        }
    }
}

impl fmt::Display for AnalysisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Views enabled for `classes`, in display order.
pub fn enabled_views(classes: &ColumnClassification) -> Vec<AnalysisView> {
    AnalysisView::ALL
        .into_iter()
        .filter(|view| view.is_enabled(classes))
        .collect()
}
