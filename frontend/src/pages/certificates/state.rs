use std::cell::Cell;
use std::rc::Rc;

use common::analytics::CompareBy;
use common::filter::{apply, CertificateFilter};
use common::model::certificate::Certificate;

/// Which chart the analytics panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartMode {
    #[default]
    Overview,
    Trends,
    Comparison,
}

impl ChartMode {
    pub const ALL: [ChartMode; 3] = [ChartMode::Overview, ChartMode::Trends, ChartMode::Comparison];

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Overview => "Overview",
            ChartMode::Trends => "Trends",
            ChartMode::Comparison => "Comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

pub struct CertificatesPage {
    pub records: Vec<Certificate>,
    pub loading: bool,
    pub refreshing: bool,
    pub filter: CertificateFilter,
    /// Search box content as typed; `filter.query` holds the normalized form.
    pub query: String,
    pub chart_mode: ChartMode,
    pub compare_by: CompareBy,
    pub legit_only: bool,
    pub view_mode: ViewMode,
    pub generation: u64,
    pub alive: Rc<Cell<bool>>,
}

impl CertificatesPage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            refreshing: false,
            filter: CertificateFilter::default(),
            query: String::new(),
            chart_mode: ChartMode::default(),
            compare_by: CompareBy::default(),
            legit_only: false,
            view_mode: ViewMode::default(),
            generation: 0,
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn visible(&self) -> Vec<&Certificate> {
        apply(&self.records, &self.filter)
    }
}
