use common::model::certificate::Certificate;

use super::state::{ChartMode, ViewMode};

pub enum Msg {
    Fetch { refresh: bool },
    Fetched {
        generation: u64,
        records: Option<Vec<Certificate>>,
    },
    SetQuery(String),
    /// Raw `<select>` value of the year filter.
    SetYear(String),
    SetLegitimacy(String),
    SetChartMode(ChartMode),
    SetCompareBy(String),
    SetLegitOnly(bool),
    SetViewMode(ViewMode),
    Export,
}
