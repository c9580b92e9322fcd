use common::analytics::CompareBy;
use common::export::{export_csv, EXPORT_FILE_NAME, EXPORT_MIME};
use common::filter::{LegitimacyFilter, TextQuery, YearFilter};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CertificatesPage;
use crate::helpers::{download_text, local_offset, show_toast};

pub fn update(component: &mut CertificatesPage, ctx: &Context<CertificatesPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch { refresh } => {
            component.generation += 1;
            if refresh {
                component.refreshing = true;
            }
            let generation = component.generation;
            let alive = component.alive.clone();
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let records = match api.list_certificates().await {
                    Ok(records) => Some(records),
                    Err(e) => {
                        error!(format!("Error fetching certificates: {}", e));
                        None
                    }
                };
                if alive.get() {
                    link.send_message(Msg::Fetched { generation, records });
                }
            });
            refresh
        }
        Msg::Fetched { generation, records } => {
            if generation != component.generation {
                return false;
            }
            component.loading = false;
            component.refreshing = false;
            if let Some(records) = records {
                component.records = records;
            }
            true
        }
        Msg::SetQuery(query) => {
            component.filter.query = TextQuery::new(&query);
            component.query = query;
            true
        }
        Msg::SetYear(value) => {
            component.filter.year = YearFilter::from_value(&value);
            true
        }
        Msg::SetLegitimacy(value) => {
            component.filter.legitimacy = LegitimacyFilter::from_value(&value);
            true
        }
        Msg::SetChartMode(mode) => {
            component.chart_mode = mode;
            true
        }
        Msg::SetCompareBy(value) => {
            component.compare_by = CompareBy::from_value(&value);
            true
        }
        Msg::SetLegitOnly(on) => {
            component.legit_only = on;
            true
        }
        Msg::SetViewMode(mode) => {
            component.view_mode = mode;
            true
        }
        Msg::Export => {
            let visible = component.visible();
            let count = visible.len();
            let exported = export_csv(visible, local_offset())
                .map_err(|e| e.to_string())
                .and_then(|csv| {
                    download_text(EXPORT_FILE_NAME, EXPORT_MIME, &csv)
                        .map_err(|e| format!("{:?}", e))
                });
            match exported {
                Ok(()) => show_toast(&format!("Exported {} records", count)),
                Err(e) => {
                    error!(format!("Export failed: {}", e));
                    show_toast("Export failed");
                }
            }
            false
        }
    }
}
