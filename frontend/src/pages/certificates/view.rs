//! View rendering for the certificates page.
//!
//! Summary cards and charts are computed over every fetched record; the card
//! grid, the table and the export only see the filtered subset.

use common::analytics::{compare_groups, legitimacy_split, summarize, timeline, CompareBy, Summary};
use common::filter::{year_options, LegitimacyFilter, YearFilter};
use common::model::certificate::Certificate;
use common::model::timestamp::display_date;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CertificatesPage, ChartMode, ViewMode};
use crate::components::charts::{AreaChart, BarChart, PieChart, LEGIT_COLOR, SUSPICIOUS_COLOR};
use crate::components::stat_card::StatCard;
use crate::helpers::{format_count, local_offset, now};

pub fn view(component: &CertificatesPage, ctx: &Context<CertificatesPage>) -> Html {
    let link = ctx.link();
    let summary = summarize(&component.records, now());
    html! {
        <div class="page certificates-page">
            { build_header(component, link) }
            { build_stats(&summary) }
            { build_filters(component, link) }
            { build_charts(component, &summary, link) }
            { build_records(component) }
            <footer class="page-footer">
                { "© 2025 Certificate Verification Hub. Advanced analytics for educational verification." }
            </footer>
        </div>
    }
}

fn build_header(component: &CertificatesPage, link: &Scope<CertificatesPage>) -> Html {
    html! {
        <div class="page-header">
            <div>
                <h1>{ "Certificate Verification Hub" }</h1>
                <p class="page-subtitle">{ "Advanced analytics and verification dashboard" }</p>
            </div>
            <div class="page-actions">
                <button class="btn" disabled={component.refreshing}
                        onclick={link.callback(|_| Msg::Fetch { refresh: true })}>
                    <i class={classes!("material-icons", component.refreshing.then_some("spin"))}>{ "refresh" }</i>
                    { "Refresh" }
                </button>
                <button class="btn success" onclick={link.callback(|_| Msg::Export)}>
                    <i class="material-icons">{ "download" }</i>
                    { "Export CSV" }
                </button>
            </div>
        </div>
    }
}

fn build_stats(summary: &Summary) -> Html {
    html! {
        <div class="stat-grid">
            <StatCard icon="description" title="Total Certificates"
                      value={format_count(summary.total)} subtitle={AttrValue::from("Processed")} color="blue" />
            <StatCard icon="check_circle" title="Legitimate"
                      value={format_count(summary.legitimate)}
                      subtitle={AttrValue::from(format!("{}% Success Rate", summary.legitimacy_rate))}
                      color="green" />
            <StatCard icon="cancel" title="Suspicious"
                      value={format_count(summary.suspicious)} subtitle={AttrValue::from("Flagged for Review")} color="red" />
            <StatCard icon="trending_up" title="This Week"
                      value={format_count(summary.recent_week)} subtitle={AttrValue::from("Recent Activity")} color="purple" />
            <StatCard icon="draw" title="Avg Signature Score"
                      value={format!("{:.0}%", summary.avg_signature_score * 100.0)}
                      subtitle={AttrValue::from("Across all records")} color="indigo" />
        </div>
    }
}

fn build_filters(component: &CertificatesPage, link: &Scope<CertificatesPage>) -> Html {
    let filter = &component.filter;
    let selected_year = filter.year.value().to_string();
    let on_query = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetQuery(input.value())
    });
    let on_year = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetYear(select.value())
    });
    let on_legitimacy = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetLegitimacy(select.value())
    });

    html! {
        <div class="panel filters">
            <div class="filter-search">
                <label class="form-label">{ "Search Certificates" }</label>
                <input
                    class="form-input"
                    placeholder="Search by name, course, college, registration..."
                    value={component.query.clone()}
                    oninput={on_query}
                />
            </div>
            <div class="filter-select">
                <label class="form-label">{ "Year" }</label>
                <select class="form-input" onchange={on_year}>
                    <option value={YearFilter::ALL_VALUE} selected={filter.year == YearFilter::All}>{ "All Years" }</option>
                    { for year_options(&component.records).into_iter().map(|year| html! {
                        <option selected={year == selected_year} value={year.clone()}>{ year }</option>
                    }) }
                </select>
            </div>
            <div class="filter-select">
                <label class="form-label">{ "Status" }</label>
                <select class="form-input" onchange={on_legitimacy}>
                    { for LegitimacyFilter::OPTIONS.iter().map(|&option| html! {
                        <option value={option.value()} selected={option == filter.legitimacy}>{ option.label() }</option>
                    }) }
                </select>
            </div>
            <div class="segmented">
                { view_mode_button(component, link, ViewMode::Cards, "Cards") }
                { view_mode_button(component, link, ViewMode::Table, "Table") }
            </div>
        </div>
    }
}

fn view_mode_button(
    component: &CertificatesPage,
    link: &Scope<CertificatesPage>,
    mode: ViewMode,
    label: &'static str,
) -> Html {
    html! {
        <button
            class={classes!("segment", (component.view_mode == mode).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetViewMode(mode))}
        >
            { label }
        </button>
    }
}

fn build_charts(component: &CertificatesPage, summary: &Summary, link: &Scope<CertificatesPage>) -> Html {
    let records = &component.records;
    let chart = match component.chart_mode {
        ChartMode::Overview => {
            let split = legitimacy_split(summary);
            html! { <PieChart buckets={split.to_vec()} colors={Some(vec![LEGIT_COLOR, SUSPICIOUS_COLOR])} /> }
        }
        ChartMode::Trends => html! { <AreaChart points={timeline(records, local_offset())} /> },
        ChartMode::Comparison => html! {
            <BarChart buckets={compare_groups(records, component.compare_by, component.legit_only)} />
        },
    };

    let on_compare = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetCompareBy(select.value())
    });
    let on_legit_only = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetLegitOnly(input.checked())
    });

    html! {
        <div class="chart-section">
            <div class="panel chart-controls">
                <h3>{ "Chart Controls" }</h3>
                <div class="chart-modes">
                    { for ChartMode::ALL.iter().map(|&mode| html! {
                        <button
                            class={classes!("chart-mode", (component.chart_mode == mode).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetChartMode(mode))}
                        >
                            { mode.label() }
                        </button>
                    }) }
                </div>
                if component.chart_mode == ChartMode::Comparison {
                    <label class="form-label">{ "Compare By" }</label>
                    <select class="form-input" onchange={on_compare}>
                        { for CompareBy::OPTIONS.iter().map(|&by| html! {
                            <option value={by.value()} selected={by == component.compare_by}>{ by.label() }</option>
                        }) }
                    </select>
                }
                <label class="checkbox">
                    <input type="checkbox" checked={component.legit_only} onchange={on_legit_only} />
                    { "Only legitimate records in comparison" }
                </label>
            </div>
            <div class="panel chart-main">
                <h3>{ format!("{} Analytics", component.chart_mode.label()) }</h3>
                { chart }
            </div>
        </div>
    }
}

fn build_records(component: &CertificatesPage) -> Html {
    let visible = component.visible();
    let body = if component.loading {
        html! { <div class="loading">{ "Loading certificates..." }</div> }
    } else if visible.is_empty() {
        html! {
            <div class="empty-state">
                <p>{ "No certificates found matching your criteria" }</p>
                <p class="hint">{ "Try adjusting your search or filters" }</p>
            </div>
        }
    } else {
        let offset = local_offset();
        match component.view_mode {
            ViewMode::Cards => html! {
                <div class="card-grid">
                    { for visible.iter().map(|r| certificate_card(r, offset)) }
                </div>
            },
            ViewMode::Table => certificate_table(&visible, offset),
        }
    };

    html! {
        <div class="panel records">
            <div class="records-header">
                <h3>{ format!("Certificate Records ({})", format_count(visible.len())) }</h3>
                <span class="hint">
                    { format!("Showing {} of {} records", visible.len(), component.records.len()) }
                </span>
            </div>
            { body }
        </div>
    }
}

fn status_badge(record: &Certificate) -> Html {
    let (class, icon, label) = if record.is_legitimate() {
        ("verified", "check_circle", "Verified")
    } else {
        ("flagged", "cancel", "Flagged")
    };
    html! {
        <span class={classes!("status-badge", class)}>
            <i class="material-icons">{ icon }</i>
            { label }
        </span>
    }
}

fn score_class(score: f64) -> &'static str {
    if score > 0.8 {
        "score-high"
    } else if score > 0.6 {
        "score-mid"
    } else {
        "score-low"
    }
}

fn signature_score(record: &Certificate) -> Html {
    let Some(score) = record.signature_similarity_score else {
        return html! {};
    };
    let percent = (score * 100.0).round();
    html! {
        <div class="signature">
            <div class="signature-label">
                <span>{ "Signature Match" }</span>
                <span>{ format!("{}%", percent) }</span>
            </div>
            <div class="progress">
                <div class={classes!("progress-bar", score_class(score))}
                     style={format!("width: {}%", percent.clamp(0.0, 100.0))}></div>
            </div>
        </div>
    }
}

fn certificate_card(record: &Certificate, offset: chrono::FixedOffset) -> Html {
    let kd = &record.key_details;
    html! {
        <div class="certificate-card">
            <div class="card-status">{ status_badge(record) }</div>
            <h4 class="card-name">{ record.display_name().unwrap_or("Unknown").to_string() }</h4>
            <div class="card-line">
                <i class="material-icons">{ "school" }</i>
                { record.display_course().unwrap_or("Unknown Course").to_string() }
            </div>
            <div class="card-line muted">
                <i class="material-icons">{ "apartment" }</i>
                { kd.college.clone().unwrap_or_else(|| "Unknown Institution".to_string()) }
            </div>
            <div class="card-details">
                if let Some(year) = &kd.completion_year {
                    <span class="detail"><i class="material-icons">{ "event" }</i>{ year.clone() }</span>
                }
                if let Some(division) = &kd.division {
                    <span class="detail">{ format!("{} Division", division) }</span>
                }
                if let Some(reg) = &kd.registration_no {
                    <span class="detail mono wide">{ format!("Reg: {}", reg) }</span>
                }
            </div>
            { signature_score(record) }
            <div class="card-footer">
                <span>{ format!("Verified: {}", display_date(&record.timestamp, offset)) }</span>
                if kd.exists_in_db == Some(true) {
                    <span class="pill">{ "In Database" }</span>
                }
            </div>
        </div>
    }
}

fn certificate_table(records: &[&Certificate], offset: chrono::FixedOffset) -> Html {
    let dash = || "-".to_string();
    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Course" }</th>
                        <th>{ "College" }</th>
                        <th>{ "Year" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Signature Score" }</th>
                        <th>{ "Date" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().map(|r| {
                        let kd = &r.key_details;
                        html! {
                            <tr key={r.id.clone()}>
                                <td>
                                    <div class="strong">{ r.display_name().unwrap_or("Unknown").to_string() }</div>
                                    if let Some(reg) = &kd.registration_no {
                                        <div class="mono muted">{ reg.clone() }</div>
                                    }
                                </td>
                                <td>{ r.display_course().map(str::to_string).unwrap_or_else(dash) }</td>
                                <td>{ kd.college.clone().unwrap_or_else(dash) }</td>
                                <td>{ kd.completion_year.clone().unwrap_or_else(dash) }</td>
                                <td>{ status_badge(r) }</td>
                                <td>
                                    {
                                        r.signature_similarity_score
                                            .map(|s| format!("{}%", (s * 100.0).round()))
                                            .unwrap_or_else(dash)
                                    }
                                </td>
                                <td>{ display_date(&r.timestamp, offset) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
