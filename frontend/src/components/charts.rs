//! Small SVG charts for the certificate analytics panel.
//!
//! All three take precomputed data from `common::analytics` and only do
//! geometry. An empty input renders a placeholder instead of an empty frame.

use common::analytics::{Bucket, TimelinePoint};
use yew::prelude::*;

const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16",
];
pub const LEGIT_COLOR: &str = "#10b981";
pub const SUSPICIOUS_COLOR: &str = "#ef4444";

fn empty_chart() -> Html {
    html! { <div class="chart-empty">{ "No data to display" }</div> }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring segment between `start` and `end` radians, clockwise from 12 o'clock.
fn donut_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let offset = -std::f64::consts::FRAC_PI_2;
    let (a0, a1) = (start + offset, end + offset);
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, a0);
    let (ox1, oy1) = polar(cx, cy, outer, a1);
    let (ix1, iy1) = polar(cx, cy, inner, a1);
    let (ix0, iy0) = polar(cx, cy, inner, a0);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner} {inner} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub buckets: Vec<Bucket>,
    #[prop_or_default]
    pub colors: Option<Vec<&'static str>>,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let total: usize = props.buckets.iter().map(|b| b.value).sum();
    if total == 0 {
        return empty_chart();
    }
    let color = |i: usize| -> &'static str {
        props
            .colors
            .as_ref()
            .and_then(|c| c.get(i).copied())
            .unwrap_or(PALETTE[i % PALETTE.len()])
    };

    let (cx, cy, outer, inner) = (110.0, 110.0, 100.0, 60.0);
    let mut start = 0.0;
    let mut slices = Vec::new();
    for (i, bucket) in props.buckets.iter().enumerate() {
        if bucket.value == 0 {
            continue;
        }
        let share = bucket.value as f64 / total as f64;
        if bucket.value == total {
            // a single full slice cannot be drawn as an arc
            slices.push(html! {
                <>
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={outer.to_string()} fill={color(i)} />
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={inner.to_string()} fill="#fff" />
                </>
            });
            break;
        }
        let end = start + share * std::f64::consts::TAU;
        slices.push(html! {
            <path d={donut_segment(cx, cy, outer, inner, start, end)} fill={color(i)}>
                <title>{ format!("{}: {}", bucket.name, bucket.value) }</title>
            </path>
        });
        start = end;
    }

    html! {
        <div class="chart pie-chart">
            <svg viewBox="0 0 220 220" width="220" height="220">
                { for slices }
            </svg>
            <ul class="chart-legend">
                { for props.buckets.iter().enumerate().map(|(i, b)| html! {
                    <li>
                        <span class="legend-swatch" style={format!("background: {}", color(i))}></span>
                        { format!("{}: {} ({}%)", b.name, b.value, (b.value * 100 + total / 2) / total) }
                    </li>
                }) }
            </ul>
        </div>
    }
}

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 56.0;

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: usize, max: usize) -> f64 {
    PAD_TOP + plot_height() * (1.0 - value as f64 / max as f64)
}

fn y_axis(max: usize) -> Html {
    let ticks = [0, max / 2, max];
    html! {
        <g class="chart-axis">
            { for ticks.iter().map(|&t| {
                let y = y_for(t, max);
                html! {
                    <>
                        <line x1={PAD_LEFT.to_string()} x2={(WIDTH - PAD_RIGHT).to_string()}
                              y1={y.to_string()} y2={y.to_string()} stroke="#e5e7eb" />
                        <text x={(PAD_LEFT - 6.0).to_string()} y={(y + 4.0).to_string()}
                              text-anchor="end" font-size="11">{ t }</text>
                    </>
                }
            }) }
        </g>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaChartProps {
    pub points: Vec<TimelinePoint>,
}

/// Daily legitimate and suspicious counts as two overlaid areas.
#[function_component(AreaChart)]
pub fn area_chart(props: &AreaChartProps) -> Html {
    let points = &props.points;
    if points.is_empty() {
        return empty_chart();
    }
    let max = points.iter().map(|p| p.total).max().unwrap_or(0).max(1);
    let plot_width = WIDTH - PAD_LEFT - PAD_RIGHT;
    let x_for = |i: usize| {
        if points.len() == 1 {
            PAD_LEFT + plot_width / 2.0
        } else {
            PAD_LEFT + plot_width * i as f64 / (points.len() - 1) as f64
        }
    };
    let baseline = y_for(0, max);
    let area = |value: fn(&TimelinePoint) -> usize| {
        let mut d = format!("M {:.2} {:.2}", x_for(0), baseline);
        for (i, p) in points.iter().enumerate() {
            d.push_str(&format!(" L {:.2} {:.2}", x_for(i), y_for(value(p), max)));
        }
        d.push_str(&format!(" L {:.2} {:.2} Z", x_for(points.len() - 1), baseline));
        d
    };
    // keep roughly ten x labels regardless of the window length
    let step = points.len().div_ceil(10).max(1);

    html! {
        <div class="chart area-chart">
            <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} width="100%" height={HEIGHT.to_string()}>
                { y_axis(max) }
                <path d={area(|p| p.legitimate)} fill={LEGIT_COLOR} fill-opacity="0.35" stroke={LEGIT_COLOR} />
                <path d={area(|p| p.suspicious)} fill={SUSPICIOUS_COLOR} fill-opacity="0.35" stroke={SUSPICIOUS_COLOR} />
                { for points.iter().enumerate().filter(|(i, _)| i % step == 0).map(|(i, p)| html! {
                    <text x={x_for(i).to_string()} y={(baseline + 18.0).to_string()}
                          text-anchor="middle" font-size="11">{ p.label.clone() }</text>
                }) }
            </svg>
            <ul class="chart-legend inline">
                <li><span class="legend-swatch" style={format!("background: {LEGIT_COLOR}")}></span>{ "Legitimate" }</li>
                <li><span class="legend-swatch" style={format!("background: {SUSPICIOUS_COLOR}")}></span>{ "Suspicious" }</li>
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub buckets: Vec<Bucket>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let buckets = &props.buckets;
    if buckets.is_empty() {
        return empty_chart();
    }
    let max = buckets.iter().map(|b| b.value).max().unwrap_or(0).max(1);
    let slot = (WIDTH - PAD_LEFT - PAD_RIGHT) / buckets.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = y_for(0, max);

    html! {
        <div class="chart bar-chart">
            <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} width="100%" height={HEIGHT.to_string()}>
                { y_axis(max) }
                { for buckets.iter().enumerate().map(|(i, b)| {
                    let x = PAD_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
                    let y = y_for(b.value, max);
                    let label_x = x + bar_width / 2.0;
                    let label_y = baseline + 12.0;
                    html! {
                        <g>
                            <rect x={x.to_string()} y={y.to_string()}
                                  width={bar_width.to_string()} height={(baseline - y).to_string()}
                                  fill={PALETTE[i % PALETTE.len()]} rx="3">
                                <title>{ format!("{}: {}", b.name, b.value) }</title>
                            </rect>
                            <text x={label_x.to_string()} y={label_y.to_string()} font-size="11" text-anchor="end"
                                  transform={format!("rotate(-35 {label_x:.2} {label_y:.2})")}>
                                { b.name.clone() }
                            </text>
                        </g>
                    }
                }) }
            </svg>
        </div>
    }
}
