// SVG charts for grouped complaint counts, with a hover tooltip.
use railease_shared::GroupCount;
use railease_shared::chart::{
    BAR_COLOR, ChartFrame, LINE_COLOR, axis_ticks, bar_lengths, line_points, palette_color,
    pie_slices,
};
use yew::prelude::*;

/// Label shown for a bucket. Records with an empty grouping field are still
/// counted, under the empty key; only the display changes.
pub fn bucket_label(key: &str) -> &str {
    if key.is_empty() { "(not set)" } else { key }
}

#[derive(Properties, PartialEq)]
struct ChartTooltipProps {
    label: AttrValue,
    count: usize,
}

#[function_component(ChartTooltip)]
fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    html! {
        <div class="absolute top-2 right-2 bg-white border border-gray-200 rounded-lg shadow-md px-3 py-2 text-sm pointer-events-none">
            <div class="font-medium text-gray-900">{&props.label}</div>
            <div class="text-gray-600">{"Count: "}{props.count}</div>
        </div>
    }
}

#[function_component(EmptyChart)]
fn empty_chart() -> Html {
    html! {
        <div class="h-48 flex items-center justify-center text-gray-400 text-sm">
            {"No complaint data to display"}
        </div>
    }
}

/// Hover state shared by every chart: which bucket the pointer is over.
#[hook]
fn use_hovered() -> (Option<usize>, Callback<Option<usize>>) {
    let hovered = use_state(|| None::<usize>);
    let set = {
        let hovered = hovered.clone();
        Callback::from(move |index: Option<usize>| hovered.set(index))
    };
    (*hovered, set)
}

fn tooltip_for(groups: &[GroupCount], hovered: Option<usize>) -> Option<Html> {
    let group = groups.get(hovered?)?;
    Some(html! {
        <ChartTooltip label={bucket_label(&group.key).to_string()} count={group.count} />
    })
}

fn hover_callbacks(
    set: &Callback<Option<usize>>,
    index: usize,
) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = set.reform(move |_: MouseEvent| Some(index));
    let leave = set.reform(|_: MouseEvent| None);
    (enter, leave)
}

// ===== Pie =====

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub groups: Vec<GroupCount>,
    /// Fill per group; groups past the end fall back to the palette.
    #[prop_or_default]
    pub colors: Vec<String>,
    #[prop_or(250.0)]
    pub size: f64,
    #[prop_or_default]
    pub show_labels: bool,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let (hovered, set_hovered) = use_hovered();

    if props.groups.is_empty() {
        return html! { <EmptyChart /> };
    }

    let size = props.size;
    let center = size / 2.0;
    let radius = size * 0.4;
    let slices = pie_slices(&props.groups);

    html! {
        <div class="relative mx-auto" style={format!("width: {}px; height: {}px;", size, size)}>
            <svg width={size.to_string()} height={size.to_string()} viewBox={format!("0 0 {} {}", size, size)}>
                { for slices.iter().enumerate().map(|(i, slice)| {
                    let fill = props
                        .colors
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| palette_color(i).to_string());
                    let (onmouseenter, onmouseleave) = hover_callbacks(&set_hovered, i);
                    let (lx, ly) = slice.label_point(center, center, radius, 0.65);

                    html! {
                        <g>
                            <path
                                d={slice.path(center, center, radius)}
                                fill={fill}
                                stroke="#ffffff"
                                stroke-width="1"
                                {onmouseenter}
                                {onmouseleave}
                            />
                            if props.show_labels {
                                <text
                                    x={format!("{:.1}", lx)}
                                    y={format!("{:.1}", ly)}
                                    text-anchor="middle"
                                    dominant-baseline="middle"
                                    font-size="12"
                                    fill="#ffffff"
                                    pointer-events="none"
                                >
                                    {slice.count}
                                </text>
                            }
                        </g>
                    }
                })}
            </svg>
            { for tooltip_for(&props.groups, hovered) }
        </div>
    }
}

// ===== Line =====

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub groups: Vec<GroupCount>,
    #[prop_or(600.0)]
    pub width: f64,
    #[prop_or(300.0)]
    pub height: f64,
    #[prop_or(AttrValue::Static(LINE_COLOR))]
    pub color: AttrValue,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let (hovered, set_hovered) = use_hovered();

    if props.groups.is_empty() {
        return html! { <EmptyChart /> };
    }

    let frame = ChartFrame {
        width: props.width,
        height: props.height,
        margin: 40.0,
    };
    let points = line_points(&props.groups, frame);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    // Horizontal grid only.
    let grid = (0..=4).map(|step| {
        let y = frame.margin + frame.plot_height() * step as f64 / 4.0;
        html! {
            <line
                x1={format!("{:.1}", frame.margin)}
                x2={format!("{:.1}", frame.margin + frame.plot_width())}
                y1={format!("{:.1}", y)}
                y2={format!("{:.1}", y)}
                stroke="#e5e7eb"
            />
        }
    });

    html! {
        <div class="relative w-full overflow-x-auto">
            <svg width={props.width.to_string()} height={props.height.to_string()} viewBox={format!("0 0 {} {}", props.width, props.height)}>
                { for grid }
                <polyline points={polyline} fill="none" stroke={props.color.clone()} stroke-width="2" />
                { for points.iter().zip(props.groups.iter()).enumerate().map(|(i, ((x, y), group))| {
                    let (onmouseenter, onmouseleave) = hover_callbacks(&set_hovered, i);
                    let radius = if hovered == Some(i) { "6" } else { "4" };
                    html! {
                        <g>
                            <circle
                                cx={format!("{:.1}", x)}
                                cy={format!("{:.1}", y)}
                                r={radius}
                                fill="#ffffff"
                                stroke={props.color.clone()}
                                stroke-width="2"
                                {onmouseenter}
                                {onmouseleave}
                            />
                            <text
                                x={format!("{:.1}", x)}
                                y={format!("{:.1}", frame.bottom() + 20.0)}
                                text-anchor="middle"
                                font-size="11"
                                fill="#6b7280"
                            >
                                {bucket_label(&group.key)}
                            </text>
                        </g>
                    }
                })}
            </svg>
            { for tooltip_for(&props.groups, hovered) }
        </div>
    }
}

// ===== Horizontal bar =====

const BAR_ROW_HEIGHT: f64 = 32.0;
const BAR_LABEL_WIDTH: f64 = 120.0;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub groups: Vec<GroupCount>,
    #[prop_or(600.0)]
    pub width: f64,
    #[prop_or(AttrValue::Static(BAR_COLOR))]
    pub color: AttrValue,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let (hovered, set_hovered) = use_hovered();

    if props.groups.is_empty() {
        return html! { <EmptyChart /> };
    }

    let margin = 20.0;
    let axis_height = 24.0;
    let height = margin * 2.0 + axis_height + BAR_ROW_HEIGHT * props.groups.len() as f64;
    let span = (props.width - BAR_LABEL_WIDTH - margin * 2.0).max(0.0);
    let axis_y = height - margin - axis_height;

    let max = props.groups.iter().map(|g| g.count).max().unwrap_or(0);
    let ticks = axis_ticks(max);
    let axis_max = ticks.last().copied().unwrap_or(0).max(1);
    // Bars share the axis scale, which may run past the largest count.
    let lengths = bar_lengths(&props.groups, span * max as f64 / axis_max as f64);
    let left = BAR_LABEL_WIDTH + margin;

    html! {
        <div class="relative w-full overflow-x-auto">
            <svg width={props.width.to_string()} height={height.to_string()} viewBox={format!("0 0 {} {}", props.width, height)}>
                { for props.groups.iter().zip(lengths.iter()).enumerate().map(|(i, (group, length))| {
                    let (onmouseenter, onmouseleave) = hover_callbacks(&set_hovered, i);
                    let top = margin + BAR_ROW_HEIGHT * i as f64;
                    let opacity = if hovered == Some(i) { "0.8" } else { "1" };
                    html! {
                        <g>
                            <text
                                x={format!("{:.1}", left - 8.0)}
                                y={format!("{:.1}", top + BAR_ROW_HEIGHT / 2.0)}
                                text-anchor="end"
                                dominant-baseline="middle"
                                font-size="12"
                                fill="#374151"
                            >
                                {bucket_label(&group.key)}
                            </text>
                            <rect
                                x={format!("{:.1}", left)}
                                y={format!("{:.1}", top + 4.0)}
                                width={format!("{:.1}", length)}
                                height={format!("{:.1}", BAR_ROW_HEIGHT - 8.0)}
                                fill={props.color.clone()}
                                fill-opacity={opacity}
                                {onmouseenter}
                                {onmouseleave}
                            />
                        </g>
                    }
                })}

                // Value axis
                <line
                    x1={format!("{:.1}", left)}
                    x2={format!("{:.1}", left + span)}
                    y1={format!("{:.1}", axis_y)}
                    y2={format!("{:.1}", axis_y)}
                    stroke="#9ca3af"
                />
                { for ticks.iter().map(|tick| {
                    let x = left + span * *tick as f64 / axis_max as f64;
                    html! {
                        <text
                            x={format!("{:.1}", x)}
                            y={format!("{:.1}", axis_y + 16.0)}
                            text-anchor="middle"
                            font-size="11"
                            fill="#6b7280"
                        >
                            {*tick}
                        </text>
                    }
                })}
            </svg>
            { for tooltip_for(&props.groups, hovered) }
        </div>
    }
}
