use crate::components::empty_state::EmptyState;
use leptos::*;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const TICK_COUNT: usize = 5;
/// Share of each category slot left empty around its bars.
const GROUP_PADDING: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub width: f64,
    pub height: f64,
    pub y_max: Option<f64>,
    pub show_legend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            width: 640.0,
            height: 320.0,
            y_max: None,
            show_legend: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub series: String,
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub scale_max: f64,
    pub bars: Vec<BarRect>,
    pub ticks: Vec<AxisTick>,
    pub categories: Vec<CategoryLabel>,
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if !(value.is_finite() && value > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    let rounded = nice * magnitude;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

pub fn layout_bars(data: &ChartData, options: &ChartOptions) -> ChartLayout {
    let plot = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: (options.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
        height: (options.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
    };
    let data_max = data
        .datasets
        .iter()
        .flat_map(|dataset| dataset.values.iter().copied())
        .map(sanitize)
        .fold(0.0, f64::max);
    let scale_max = match options.y_max {
        Some(max) if max.is_finite() && max > 0.0 => max,
        _ => nice_ceiling(data_max),
    };

    let mut bars = Vec::new();
    let mut categories = Vec::with_capacity(data.labels.len());
    if !data.labels.is_empty() {
        let group_width = plot.width / data.labels.len() as f64;
        let bar_width = if data.datasets.is_empty() {
            0.0
        } else {
            group_width * (1.0 - GROUP_PADDING) / data.datasets.len() as f64
        };
        for (index, label) in data.labels.iter().enumerate() {
            let group_left = plot.left + group_width * index as f64;
            categories.push(CategoryLabel {
                text: label.clone(),
                x: group_left + group_width / 2.0,
            });
            for (series_index, dataset) in data.datasets.iter().enumerate() {
                let Some(raw) = dataset.values.get(index).copied() else {
                    continue;
                };
                let value = sanitize(raw);
                let height = plot.height * (value.min(scale_max) / scale_max);
                bars.push(BarRect {
                    x: group_left + group_width * GROUP_PADDING / 2.0 + bar_width * series_index as f64,
                    y: plot.bottom() - height,
                    width: bar_width,
                    height,
                    color: dataset.color.clone(),
                    series: dataset.label.clone(),
                    category: label.clone(),
                    value,
                });
            }
        }
    }

    let ticks = (0..=TICK_COUNT)
        .map(|step| {
            let ratio = step as f64 / TICK_COUNT as f64;
            AxisTick {
                value: scale_max * ratio,
                y: plot.bottom() - plot.height * ratio,
            }
        })
        .collect();

    ChartLayout {
        plot,
        scale_max,
        bars,
        ticks,
        categories,
    }
}

pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

#[component]
pub fn BarChart(
    #[prop(into)] data: MaybeSignal<ChartData>,
    #[prop(optional)] options: ChartOptions,
) -> impl IntoView {
    let title = options.title.clone();
    let aria_label = title.clone().unwrap_or_else(|| "Bar chart".to_string());
    let view_box = format!("0 0 {} {}", coord(options.width), coord(options.height));
    let show_legend = options.show_legend;

    view! {
        <figure class="w-full">
            {title.map(|title| view! {
                <figcaption class="mb-2 text-sm font-semibold text-fg">{title}</figcaption>
            })}
            {move || {
                let data = data.get();
                if data.is_empty() {
                    return view! { <EmptyState title="No data to display" /> }.into_view();
                }
                let layout = layout_bars(&data, &options);
                let plot = layout.plot;
                let legend = data
                    .datasets
                    .iter()
                    .map(|dataset| {
                        let swatch = format!("background-color: {}", dataset.color);
                        view! {
                            <li class="flex items-center gap-1">
                                <span class="inline-block h-3 w-3 rounded-sm" style=swatch></span>
                                {dataset.label.clone()}
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <svg
                        class="w-full h-auto text-fg-muted"
                        viewBox=view_box.clone()
                        role="img"
                        aria-label=aria_label.clone()
                    >
                        {layout.ticks.iter().map(|tick| view! {
                            <g class="chart-tick">
                                <line
                                    x1=coord(plot.left)
                                    x2=coord(plot.right())
                                    y1=coord(tick.y)
                                    y2=coord(tick.y)
                                    stroke="currentColor"
                                    stroke-opacity="0.15"
                                />
                                <text
                                    x=coord(plot.left - 6.0)
                                    y=coord(tick.y)
                                    text-anchor="end"
                                    dominant-baseline="middle"
                                    font-size="10"
                                    fill="currentColor"
                                >
                                    {format_tick(tick.value)}
                                </text>
                            </g>
                        }).collect_view()}
                        {layout.bars.iter().map(|bar| view! {
                            <g class="chart-bar">
                                <rect
                                    x=coord(bar.x)
                                    y=coord(bar.y)
                                    width=coord(bar.width)
                                    height=coord(bar.height)
                                    fill=bar.color.clone()
                                    data-series=bar.series.clone()
                                    data-category=bar.category.clone()
                                    data-value=format_tick(bar.value)
                                />
                            </g>
                        }).collect_view()}
                        {layout.categories.iter().map(|category| view! {
                            <g class="chart-category">
                                <text
                                    x=coord(category.x)
                                    y=coord(plot.bottom() + 16.0)
                                    text-anchor="middle"
                                    font-size="11"
                                    fill="currentColor"
                                >
                                    {category.text.clone()}
                                </text>
                            </g>
                        }).collect_view()}
                    </svg>
                    <Show when=move || show_legend>
                        <ul class="mt-2 flex flex-wrap gap-3 text-xs text-fg-muted">
                            {legend.clone()}
                        </ul>
                    </Show>
                }
                    .into_view()
            }}
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn dataset(label: &str, values: &[f64]) -> Dataset {
        Dataset {
            label: label.into(),
            values: values.to_vec(),
            color: "#2563eb".into(),
        }
    }

    fn data(labels: &[&str], datasets: Vec<Dataset>) -> ChartData {
        ChartData {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets,
        }
    }

    #[test]
    fn nice_ceiling_rounds_to_readable_steps() {
        assert_close(nice_ceiling(37.0), 50.0);
        assert_close(nice_ceiling(8.0), 10.0);
        assert_close(nice_ceiling(120.0), 200.0);
        assert_close(nice_ceiling(22.0), 25.0);
        assert_close(nice_ceiling(100.0), 100.0);
        assert_close(nice_ceiling(0.0), 1.0);
        assert_close(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn nice_ceiling_keeps_values_near_f64_max_finite() {
        assert_eq!(nice_ceiling(1.7e308), 1.7e308);
        assert_eq!(nice_ceiling(f64::MAX), f64::MAX);
    }

    #[test]
    fn huge_values_still_fill_the_plot() {
        let layout = layout_bars(
            &data(&["x", "y"], vec![dataset("s", &[1.7e308, 0.85e308])]),
            &ChartOptions::default(),
        );
        assert!(layout.scale_max.is_finite());
        assert_close(layout.bars[0].height, layout.plot.height);
        assert_close(layout.bars[1].height, layout.plot.height / 2.0);
        assert!(layout.ticks.iter().all(|tick| tick.value.is_finite()));
    }

    #[test]
    fn single_series_bars_scale_to_plot() {
        let layout = layout_bars(
            &data(&["Reading", "Numeracy"], vec![dataset("Score", &[10.0, 40.0])]),
            &ChartOptions::default(),
        );
        assert_close(layout.scale_max, 50.0);
        assert_eq!(layout.bars.len(), 2);

        // 640 wide minus margins leaves 576, so each category slot is 288.
        let first = &layout.bars[0];
        assert_close(first.width, 230.4);
        assert_close(first.x, 76.8);
        assert_close(first.height, 54.4);
        assert_close(first.y, 233.6);
        assert_eq!(first.category, "Reading");

        let second = &layout.bars[1];
        assert_close(second.x, 364.8);
        assert_close(second.height, 217.6);
    }

    #[test]
    fn grouped_series_share_a_category_slot() {
        let layout = layout_bars(
            &data(
                &["Term 1"],
                vec![dataset("2023", &[3.0]), dataset("2024", &[4.0])],
            ),
            &ChartOptions::default(),
        );
        assert_eq!(layout.bars.len(), 2);
        assert_close(layout.bars[0].width, 230.4);
        assert_close(layout.bars[1].x - layout.bars[0].x, 230.4);
        assert_eq!(layout.bars[1].series, "2024");
    }

    #[test]
    fn invalid_values_clamp_to_zero_and_missing_values_skip() {
        let layout = layout_bars(
            &data(
                &["a", "b", "c", "d"],
                vec![dataset("s", &[-5.0, f64::NAN, f64::INFINITY])],
            ),
            &ChartOptions::default(),
        );
        assert_eq!(layout.bars.len(), 3);
        assert!(layout.bars.iter().all(|bar| bar.height == 0.0 && bar.value == 0.0));
        assert_close(layout.scale_max, 1.0);
        assert_eq!(layout.categories.len(), 4);
    }

    #[test]
    fn explicit_y_max_clips_taller_bars() {
        let options = ChartOptions {
            y_max: Some(20.0),
            ..ChartOptions::default()
        };
        let layout = layout_bars(&data(&["x"], vec![dataset("s", &[30.0])]), &options);
        assert_close(layout.scale_max, 20.0);
        assert_close(layout.bars[0].height, layout.plot.height);
        assert_close(layout.bars[0].value, 30.0);
    }

    #[test]
    fn ticks_span_zero_to_scale_max() {
        let layout = layout_bars(&data(&["x"], vec![dataset("s", &[40.0])]), &ChartOptions::default());
        assert_eq!(layout.ticks.len(), TICK_COUNT + 1);
        assert_close(layout.ticks[0].value, 0.0);
        assert_close(layout.ticks[0].y, layout.plot.bottom());
        assert_close(layout.ticks[TICK_COUNT].value, 50.0);
        assert_close(layout.ticks[TICK_COUNT].y, layout.plot.top);
    }

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
