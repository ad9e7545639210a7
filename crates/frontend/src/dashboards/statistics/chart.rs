use contracts::stats::SeriesPoint;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PAD: f64 = 36.0;

/// Hand-drawn SVG line chart of the order-count series. Deliberately
/// minimal: one series, labels on the x axis, a max line on the y axis.
#[component]
pub fn LineChart(points: Vec<SeriesPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! {
            <p class="chart__empty">"Brak danych do wyświetlenia."</p>
        }
        .into_any();
    }

    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    let step = if points.len() > 1 {
        (WIDTH - 2.0 * PAD) / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x = |i: usize| PAD + step * i as f64;
    let y = |count: usize| HEIGHT - PAD - (count as f64 / max as f64) * (HEIGHT - 2.0 * PAD);

    let polyline = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x(i), y(p.count)))
        .collect::<Vec<_>>()
        .join(" ");

    // With many points only the first and last labels fit.
    let label_indices: Vec<usize> = if points.len() <= 8 {
        (0..points.len()).collect()
    } else {
        vec![0, points.len() - 1]
    };

    let dots = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <circle
                    class="chart__dot"
                    cx=format!("{:.1}", x(i))
                    cy=format!("{:.1}", y(p.count))
                    r="3"
                >
                    <title>{format!("{}: {}", p.label, p.count)}</title>
                </circle>
            }
        })
        .collect_view();

    let labels = label_indices
        .into_iter()
        .map(|i| {
            view! {
                <text
                    class="chart__label"
                    x=format!("{:.1}", x(i))
                    y=format!("{:.1}", HEIGHT - PAD + 16.0)
                    text-anchor="middle"
                >
                    {points[i].label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            role="img"
            aria-label="Wykres liczby zamówień"
        >
            <line
                class="chart__axis"
                x1=format!("{PAD}")
                y1=format!("{}", HEIGHT - PAD)
                x2=format!("{}", WIDTH - PAD)
                y2=format!("{}", HEIGHT - PAD)
            />
            <line
                class="chart__axis"
                x1=format!("{PAD}")
                y1=format!("{PAD}")
                x2=format!("{PAD}")
                y2=format!("{}", HEIGHT - PAD)
            />
            <text
                class="chart__label"
                x=format!("{}", PAD - 8.0)
                y=format!("{}", PAD + 4.0)
                text-anchor="end"
            >
                {max.to_string()}
            </text>
            <polyline class="chart__line" points=polyline fill="none" />
            {dots}
            {labels}
        </svg>
    }
    .into_any()
}
