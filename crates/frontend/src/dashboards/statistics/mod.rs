//! Statistics view: leaderboard, total count and the time-bucketed chart.
//!
//! Everything shown here is re-derived from the order cache by the pure
//! aggregators in `contracts::stats`; this module only renders.

mod chart;

use contracts::stats::{self, Bucket};
use leptos::prelude::*;

use crate::domain::orders::store::use_orders;
use crate::shared::icons::icon;
use chart::LineChart;

fn rank_icon(rank: usize) -> AnyView {
    match rank {
        1 => view! { <span class="leaderboard__trophy leaderboard__trophy--gold">{icon("trophy")}</span> }.into_any(),
        2 => view! { <span class="leaderboard__trophy leaderboard__trophy--silver">{icon("trophy")}</span> }.into_any(),
        3 => view! { <span class="leaderboard__trophy leaderboard__trophy--bronze">{icon("trophy")}</span> }.into_any(),
        _ => view! { <span class="leaderboard__rank">{rank}</span> }.into_any(),
    }
}

#[component]
fn BucketButton(
    bucket: Bucket,
    label: &'static str,
    selected: ReadSignal<Bucket>,
    set_selected: WriteSignal<Bucket>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if selected.get() == bucket {
                    "bucket-switch__btn bucket-switch__btn--active"
                } else {
                    "bucket-switch__btn"
                }
            }
            on:click=move |_| set_selected.set(bucket)
        >
            {label}
        </button>
    }
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let store = use_orders();
    let (bucket, set_bucket) = signal(Bucket::Day);

    let leaderboard = Memo::new(move |_| store.all_orders.with(|cache| stats::leaderboard(cache)));
    let total = Memo::new(move |_| store.all_orders.with(|cache| stats::total(cache)));
    let series = Memo::new(move |_| {
        let bucket = bucket.get();
        store.all_orders.with(|cache| stats::series(cache, bucket))
    });

    view! {
        <div class="stats-grid">
            <div class="card leaderboard">
                <div class="card__heading">
                    {icon("poll")}
                    <h2 class="card__title">"Mistrzowie Bedasa"</h2>
                </div>
                <ol class="leaderboard__list">
                    {move || {
                        leaderboard
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <li class="leaderboard__row">
                                        <div class="leaderboard__who">
                                            {rank_icon(index + 1)}
                                            <span class="leaderboard__name">{entry.name}</span>
                                        </div>
                                        <div class="leaderboard__score">
                                            <span class="leaderboard__count">{entry.count}</span>
                                            <span class="leaderboard__unit">"x 🌯"</span>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </div>

            <div class="stats-grid__side">
                <div class="card stats-total">
                    <h3 class="stats-total__label">"Całkowita liczba zamówionych kebabów"</h3>
                    <p class="stats-total__value">{move || total.get()}</p>
                </div>

                <div class="card stats-chart">
                    <div class="stats-chart__header">
                        <h3 class="card__title">"Zjedzone kebaby"</h3>
                        <div class="bucket-switch">
                            <BucketButton
                                bucket=Bucket::Day
                                label="Dzień"
                                selected=bucket
                                set_selected=set_bucket
                            />
                            <BucketButton
                                bucket=Bucket::Week
                                label="Tydzień"
                                selected=bucket
                                set_selected=set_bucket
                            />
                            <BucketButton
                                bucket=Bucket::Month
                                label="Miesiąc"
                                selected=bucket
                                set_selected=set_bucket
                            />
                        </div>
                    </div>
                    {move || view! { <LineChart points=series.get() /> }}
                </div>
            </div>
        </div>
    }
}
