// Benchmark for month layout and event grouping
// Measures the work done on every render pass of the year widget

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tasti_calendar::models::appearance::WeekStart;
use tasti_calendar::models::event::CalendarEvent;
use tasti_calendar::models::settings::CalendarSettings;
use tasti_calendar::services::grouping::group_by_day;
use tasti_calendar::ui_egui::views::TastiYear;
use tasti_calendar::utils::date::MonthLayout;

fn sample_events(count: usize) -> Vec<CalendarEvent> {
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i * 7 % 28) as u32 + 1;
            let date = NaiveDate::from_ymd_opt(1950 + (i % 70) as i32, month, day).unwrap();
            CalendarEvent::new(date, format!("Event {}", i))
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("layout_year", |b| {
        b.iter(|| {
            for month in 1..=12 {
                let layout = MonthLayout::new(black_box(2024), month, WeekStart::Monday).unwrap();
                black_box(layout.visible_cells());
            }
        });
    });
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_day");

    for count in [10, 100, 1000] {
        let events = sample_events(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| group_by_day(black_box(events.clone())));
        });
    }

    group.finish();
}

fn bench_render_year(c: &mut Criterion) {
    let settings = CalendarSettings {
        week_start: Some(WeekStart::Monday),
        ..Default::default()
    };
    let events = sample_events(500);
    let mut year = TastiYear::new(&settings);

    c.bench_function("render_year_500_events", |b| {
        b.iter(|| year.render_year(black_box(2024), Some(events.as_slice()), None));
    });
}

criterion_group!(benches, bench_layout, bench_grouping, bench_render_year);
criterion_main!(benches);
