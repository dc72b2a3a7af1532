// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use fisheye::domain::{Media, MediaId, MediaKind, PhotographerId};
use fisheye::gallery::{Gallery, SortBy};
use fisheye::lightbox::Lightbox;
use fisheye::session::TabOrder;
use std::hint::black_box;

fn sample_media(count: u32) -> Vec<Media> {
    (0..count)
        .map(|id| Media {
            id: MediaId(id),
            photographer_id: PhotographerId(1),
            title: format!("Media {id}"),
            kind: if id % 5 == 0 {
                MediaKind::Video(format!("{id}.mp4"))
            } else {
                MediaKind::Image(format!("{id}.jpg"))
            },
            likes: (id * 7919) % 500,
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            price: 50,
            description: None,
        })
        .collect()
}

fn media_navigation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let mut tab_order = TabOrder::default();
    let mut gallery = Gallery::new(sample_media(500), SortBy::Popularity, &mut tab_order);
    let mut lightbox = Lightbox::new();
    let first = gallery.cards()[0].id();
    for effect in lightbox.open_media(&gallery, first) {
        gallery.apply(&effect);
    }

    group.bench_function("next_with_effects", |b| {
        b.iter(|| {
            for effect in lightbox.next(&gallery) {
                gallery.apply(black_box(&effect));
            }
        });
    });

    group.bench_function("open_by_id", |b| {
        let target = MediaId(250);
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            black_box(lightbox.open_media(&gallery, black_box(target)))
        });
    });

    group.bench_function("sort_by_title", |b| {
        let mut tab_order = TabOrder::default();
        let mut gallery = Gallery::new(sample_media(500), SortBy::Popularity, &mut tab_order);
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            let sort_by = if toggle { SortBy::Title } else { SortBy::Date };
            gallery.sort(sort_by, false).ok();
        });
    });

    group.finish();
}

criterion_group!(benches, media_navigation_benchmark);
criterion_main!(benches);
