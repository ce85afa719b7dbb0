// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use holo_video::domain::video::{RawMediaEvent, VideoIdentifier};
use holo_video::resolver::{self, ClientProfile};
use holo_video::video_player::{create_headless_player, PlayerProps};
use std::hint::black_box;

const SAFARI: &str = "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.4 Safari/605.1.15";

fn session_script() -> Vec<RawMediaEvent> {
    let mut events = vec![RawMediaEvent::Progress, RawMediaEvent::CanPlay, RawMediaEvent::Play];
    events.extend((1..=200).map(|i| RawMediaEvent::TimeUpdate {
        current_time_secs: f64::from(i) * 0.25,
    }));
    events.extend([RawMediaEvent::Pause, RawMediaEvent::Play, RawMediaEvent::Ended]);
    events
}

fn event_replay_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_replay");
    let script = session_script();

    group.bench_function("handle_event_session", |b| {
        b.iter(|| {
            let mut player = create_headless_player(PlayerProps::new("yoloholo-abc").autoplay(true));
            for event in script.iter().cloned() {
                black_box(player.handle_event(event));
            }
            black_box(player.status())
        });
    });

    group.bench_function("pump_session", |b| {
        b.iter(|| {
            let mut player = create_headless_player(PlayerProps::new("yoloholo-abc").autoplay(true));
            player.element().emit_all(script.iter().cloned()).unwrap();
            black_box(player.pump())
        });
    });

    group.finish();
}

fn resolve_benchmark(c: &mut Criterion) {
    let client = ClientProfile::from_user_agent(SAFARI);
    let id = VideoIdentifier::new("yoloholo-abc");

    c.bench_function("resolve_edited_safari", |b| {
        b.iter(|| black_box(resolver::resolve(black_box(&id), &client, None)));
    });
}

criterion_group!(benches, event_replay_benchmark, resolve_benchmark);
criterion_main!(benches);
