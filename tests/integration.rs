// SPDX-License-Identifier: MPL-2.0
use holo_video::config::{self, Config, PlayerConfig};
use holo_video::domain::video::{
    Intent, PlaybackIcon, PlaybackStatus, RawMediaEvent, ScreenMode,
};
use holo_video::render::Surface;
use holo_video::resolver::{AssetResolver, ClientProfile};
use holo_video::video_player::{
    Callbacks, HeadlessMediaElement, MediaCommand, Notice, PlayerProps, VideoPlayer,
};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

const SAFARI: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 Version/17.4 Mobile/15E148 Safari/604.1";
const CHROME: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/124.0.0.0 Safari/537.36";

#[derive(Default)]
struct Recorded {
    activity: Vec<Intent>,
    ended: usize,
    first_load: usize,
    errors: usize,
}

fn recorded_player(
    props: PlayerProps,
    client: ClientProfile,
) -> (VideoPlayer<HeadlessMediaElement>, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let (a, e, f, r) = (
        recorded.clone(),
        recorded.clone(),
        recorded.clone(),
        recorded.clone(),
    );
    let callbacks = Callbacks::new()
        .on_activity(move |intent| a.borrow_mut().activity.push(intent))
        .on_ended(move || e.borrow_mut().ended += 1)
        .on_first_load(move || f.borrow_mut().first_load += 1)
        .on_error(move |_| r.borrow_mut().errors += 1);

    let player = VideoPlayer::mount(
        props,
        AssetResolver::default(),
        client,
        HeadlessMediaElement::new(),
    )
    .with_callbacks(callbacks);
    (player, recorded)
}

#[test]
fn edited_video_on_chrome_plays_webm_after_click() {
    let (mut player, recorded) = recorded_player(
        PlayerProps::new("yoloholo-abc"),
        ClientProfile::from_user_agent(CHROME),
    );

    assert_eq!(
        player.urls().source.as_deref(),
        Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc.webm")
    );
    assert_eq!(
        player.urls().thumbnail.as_deref(),
        Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc-thumb.webp")
    );

    player.observe_first_load();
    let view = player.render();
    let widget = view.widget().expect("thumbnail widget");
    assert!(matches!(widget.surface, Surface::Thumbnail { .. }));
    assert_eq!(widget.overlay.icon, PlaybackIcon::Start);

    player.activate_thumbnail();
    assert_eq!(player.screen(), ScreenMode::Player);
    assert_eq!(player.icon(), PlaybackIcon::None);
    assert_eq!(player.element().play_requests(), 1);

    player.element().emit(RawMediaEvent::Play).unwrap();
    player.pump();
    assert_eq!(player.icon(), PlaybackIcon::Stop);

    let recorded = recorded.borrow();
    assert_eq!(recorded.first_load, 1);
    assert_eq!(recorded.activity, vec![Intent::Play]);
}

#[test]
fn edited_video_on_safari_plays_mov() {
    let (player, _) = recorded_player(
        PlayerProps::new("yoloholo-abc"),
        ClientProfile::from_user_agent(SAFARI),
    );
    assert_eq!(
        player.urls().source.as_deref(),
        Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc.mov")
    );
}

#[test]
fn raw_video_is_mp4_for_every_client() {
    for ua in [SAFARI, CHROME] {
        let (player, _) = recorded_player(
            PlayerProps::new("yoloholo-raw-abc"),
            ClientProfile::from_user_agent(ua),
        );
        assert_eq!(
            player.urls().source.as_deref(),
            Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-raw-abc.mp4")
        );
    }

    let (player, _) = recorded_player(
        PlayerProps::new("yoloholo-raw-abc").extension("mov"),
        ClientProfile::default(),
    );
    assert!(player
        .urls()
        .source
        .as_deref()
        .is_some_and(|s| s.ends_with("yoloholo-raw-abc.mov")));
}

#[test]
fn unplayable_identifier_renders_nothing_and_stays_silent() {
    let (mut player, recorded) = recorded_player(
        PlayerProps::new("not-a-real-id").autoplay(true),
        ClientProfile::default(),
    );

    assert!(player.urls().source.is_none());
    assert!(player.urls().thumbnail.is_none());
    assert!(player.render().is_empty());

    player.observe_first_load();
    player.activate_thumbnail();
    player.toggle_player();
    player.handle_event(RawMediaEvent::Ended);

    assert!(player.element().commands().is_empty());
    let recorded = recorded.borrow();
    assert_eq!(recorded.first_load, 0);
    assert!(recorded.activity.is_empty());
    assert_eq!(recorded.ended, 0);
}

#[test]
fn autoplay_sequence_derives_expected_statuses() {
    let (mut player, recorded) = recorded_player(
        PlayerProps::new("yoloholo-abc").autoplay(true),
        ClientProfile::default(),
    );
    assert_eq!(player.screen(), ScreenMode::Player);

    let events = [
        RawMediaEvent::Progress,
        RawMediaEvent::CanPlay,
        RawMediaEvent::Play,
        RawMediaEvent::Pause,
        RawMediaEvent::Play,
        RawMediaEvent::Ended,
    ];
    let statuses: Vec<PlaybackStatus> = events
        .into_iter()
        .map(|event| {
            player.handle_event(event);
            player.status()
        })
        .collect();

    assert_eq!(
        statuses,
        vec![
            PlaybackStatus::Loading,
            PlaybackStatus::Loading,
            PlaybackStatus::Playing,
            PlaybackStatus::Paused,
            PlaybackStatus::Playing,
            PlaybackStatus::Ended,
        ]
    );
    assert_eq!(player.icon(), PlaybackIcon::Replay);
    assert_eq!(recorded.borrow().ended, 1);
    // Autoplay never needs an explicit play request.
    assert_eq!(player.element().play_requests(), 0);
}

#[test]
fn same_events_yield_same_statuses() {
    let script = [
        RawMediaEvent::Progress,
        RawMediaEvent::Play,
        RawMediaEvent::TimeUpdate {
            current_time_secs: 1.0,
        },
        RawMediaEvent::Pause,
        RawMediaEvent::Ended,
    ];

    let run = || {
        let (mut player, _) = recorded_player(
            PlayerProps::new("yoloholo-abc").autoplay(true),
            ClientProfile::default(),
        );
        player.element().emit_all(script.clone()).unwrap();
        player.pump();
        (player.state(), player.status(), player.icon())
    };

    assert_eq!(run(), run());
}

#[test]
fn replay_after_ended_fires_ended_again() {
    let (mut player, recorded) = recorded_player(
        PlayerProps::new("yoloholo-abc").autoplay(true),
        ClientProfile::default(),
    );
    for event in [RawMediaEvent::Play, RawMediaEvent::Ended] {
        player.handle_event(event);
    }

    assert_eq!(player.toggle_player(), Some(Notice::Activity(Intent::Play)));
    for event in [RawMediaEvent::Play, RawMediaEvent::Ended, RawMediaEvent::Ended] {
        player.handle_event(event);
    }

    assert_eq!(recorded.borrow().ended, 2);
}

#[test]
fn teardown_stops_everything() {
    let (mut player, recorded) = recorded_player(
        PlayerProps::new("yoloholo-abc").autoplay(true),
        ClientProfile::default(),
    );
    player.element().emit(RawMediaEvent::Play).unwrap();
    let sender = player.element().event_sender().cloned().expect("subscribed");

    player.unmount();

    assert!(sender.send(RawMediaEvent::Ended).is_err());
    assert!(player.pump().is_empty());
    assert_eq!(player.status(), PlaybackStatus::Loading);
    assert_eq!(recorded.borrow().ended, 0);
    assert_eq!(
        player.element().commands().last(),
        Some(&MediaCommand::Unsubscribe)
    );
}

#[test]
fn config_round_trip_feeds_props() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        player: PlayerConfig {
            autoplay: Some(true),
            height: Some("180px".to_string()),
            ..PlayerConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let props = PlayerProps::from_config("yoloholo-abc", &loaded);
    assert!(props.autoplay);
    assert_eq!(
        props.height,
        holo_video::domain::video::Dimension::Pixels(180.0)
    );

    dir.close().expect("Failed to close temporary directory");
}
