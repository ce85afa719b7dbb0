// SPDX-License-Identifier: MPL-2.0
//! `holo-video` resolves a video identifier and replays a scripted sequence
//! of media events against a headless widget.

use std::path::PathBuf;
use std::process::ExitCode;

use holo_video::config::{self, Config};
use holo_video::diagnostics::DiagnosticsCollector;
use holo_video::domain::video::RawMediaEvent;
use holo_video::error::{Error, Result};
use holo_video::media::ThumbnailFetcher;
use holo_video::resolver::{AssetResolver, ClientProfile};
use holo_video::video_player::{
    CanPlayPolicy, HeadlessMediaElement, Notice, PlayerProps, VideoPlayer,
};

const HELP: &str = "\
holo-video: resolve a video identifier and replay media events

USAGE:
  holo-video [OPTIONS] <VIDEO_ID>

OPTIONS:
  --config PATH          Read settings from PATH instead of the user config
  --user-agent UA        Client user agent used to pick the container
  --extension EXT        Container extension for raw uploads
  --autoplay             Start on the player screen
  --reveal-on-canplay    Show the player as soon as media can play
  --events LIST          Comma-separated events, e.g. progress,canplay,play
                         (use `click` for a user click, `timeupdate@2.5`,
                         `error:2`)
  --diagnostics          Print a JSON diagnostics report at the end
                         (also enabled by `[diagnostics] enabled = true`)
  --fetch-thumbnail      Download the thumbnail
  -h, --help             Print this help
";

struct Args {
    config: Option<PathBuf>,
    user_agent: Option<String>,
    extension: Option<String>,
    autoplay: bool,
    reveal_on_canplay: bool,
    events: Vec<Step>,
    diagnostics: bool,
    fetch_thumbnail: bool,
    video_id: String,
}

/// One scripted step.
enum Step {
    Click,
    Event(RawMediaEvent),
}

fn parse_steps(list: &str) -> Result<Vec<Step>> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.eq_ignore_ascii_case("click") {
                Ok(Step::Click)
            } else {
                token
                    .parse::<RawMediaEvent>()
                    .map(Step::Event)
                    .map_err(|err| Error::Config(err.to_string()))
            }
        })
        .collect()
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let cli_error = |err: pico_args::Error| Error::Config(err.to_string());
    let events: Option<String> = args.opt_value_from_str("--events").map_err(cli_error)?;

    let parsed = Args {
        config: args.opt_value_from_str("--config").map_err(cli_error)?,
        user_agent: args.opt_value_from_str("--user-agent").map_err(cli_error)?,
        extension: args.opt_value_from_str("--extension").map_err(cli_error)?,
        autoplay: args.contains("--autoplay"),
        reveal_on_canplay: args.contains("--reveal-on-canplay"),
        events: events.as_deref().map(parse_steps).transpose()?.unwrap_or_default(),
        diagnostics: args.contains("--diagnostics"),
        fetch_thumbnail: args.contains("--fetch-thumbnail"),
        video_id: args.free_from_str().map_err(cli_error)?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(parsed))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice {
            Notice::Activity(intent) => println!("  -> activity: {intent}"),
            Notice::Ended => println!("  -> ended"),
            Notice::FirstLoad => println!("  -> first load"),
            Notice::Error(err) => println!("  -> error: {err}"),
        }
    }
}

fn print_state(label: &str, player: &VideoPlayer<HeadlessMediaElement>) {
    println!(
        "{label:<16} screen={:<9} state={:<10} status={:<7} icon={}",
        player.screen().as_str(),
        player.state().as_str(),
        player.status().as_str(),
        player.icon().as_str()
    );
}

fn fetch_thumbnail(url: &str, user_agent: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let fetcher = ThumbnailFetcher::new(user_agent)?;
    runtime.block_on(fetcher.fetch(url))?;
    println!("thumbnail: fetched {url}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;

    let user_agent = args
        .user_agent
        .clone()
        .or_else(|| config.resolver.user_agent.clone());
    let client = user_agent
        .as_deref()
        .map(ClientProfile::from_user_agent)
        .unwrap_or_default();
    let resolver = config
        .resolver
        .cdn_base
        .as_deref()
        .map(AssetResolver::new)
        .unwrap_or_default();

    let mut props = PlayerProps::from_config(args.video_id.as_str(), &config);
    if args.autoplay {
        props.autoplay = true;
    }
    if args.reveal_on_canplay {
        props.canplay_policy = CanPlayPolicy::RevealPlayer;
    }
    if let Some(extension) = args.extension {
        props.extension = Some(extension);
    }

    let mut collector = (args.diagnostics || config.diagnostics.is_enabled())
        .then(|| DiagnosticsCollector::new(config.diagnostics.capacity()));

    let mut player = VideoPlayer::mount(props, resolver, client, HeadlessMediaElement::new());
    if let Some(collector) = &collector {
        player.set_diagnostics(collector.handle());
    }

    println!("video:     {}", player.video_id());
    println!(
        "source:    {}",
        player.urls().source.as_deref().unwrap_or("-")
    );
    println!(
        "thumbnail: {}",
        player.urls().thumbnail.as_deref().unwrap_or("-")
    );
    if !player.is_valid() {
        println!("not a playable identifier, nothing to render");
        return Ok(());
    }

    print_notices(player.observe_first_load().as_slice());
    print_state("mount", &player);

    for step in args.events {
        match step {
            Step::Click => {
                let notice = player
                    .activate_thumbnail()
                    .or_else(|| player.toggle_player());
                print_state("click", &player);
                print_notices(notice.as_slice());
            }
            Step::Event(event) => {
                let label = event.name();
                if player.element().emit(event).is_err() {
                    log::warn!("element detached, stopping replay");
                    break;
                }
                let notices = player.pump();
                print_state(label, &player);
                print_notices(&notices);
            }
        }
    }
    player.unmount();

    if args.fetch_thumbnail {
        if let Some(url) = player.urls().thumbnail.clone() {
            if let Err(err) = fetch_thumbnail(&url, user_agent.as_deref()) {
                eprintln!("thumbnail: {err}");
            }
        }
    }

    if let Some(collector) = collector.as_mut() {
        collector.process_pending();
        let report = collector
            .export_json()
            .map_err(|err| Error::Io(err.to_string()))?;
        println!("{report}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("holo-video: {err}");
            ExitCode::FAILURE
        }
    }
}
