#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::{io::Read, num::NonZeroUsize, sync::Arc};

use druid::{
    im::Vector,
    widget::{CrossAxisAlignment, Flex, Label, Scroll},
    AppDelegate, AppLauncher, Command, Data, DelegateCtx, Env, ExtEventSink, Handled, ImageBuf,
    Lens, Target, Widget, WidgetExt, WindowDesc,
};
use env_logger::Builder;
use lru::LruCache;
use parking_lot::Mutex;
use threadpool::ThreadPool;

use cover_grid::{
    cmd,
    data::{Album, Artist, CoverGridData, Nav, Playlist, SubtitleKind},
    error::Error,
    ui::{grid_widget, theme, GridDisplay},
    widget::{remote_image, ScrollToTop},
};

const ENV_LOG: &str = "COVER_GRID_LOG";
const ENV_LOG_STYLE: &str = "COVER_GRID_LOG_STYLE";

#[derive(Clone, Data, Lens)]
struct AppState {
    route: Arc<str>,
    new_albums: CoverGridData,
    playlists: CoverGridData,
    artists: CoverGridData,
    loading: CoverGridData,
}

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        env_logger::Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let state = AppState {
        route: "/".into(),
        new_albums: CoverGridData::albums(sample_albums()),
        playlists: CoverGridData::playlists(sample_playlists()),
        artists: CoverGridData::artists(sample_artists()),
        loading: CoverGridData::loading(),
    };

    let window = WindowDesc::new(root_widget())
        .title("Cover Grid")
        .window_size((1000.0, 800.0));

    AppLauncher::with_window(window)
        .configure_env(|env, _state| theme::setup(env))
        .delegate(Delegate::new())
        .launch(state)
        .expect("Application launch");
}

fn root_widget() -> impl Widget<AppState> {
    let route = Label::dynamic(|state: &AppState, _| format!("Route: {}", state.route))
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let content = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(ScrollToTop)
        .with_child(route)
        .with_default_spacer()
        .with_child(
            grid_widget(
                GridDisplay::new()
                    .with_title("New Albums")
                    .with_subtitle(SubtitleKind::TypeReleaseYear)
                    .with_see_more(Nav::Home)
                    .on_navigate(|| log::debug!("leaving the home view")),
            )
            .lens(AppState::new_albums),
        )
        .with_spacer(theme::grid(4.0))
        .with_child(
            grid_widget(
                GridDisplay::new()
                    .with_title("Recommended Playlists")
                    .with_subtitle(SubtitleKind::Copywriter),
            )
            .lens(AppState::playlists),
        )
        .with_spacer(theme::grid(4.0))
        .with_child(
            grid_widget(GridDisplay::new().with_title("Artists")).lens(AppState::artists),
        )
        .with_spacer(theme::grid(4.0))
        .with_child(
            grid_widget(GridDisplay::new().with_title("Daily Picks").with_rows(1))
                .lens(AppState::loading),
        )
        .padding(theme::grid(3.0));

    Scroll::new(content).vertical().expand_width()
}

struct Delegate {
    image_pool: ThreadPool,
    images: Arc<Mutex<LruCache<Arc<str>, ImageBuf>>>,
}

impl Delegate {
    fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 8;
        const IMAGE_CACHE_SIZE: usize = 256;

        Self {
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
            images: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(IMAGE_CACHE_SIZE).unwrap(),
            ))),
        }
    }

    fn command_image(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        if let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() {
            let sink = ctx.get_external_handle();
            let cached = self.images.lock().get(&location).cloned();
            if let Some(image_buf) = cached {
                provide_image(&sink, target, location, image_buf);
            } else {
                let images = self.images.clone();
                self.image_pool.execute(move || match fetch_image(&location) {
                    Ok(image_buf) => {
                        images.lock().put(location.clone(), image_buf.clone());
                        provide_image(&sink, target, location, image_buf);
                    }
                    Err(err) => {
                        log::error!("failed to load image {}: {}", location, err);
                    }
                });
            }
            Handled::Yes
        } else {
            Handled::No
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        command: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(nav) = command.get(cmd::NAVIGATE) {
            data.route = nav.route().into();
            log::info!("navigating to {}", data.route);
            Handled::Yes
        } else if let Some(nav) = command.get(cmd::SEE_MORE) {
            data.route = nav.route().into();
            log::info!("see more: {}", data.route);
            Handled::Yes
        } else if let Some(link) = command.get(cmd::PREFETCH_ALBUM) {
            // A real client would warm its album cache here.
            log::debug!("prefetching album {} ({})", link.id, link.name);
            Handled::Yes
        } else if let Some(link) = command.get(cmd::PREFETCH_PLAYLIST) {
            log::debug!("prefetching playlist {} ({})", link.id, link.name);
            Handled::Yes
        } else {
            // SCROLL_TO_TOP propagates into the widget tree, everything else
            // is the remote image protocol.
            self.command_image(ctx, target, command)
        }
    }
}

fn provide_image(sink: &ExtEventSink, target: Target, location: Arc<str>, image_buf: ImageBuf) {
    let payload = remote_image::ImagePayload {
        location,
        image_buf,
    };
    if let Err(err) = sink.submit_command(remote_image::PROVIDE_DATA, payload, target) {
        log::error!("failed to provide image: {}", err);
    }
}

fn fetch_image(location: &str) -> Result<ImageBuf, Error> {
    let response = ureq::get(location).call()?;
    let mut body = Vec::new();
    response.into_body().into_reader().read_to_end(&mut body)?;
    ImageBuf::from_data(&body).map_err(|err| Error::ImageDecodeError(err.to_string()))
}

fn sample_albums() -> Vector<Album> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "name": "Hounds of Love",
            "picUrl": "https://p1.music.126.net/hounds-of-love.jpg",
            "publishTime": 495_849_600_000_i64,
            "type": "album",
            "artist": { "id": 11, "name": "Kate Bush" },
        },
        {
            "id": 2,
            "name": "Blue Lines",
            "picUrl": "https://p1.music.126.net/blue-lines.jpg",
            "publishTime": 671_155_200_000_i64,
            "type": "专辑",
            "mark": 1_056_768,
            "artists": [{ "id": 12, "name": "Massive Attack" }],
        },
        {
            "id": 3,
            "name": "Donuts",
            "picUrl": "https://p1.music.126.net/donuts.jpg",
            "publishTime": 1_139_184_000_000_i64,
            "type": "EP/Single",
            "artist": { "id": 13, "name": "J Dilla" },
        },
    ]))
    .expect("sample albums")
}

fn sample_playlists() -> Vector<Playlist> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 4,
            "name": "Rainy Day Jazz",
            "coverImgUrl": "https://p2.music.126.net/rainy-day-jazz.jpg",
            "creator": { "nickname": "annie" },
            "copywriter": "Slow horns for slow mornings",
        },
        {
            "id": 5,
            "name": "Private Stash",
            "coverImgUrl": "https://p2.music.126.net/private-stash.jpg",
            "creator": { "nickname": "ben" },
            "privacy": 10,
        },
    ]))
    .expect("sample playlists")
}

fn sample_artists() -> Vector<Artist> {
    serde_json::from_value(serde_json::json!([
        { "id": 6, "name": "Kate Bush", "img1v1Url": "https://p1.music.126.net/kate-bush.jpg" },
        { "id": 7, "name": "Massive Attack", "picUrl": "https://p1.music.126.net/massive-attack.jpg" },
    ]))
    .expect("sample artists")
}
