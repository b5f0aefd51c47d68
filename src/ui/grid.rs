use std::sync::Arc;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, LineBreaking, SizedBox},
    Data, Env, EventCtx, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{CoverGridData, CoverItem, Nav, SubtitleKind},
    ui::theme,
    widget::{icons, Clip, GridList, MyWidgetExt, RemoteImage},
};

/// The grid is always five tiles wide; skeleton mode fills `rows` of them.
pub const GRID_COLUMNS: usize = 5;

pub fn skeleton_slot_count(rows: usize) -> usize {
    rows * GRID_COLUMNS
}

/// Static configuration of one cover grid. The dynamic part (items and the
/// loading flag) lives in `CoverGridData`.
#[derive(Clone)]
pub struct GridDisplay {
    pub title: Option<Arc<str>>,
    pub subtitle: SubtitleKind,
    pub see_more: Option<Nav>,
    pub rows: usize,
    pub navigate_callback: Option<Arc<dyn Fn()>>,
}

impl GridDisplay {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: SubtitleKind::default(),
            see_more: None,
            rows: 2,
            navigate_callback: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: SubtitleKind) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn with_see_more(mut self, nav: Nav) -> Self {
        self.see_more = Some(nav);
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn on_navigate(mut self, callback: impl Fn() + 'static) -> Self {
        self.navigate_callback = Some(Arc::new(callback));
        self
    }

    fn notify_navigated(&self) {
        if let Some(callback) = &self.navigate_callback {
            callback();
        }
    }
}

/// A titled grid of cover tiles, or a fixed-count field of skeleton tiles
/// while the caller is still loading.
pub fn grid_widget(display: GridDisplay) -> impl Widget<CoverGridData> {
    let rows = display.rows;
    let mut column = Flex::column().cross_axis_alignment(CrossAxisAlignment::Start);
    if let Some(title) = display.title.clone() {
        column.add_child(header_widget(title, display.see_more.clone()));
    }
    let tile_display = display;
    column.add_child(Either::new(
        |data: &CoverGridData, _| data.is_loading,
        skeleton_grid(rows),
        GridList::new(GRID_COLUMNS, move || Box::new(tile_widget(&tile_display)))
            .with_spacing(theme::grid(3.0))
            .lens(CoverGridData::items),
    ));
    column
}

fn tile_widget(display: &GridDisplay) -> impl Widget<CoverItem> {
    let size = theme::grid(16.0);

    let cover = Either::new(
        |item: &CoverItem, _| item.is_artist(),
        Clip::circle(cover_image(size)),
        Clip::rounded(theme::COVER_RADIUS, cover_image(size)),
    );
    let cover_display = display.clone();
    let cover = cover
        .link()
        .rounded(theme::COVER_RADIUS)
        .on_click(move |ctx, item: &mut CoverItem, _| activate(ctx, &cover_display, item));

    let name_display = display.clone();
    let name = Label::dynamic(|item: &CoverItem, _| item.name().to_string())
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip)
        .link()
        .on_click(move |ctx, item: &mut CoverItem, _| activate(ctx, &name_display, item));

    let lock = Either::new(
        |item: &CoverItem, _| item.is_private_playlist(),
        icons::LOCK
            .scale((theme::grid(1.5), theme::grid(1.5)))
            .with_color(theme::PLACEHOLDER_COLOR)
            .padding((0.0, 0.0, theme::grid(0.5), 0.0)),
        SizedBox::empty(),
    );
    let explicit = Either::new(
        |item: &CoverItem, _| item.is_explicit_album(),
        icons::EXPLICIT
            .scale((theme::grid(1.75), theme::grid(1.75)))
            .with_color(theme::PLACEHOLDER_COLOR)
            .padding((theme::grid(0.5), 0.0, 0.0, 0.0)),
        SizedBox::empty(),
    );
    let name_line = Flex::row()
        .with_child(lock)
        .with_flex_child(name, 1.0)
        .with_child(explicit);

    // Artists get no secondary line at all, whatever subtitle was asked for.
    let subtitle_kind = display.subtitle;
    let subtitle = Either::new(
        |item: &CoverItem, _| item.is_artist(),
        SizedBox::empty(),
        Label::dynamic(move |item: &CoverItem, _| item.subtitle(subtitle_kind))
            .with_text_size(theme::TEXT_SIZE_SMALL)
            .with_text_color(theme::PLACEHOLDER_COLOR)
            .with_line_break_mode(LineBreaking::Clip),
    );

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(cover)
        .with_spacer(theme::grid(1.0))
        .with_child(name_line)
        .with_spacer(theme::grid(0.25))
        .with_child(subtitle)
        .fix_width(size)
        .on_hover(|ctx, item: &mut CoverItem, _| prefetch(ctx, item))
}

fn cover_image(size: f64) -> impl Widget<CoverItem> {
    RemoteImage::new(placeholder_widget(), |item: &CoverItem, _| {
        let url = item.image_url();
        (!url.is_empty()).then(|| url.into())
    })
    .fix_size(size, size)
}

fn placeholder_widget<T: Data>() -> impl Widget<T> {
    SizedBox::empty().background(theme::BACKGROUND_DARK)
}

fn activate(ctx: &mut EventCtx, display: &GridDisplay, item: &CoverItem) {
    ctx.submit_command(cmd::NAVIGATE.with(item.nav()));
    display.notify_navigated();
    ctx.submit_command(cmd::SCROLL_TO_TOP);
}

/// Warms whatever cache layer the app installed. Artists have no detail
/// payload worth prefetching.
fn prefetch(ctx: &mut EventCtx, item: &CoverItem) {
    match item {
        CoverItem::Album(album) => {
            ctx.submit_command(cmd::PREFETCH_ALBUM.with(album.link()));
        }
        CoverItem::Playlist(playlist) => {
            ctx.submit_command(cmd::PREFETCH_PLAYLIST.with(playlist.link()));
        }
        CoverItem::Artist(_) => {}
    }
}

fn header_widget<T: Data>(title: Arc<str>, see_more: Option<Nav>) -> impl Widget<T> {
    let mut header = Flex::row()
        .with_child(
            Label::new(title.to_string())
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_size(theme::TEXT_SIZE_LARGE),
        )
        .with_flex_spacer(1.0);
    if let Some(nav) = see_more {
        header.add_child(see_more_widget(nav));
    }
    header.padding((0.0, theme::grid(1.0)))
}

fn see_more_widget<T: Data>(nav: Nav) -> impl Widget<T> {
    Flex::row()
        .with_child(
            Label::new("See More")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::PLACEHOLDER_COLOR),
        )
        .with_child(
            icons::CHEVRON_RIGHT
                .scale((theme::grid(1.25), theme::grid(1.25)))
                .with_color(theme::PLACEHOLDER_COLOR),
        )
        .link()
        .rounded(theme::COVER_RADIUS)
        .on_click(move |ctx: &mut EventCtx, _data: &mut T, _env: &Env| {
            ctx.submit_command(cmd::SEE_MORE.with(nav.clone()));
        })
}

fn skeleton_grid<T: Data>(rows: usize) -> impl Widget<T> {
    let mut column = Flex::column().cross_axis_alignment(CrossAxisAlignment::Start);
    for row in 0..rows {
        if row > 0 {
            column.add_spacer(theme::grid(3.0));
        }
        let mut line = Flex::row();
        for slot in 0..GRID_COLUMNS {
            if slot > 0 {
                line.add_spacer(theme::grid(3.0));
            }
            line.add_child(skeleton_tile());
        }
        column.add_child(line);
    }
    column
}

fn skeleton_tile<T: Data>() -> impl Widget<T> {
    let size = theme::grid(16.0);
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Clip::rounded(
            theme::COVER_RADIUS,
            placeholder_widget().fix_size(size, size),
        ))
        .with_spacer(theme::grid(1.0))
        .with_child(placeholder_widget().fix_size(size, theme::grid(1.75)))
        .with_spacer(theme::grid(0.5))
        .with_child(placeholder_widget().fix_size(size * 0.6, theme::grid(1.5)))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn skeleton_fills_rows_of_five() {
        assert_eq!(skeleton_slot_count(2), 10);
        assert_eq!(skeleton_slot_count(1), 5);
        assert_eq!(skeleton_slot_count(0), 0);
    }

    #[test]
    fn navigate_callback_runs_once_per_activation() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let display = GridDisplay::new().on_navigate(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        display.notify_navigated();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_callback_is_fine() {
        GridDisplay::new().notify_navigated();
    }

    #[test]
    fn display_defaults() {
        let display = GridDisplay::new();
        assert_eq!(display.rows, 2);
        assert_eq!(display.subtitle, SubtitleKind::Copywriter);
        assert!(display.title.is_none());
        assert!(display.see_more.is_none());
    }
}
