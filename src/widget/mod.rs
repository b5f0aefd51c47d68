mod clip;
mod grid_list;
mod hover;
pub mod icons;
mod link;
pub mod remote_image;
mod scroll;

use druid::{widget::ControllerHost, Data, Env, EventCtx, Widget};

pub use clip::Clip;
pub use grid_list::GridList;
pub use hover::OnHover;
pub use icons::Icon;
pub use link::Link;
pub use remote_image::RemoteImage;
pub use scroll::ScrollToTop;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }

    fn on_hover(
        self,
        f: impl Fn(&mut EventCtx, &mut T, &Env) + 'static,
    ) -> ControllerHost<Self, OnHover<T>> {
        ControllerHost::new(self, OnHover::new(f))
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
