use druid::{widget::prelude::*, Data};

use crate::cmd;

/// Zero-sized marker placed at the top of a scroll view. When
/// `cmd::SCROLL_TO_TOP` arrives it asks the enclosing scroller to bring it
/// into view, which scrolls the view back to the top.
pub struct ScrollToTop;

impl<T: Data> Widget<T> for ScrollToTop {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::Command(command) = event {
            if command.is(cmd::SCROLL_TO_TOP) {
                ctx.scroll_to_view();
                ctx.set_handled();
            }
        }
    }

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.min()
    }

    fn paint(&mut self, _ctx: &mut PaintCtx, _data: &T, _env: &Env) {}
}
