use druid::kurbo::Circle;
use druid::{widget::prelude::*, Data, WidgetPod};

/// Shape of the clip mask, computed from the laid-out size so covers do not
/// need to know their pixel dimensions up front.
#[derive(Copy, Clone)]
enum ClipShape {
    Rounded(f64),
    Circle,
}

/// Clips its child to a rounded rectangle or a circle. Artist portraits are
/// circular, album and playlist covers rounded.
pub struct Clip<T> {
    shape: ClipShape,
    inner: WidgetPod<T, Box<dyn Widget<T>>>,
}

impl<T: Data> Clip<T> {
    pub fn rounded(radius: f64, inner: impl Widget<T> + 'static) -> Self {
        Self {
            shape: ClipShape::Rounded(radius),
            inner: WidgetPod::new(inner).boxed(),
        }
    }

    pub fn circle(inner: impl Widget<T> + 'static) -> Self {
        Self {
            shape: ClipShape::Circle,
            inner: WidgetPod::new(inner).boxed(),
        }
    }
}

impl<T: Data> Widget<T> for Clip<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.inner.layout(ctx, bc, data, env);
        self.inner.set_origin(ctx, druid::Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let size = ctx.size();
        ctx.with_save(|ctx| {
            match self.shape {
                ClipShape::Rounded(radius) => {
                    ctx.clip(size.to_rect().to_rounded_rect(radius));
                }
                ClipShape::Circle => {
                    let radius = size.width.min(size.height) / 2.0;
                    ctx.clip(Circle::new(size.to_rect().center(), radius));
                }
            }
            self.inner.paint(ctx, data, env);
        });
    }
}
