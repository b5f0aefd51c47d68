use druid::{widget::Controller, Data, Env, Event, EventCtx, LifeCycle, LifeCycleCtx, Widget};

/// Runs a callback when the pointer enters the widget, once per entry. The
/// grid uses this to fire prefetch commands without flooding the cache layer
/// on every mouse move.
pub struct OnHover<T> {
    callback: Box<dyn Fn(&mut EventCtx, &mut T, &Env)>,
    triggered: bool,
}

impl<T: Data> OnHover<T> {
    pub fn new(callback: impl Fn(&mut EventCtx, &mut T, &Env) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            triggered: false,
        }
    }
}

impl<T: Data, W: Widget<T>> Controller<T, W> for OnHover<T> {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::MouseMove(_) = event {
            if ctx.is_hot() && !self.triggered {
                self.triggered = true;
                (self.callback)(ctx, data, env);
            }
        }
        child.event(ctx, event, data, env);
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &T,
        env: &Env,
    ) {
        if let LifeCycle::HotChanged(false) = event {
            self.triggered = false;
        }
        child.lifecycle(ctx, event, data, env);
    }
}
