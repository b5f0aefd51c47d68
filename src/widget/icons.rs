use druid::{kurbo::BezPath, widget::prelude::*, Affine, Color, KeyOrValue, Size};

use crate::ui::theme;

/// Shown next to the name of a private playlist.
pub static LOCK: SvgIcon = SvgIcon {
    svg_path: "M5 7 V4.5 C5 2.5 6.3 1.2 8 1.2 C9.7 1.2 11 2.5 11 4.5 V7 M3.5 7 H12.5 V14.5 H3.5 Z",
    svg_size: Size::new(16.0, 16.0),
    op: PaintOp::Stroke { width: 1.5 },
};

/// Shown next to the name of an album carrying the explicit-content mark.
pub static EXPLICIT: SvgIcon = SvgIcon {
    svg_path: "M2 2 H14 V14 H2 Z M10.5 5 H6 V8 H10 M6 8 V11 H10.5",
    svg_size: Size::new(16.0, 16.0),
    op: PaintOp::Stroke { width: 1.5 },
};

/// Trailing chevron of the "See More" affordance.
pub static CHEVRON_RIGHT: SvgIcon = SvgIcon {
    svg_path: "M5 2 L11 8 L5 14",
    svg_size: Size::new(16.0, 16.0),
    op: PaintOp::Stroke { width: 1.5 },
};

#[derive(Copy, Clone)]
pub enum PaintOp {
    Fill,
    Stroke { width: f64 },
}

pub struct SvgIcon {
    svg_path: &'static str,
    svg_size: Size,
    op: PaintOp,
}

impl SvgIcon {
    pub fn scale(&self, to_size: impl Into<Size>) -> Icon {
        let to_size = to_size.into();
        let bez_path = BezPath::from_svg(self.svg_path).expect("Failed to parse SVG");
        let scale = Affine::scale_non_uniform(
            to_size.width / self.svg_size.width,
            to_size.height / self.svg_size.height,
        );
        Icon::new(self.op, bez_path, to_size, scale)
    }
}

pub struct Icon {
    op: PaintOp,
    bez_path: BezPath,
    size: Size,
    scale: Affine,
    color: KeyOrValue<Color>,
}

impl Icon {
    pub fn new(op: PaintOp, bez_path: BezPath, size: Size, scale: Affine) -> Self {
        Icon {
            op,
            bez_path,
            size,
            scale,
            color: theme::ICON_COLOR.into(),
        }
    }

    pub fn with_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.color = color.into();
        self
    }
}

impl<T> Widget<T> for Icon {
    fn event(&mut self, _ctx: &mut EventCtx, _ev: &Event, _data: &mut T, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _ev: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let color = self.color.resolve(env);
        ctx.with_save(|ctx| {
            ctx.transform(self.scale);
            match self.op {
                PaintOp::Fill => ctx.fill(&self.bez_path, &color),
                PaintOp::Stroke { width } => ctx.stroke(&self.bez_path, &color, width),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_paths_parse() {
        for icon in [&LOCK, &EXPLICIT, &CHEVRON_RIGHT] {
            BezPath::from_svg(icon.svg_path).unwrap();
        }
    }
}
