use std::cmp::Ordering;

use druid::{im::Vector, widget::prelude::*, widget::ListIter, Data, Point, WidgetPod};

/// Data-driven grid of uniform cells, a fixed number of columns wide, rows
/// wrapping as the data demands. Children are created from a closure and
/// kept in sync with the item vector, like druid's `List` but laid out in
/// two dimensions.
pub struct GridList<T> {
    closure: Box<dyn Fn() -> Box<dyn Widget<T>>>,
    children: Vec<WidgetPod<T, Box<dyn Widget<T>>>>,
    columns: usize,
    spacing: f64,
}

impl<T: Data> GridList<T> {
    pub fn new(columns: usize, closure: impl Fn() -> Box<dyn Widget<T>> + 'static) -> Self {
        Self {
            closure: Box::new(closure),
            children: Vec::new(),
            columns: columns.max(1),
            spacing: 0.0,
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Syncs the child count with the data, returning true when it changed.
    fn update_child_count(&mut self, data: &Vector<T>) -> bool {
        let len = self.children.len();
        match len.cmp(&data.len()) {
            Ordering::Greater => self.children.truncate(data.len()),
            Ordering::Less => {
                for _ in len..data.len() {
                    self.children.push(WidgetPod::new((self.closure)()));
                }
            }
            Ordering::Equal => {}
        }
        len != data.len()
    }
}

impl<T: Data> Widget<Vector<T>> for GridList<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Vector<T>, env: &Env) {
        let mut children = self.children.iter_mut();
        data.for_each_mut(|child_data, _| {
            if let Some(child) = children.next() {
                child.event(ctx, event, child_data, env);
            }
        });
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &Vector<T>, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if self.update_child_count(data) {
                ctx.children_changed();
            }
        }
        let mut children = self.children.iter_mut();
        data.for_each(|child_data, _| {
            if let Some(child) = children.next() {
                child.lifecycle(ctx, event, child_data, env);
            }
        });
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &Vector<T>, data: &Vector<T>, env: &Env) {
        let mut children = self.children.iter_mut();
        data.for_each(|child_data, _| {
            if let Some(child) = children.next() {
                child.update(ctx, child_data, env);
            }
        });
        if self.update_child_count(data) {
            ctx.children_changed();
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Vector<T>,
        env: &Env,
    ) -> Size {
        let columns = self.columns;
        let spacing = self.spacing;
        let child_bc = BoxConstraints::new(
            Size::ZERO,
            Size::new(bc.max().width, f64::INFINITY),
        );

        // First pass sizes every cell; cells are uniform per column and row.
        let mut cell_width: f64 = 0.0;
        let mut row_heights: Vec<f64> = Vec::new();
        let mut children = self.children.iter_mut();
        data.for_each(|child_data, index| {
            if let Some(child) = children.next() {
                let size = child.layout(ctx, &child_bc, child_data, env);
                cell_width = cell_width.max(size.width);
                let row = index / columns;
                if row_heights.len() <= row {
                    row_heights.push(0.0);
                }
                row_heights[row] = row_heights[row].max(size.height);
            }
        });

        let mut children = self.children.iter_mut();
        data.for_each(|_, index| {
            if let Some(child) = children.next() {
                let row = index / columns;
                let column = index % columns;
                let x = column as f64 * (cell_width + spacing);
                let y: f64 = row_heights[..row]
                    .iter()
                    .map(|height| height + spacing)
                    .sum();
                child.set_origin(ctx, Point::new(x, y));
            }
        });

        let width = if data.is_empty() {
            0.0
        } else {
            let filled = self.columns.min(data.len());
            filled as f64 * cell_width + filled.saturating_sub(1) as f64 * spacing
        };
        let height = if row_heights.is_empty() {
            0.0
        } else {
            row_heights.iter().sum::<f64>() + (row_heights.len() - 1) as f64 * spacing
        };
        bc.constrain(Size::new(width, height))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Vector<T>, env: &Env) {
        let mut children = self.children.iter_mut();
        data.for_each(|child_data, _| {
            if let Some(child) = children.next() {
                child.paint(ctx, child_data, env);
            }
        });
    }
}
