use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{BarChart3D, ChartStyle, FrameOutcome, FrameTicket};
use crate::core::BarDatum;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

pub type SharedChart = Rc<RefCell<BarChart3D<CairoRenderer>>>;

/// Embeds a [`BarChart3D`] into a `gtk4::DrawingArea`.
///
/// Pointer listeners and the frame-clock tick callback are attached on
/// `mount` and released on `unmount` or drop, so no callback outlives the
/// component and at most one tick callback is registered at a time.
///
/// The chart is switched to host drawing: ticks and pointer events only
/// advance state and queue a redraw, and the draw func is the single place
/// the scene is painted.
pub struct GtkBarChartAdapter {
    drawing_area: gtk::DrawingArea,
    chart: SharedChart,
    motion: RefCell<Option<gtk::EventControllerMotion>>,
    tick: Rc<RefCell<Option<gtk::TickCallbackId>>>,
}

impl GtkBarChartAdapter {
    #[must_use]
    pub fn new(mut chart: BarChart3D<CairoRenderer>) -> Self {
        chart.set_host_drawing(true);
        let viewport = chart.viewport();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_halign(gtk::Align::Center);

        let chart = Rc::new(RefCell::new(chart));
        {
            let chart = Rc::clone(&chart);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if let Err(err) = chart.render_on_cairo_context(context) {
                        warn!(error = %err, "bar chart draw failed");
                    }
                }
            });
        }

        Self {
            drawing_area,
            chart,
            motion: RefCell::new(None),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }

    pub fn mount(&self) -> ChartResult<()> {
        self.attach_pointer();
        let ticket = self.chart.borrow_mut().mount()?;
        self.schedule(ticket);
        Ok(())
    }

    pub fn unmount(&self) {
        self.cancel_tick();
        self.detach_pointer();
        if let Ok(mut chart) = self.chart.try_borrow_mut() {
            chart.unmount();
        }
        self.drawing_area.queue_draw();
    }

    pub fn set_data(&self, data: Vec<BarDatum>) -> ChartResult<()> {
        let ticket = self.chart.borrow_mut().set_data(data)?;
        self.schedule(ticket);
        Ok(())
    }

    pub fn set_style(&self, style: ChartStyle) -> ChartResult<()> {
        let ticket = self.chart.borrow_mut().set_style(style)?;
        self.schedule(ticket);
        Ok(())
    }

    fn attach_pointer(&self) {
        if self.motion.borrow().is_some() {
            return;
        }

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&self.chart);
            let drawing_area = self.drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if matches!(chart.pointer_move(x, y), Ok(true)) {
                        drawing_area.queue_draw();
                    }
                }
            });
        }
        {
            let chart = Rc::clone(&self.chart);
            let drawing_area = self.drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if matches!(chart.pointer_leave(), Ok(true)) {
                        drawing_area.queue_draw();
                    }
                }
            });
        }
        self.drawing_area.add_controller(motion.clone());
        self.motion.replace(Some(motion));
    }

    fn detach_pointer(&self) {
        if let Some(motion) = self.motion.take() {
            self.drawing_area.remove_controller(&motion);
        }
    }

    fn cancel_tick(&self) {
        if let Some(id) = self.tick.borrow_mut().take() {
            id.remove();
        }
    }

    /// Replaces any registered tick callback with one driving `ticket`'s cycle.
    fn schedule(&self, ticket: Option<FrameTicket>) {
        self.cancel_tick();
        self.drawing_area.queue_draw();
        let Some(ticket) = ticket else {
            return;
        };

        let chart = Rc::clone(&self.chart);
        let slot = Rc::clone(&self.tick);
        let next_ticket = Cell::new(ticket);
        let last_frame_us: Cell<Option<i64>> = Cell::new(None);
        let id = self.drawing_area.add_tick_callback(move |widget, clock| {
            let now_us = clock.frame_time();
            let delta_us = last_frame_us.get().map_or(0, |last| (now_us - last).max(0));
            last_frame_us.set(Some(now_us));

            let outcome = match chart.try_borrow_mut() {
                Ok(mut chart) => chart.on_frame(
                    next_ticket.get(),
                    Duration::from_micros(u64::try_from(delta_us).unwrap_or(0)),
                ),
                Err(_) => return gtk::glib::ControlFlow::Continue,
            };
            widget.queue_draw();

            match outcome {
                Ok(FrameOutcome::Continue(ticket)) => {
                    next_ticket.set(ticket);
                    gtk::glib::ControlFlow::Continue
                }
                Ok(FrameOutcome::Settled | FrameOutcome::Stale) => {
                    // GTK drops the callback itself once we return Break.
                    let _ = slot.try_borrow_mut().map(|mut slot| slot.take());
                    gtk::glib::ControlFlow::Break
                }
                Err(err) => {
                    warn!(error = %err, "animation frame failed");
                    let _ = slot.try_borrow_mut().map(|mut slot| slot.take());
                    gtk::glib::ControlFlow::Break
                }
            }
        });
        self.tick.replace(Some(id));
    }
}

impl Drop for GtkBarChartAdapter {
    fn drop(&mut self) {
        self.unmount();
    }
}
