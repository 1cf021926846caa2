use std::rc::Rc;

use bar3d_chart::api::{BarChart3D, ChartConfig};
use bar3d_chart::core::{BarDatum, Viewport};
use bar3d_chart::platform_gtk::GtkBarChartAdapter;
use bar3d_chart::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = bar3d_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.bar3d.examples.gtk_bar_chart_demo")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn quarterly_sales() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Q1", 120.0, "#e4572e"),
        BarDatum::new("Q2", 180.0, "#29335c"),
        BarDatum::new("Q3", 95.0, "#f3a712"),
        BarDatum::new("Q4", 210.0, "#669bbc"),
    ]
}

fn monthly_visits() -> Vec<BarDatum> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = 40.0 + (index as f64 * 1.3).sin().abs() * 60.0;
            BarDatum::new(*label, value.round(), "#8ac926")
        })
        .collect()
}

fn build_ui(app: &gtk::Application) {
    let viewport = Viewport::new(800, 500);
    let renderer = match CairoRenderer::new(viewport.width as i32, viewport.height as i32) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create renderer: {err}");
            return;
        }
    };
    let chart = match BarChart3D::new(renderer, ChartConfig::new(viewport)) {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to create chart: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkBarChartAdapter::new(chart));
    if let Err(err) = adapter.set_data(quarterly_sales()) {
        eprintln!("failed to set data: {err}");
    }
    if let Err(err) = adapter.mount() {
        eprintln!("failed to mount chart: {err}");
    }

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let sales_button = gtk::Button::with_label("Quarterly Sales");
    let visits_button = gtk::Button::with_label("Monthly Visits");
    let empty_button = gtk::Button::with_label("Empty Series");
    controls.append(&sales_button);
    controls.append(&visits_button);
    controls.append(&empty_button);

    for (button, series) in [
        (&sales_button, quarterly_sales as fn() -> Vec<BarDatum>),
        (&visits_button, monthly_visits),
        (&empty_button, Vec::new),
    ] {
        let adapter = Rc::clone(&adapter);
        button.connect_clicked(move |_| {
            if let Err(err) = adapter.set_data(series()) {
                eprintln!("failed to set data: {err}");
            }
        });
    }

    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.append(&controls);
    root.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("bar3d-chart demo")
        .default_width(840)
        .default_height(580)
        .child(&root)
        .build();
    {
        let adapter = Rc::clone(&adapter);
        window.connect_close_request(move |_| {
            adapter.unmount();
            gtk::glib::Propagation::Proceed
        });
    }
    window.present();
}
