// src/ui/window.rs

use crate::config::Config;
use crate::menu;
use crate::rendering::setup_drawing;
use crate::state::AppState;
use crate::utils::logger;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{glib, Application, ApplicationWindow, DrawingArea, Frame, Orientation, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub fn build_ui(app: &Application) {
    let (config, config_msg) = Config::load();
    logger::set_verbose(config.verbose_log);
    let state = Rc::new(RefCell::new(AppState::new(config)));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("AtomView - Bohr Model")
        .default_width(800)
        .default_height(880)
        .build();

    // 1. TOP LEVEL: Menu, canvas, console
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    let drawing_area = DrawingArea::new();
    drawing_area.set_vexpand(true);
    drawing_area.set_hexpand(true);

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));
    logger::attach_view(&console_view);

    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &drawing_area);

    root_vbox.append(&menu_bar);
    root_vbox.append(&drawing_area);
    root_vbox.append(&info_frame);

    // --- Setup Logic ---
    log::info!("{}", config_msg);
    log::info!("{}", state.borrow().scene.shell_report());

    setup_drawing(&drawing_area, state.clone());
    start_animation(&drawing_area, state);

    window.present();
}

/// Advances the frame counter on a fixed interval and asks for a redraw.
/// Stops once the canvas is gone.
fn start_animation(drawing_area: &DrawingArea, state: Rc<RefCell<AppState>>) {
    let (interval_ms, total) = {
        let st = state.borrow();
        (st.config.animation.interval_ms.max(1), st.scene.total_frames())
    };
    log::info!("Playing {} frames every {} ms", total, interval_ms);

    let da_weak = drawing_area.downgrade();
    glib::timeout_add_local(Duration::from_millis(interval_ms), move || {
        let Some(da) = da_weak.upgrade() else {
            return glib::ControlFlow::Break;
        };
        let frame = state.borrow_mut().advance();
        if frame == 0 {
            log::debug!("Animation wrapped around");
        }
        da.queue_draw();
        glib::ControlFlow::Continue
    });
}
