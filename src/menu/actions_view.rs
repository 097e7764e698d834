// src/menu/actions_view.rs

use crate::state::AppState;
use crate::utils::logger;
use gtk4::prelude::*;
use gtk4::{Application, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(app: &Application, state: Rc<RefCell<AppState>>, drawing_area: &DrawingArea) {
    // 1. Reverse the turning direction (persisted)
    let act_reverse = gtk4::gio::SimpleAction::new("reverse_direction", None);
    let s_rev = state.clone();
    let da_rev = drawing_area.downgrade();

    act_reverse.connect_activate(move |_, _| {
        let mut st = s_rev.borrow_mut();
        let dir = st.reverse_direction();
        log::info!("Electrons now turn {:?}", dir);
        st.save_config();
        if let Some(da) = da_rev.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_reverse);

    // 2. Verbose console (persisted)
    let act_verbose = gtk4::gio::SimpleAction::new("toggle_verbose", None);
    let s_verb = state.clone();

    act_verbose.connect_activate(move |_, _| {
        let mut st = s_verb.borrow_mut();
        st.config.verbose_log = !st.config.verbose_log;
        logger::set_verbose(st.config.verbose_log);
        log::info!(
            "Verbose log {}",
            if st.config.verbose_log { "on" } else { "off" }
        );
        st.save_config();
    });
    app.add_action(&act_verbose);

    // 3. Save the current settings as they are
    let act_save = gtk4::gio::SimpleAction::new("save_settings", None);
    let s_save = state;

    act_save.connect_activate(move |_, _| {
        s_save.borrow().save_config();
    });
    app.add_action(&act_save);
}
