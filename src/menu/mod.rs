// src/menu/mod.rs

use crate::config::Config;
use crate::model::shells::{guide_radii, total_electrons, MAX_ELECTRONS, POLONIUM};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, DrawingArea, License};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  drawing_area: &DrawingArea,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone());
  actions_view::setup(app, state, drawing_area);
  app.add_action_entries([gtk4::gio::ActionEntry::builder("about")
    .activate(|app: &Application, _, _| show_about(app))
    .build()]);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.export_frame", &["<Primary>e"]);
  app.set_accels_for_action("app.export_animation", &["<Primary><Shift>e"]);
  app.set_accels_for_action("app.save_settings", &["<Primary>s"]);
  app.set_accels_for_action("app.reverse_direction", &["<Primary>r"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Export Frame..."), Some("app.export_frame"));
  file_menu.append(Some("Export Animation (GIF)..."), Some("app.export_animation"));
  file_menu.append(Some("Save Settings"), Some("app.save_settings"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Reverse Direction"), Some("app.reverse_direction"));
  view_menu.append(Some("Verbose Log"), Some("app.toggle_verbose"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}

fn show_about(app: &Application) {
  let placed = total_electrons(&POLONIUM).min(MAX_ELECTRONS);
  let mut about = AboutDialog::builder()
    .program_name("atomview")
    .version(env!("CARGO_PKG_VERSION"))
    .comments(format!(
      "Bohr model of polonium: {} electrons on {} shells turning around the nucleus.",
      placed,
      guide_radii(&POLONIUM).len()
    ))
    .system_information(format!("Settings file: {}", Config::get_path().display()))
    .license_type(License::MitX11)
    .logo_icon_name("applications-science");

  if let Some(win) = app.active_window() {
    about = about.transient_for(&win).modal(true);
  }
  about.build().present();
}
