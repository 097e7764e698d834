use atomview::ui::build_ui;
use atomview::utils::logger;
use gtk4::prelude::*;
use gtk4::{glib, Application};

fn main() -> glib::ExitCode {
    if let Err(e) = logger::init(log::LevelFilter::Info) {
        eprintln!("Logger already installed: {}", e);
    }

    let app = Application::builder()
        .application_id("com.example.atomview")
        .build();

    app.connect_activate(build_ui);
    app.run()
}
