// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

#[cfg(feature = "gui")]
use gtk4::prelude::*;
#[cfg(feature = "gui")]
use gtk4::{glib, TextView};
#[cfg(feature = "gui")]
use std::sync::OnceLock;

#[cfg(feature = "gui")]
static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs the logger. Records always go to stderr; once a console view
/// is attached they are mirrored there too.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

pub fn set_verbose(verbose: bool) {
  log::set_max_level(if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  });
}

/// Buffer tag name for a level.
pub fn tag_for(level: Level) -> &'static str {
  match level {
    Level::Error => "error",
    Level::Warn => "warn",
    Level::Info => "info",
    Level::Debug | Level::Trace => "debug",
  }
}

pub fn format_line(level: Level, message: &str) -> String {
  format!("[{:<5}] {}", level, message)
}

#[cfg(feature = "gui")]
pub fn attach_view(view: &TextView) {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  // Error: Red & Bold, Warn: Orange, Info: Blue, Debug: Gray
  let tags = [
    ("error", "#ff4444", 700),
    ("warn", "#ffbb33", 400),
    ("info", "#33b5e5", 400),
    ("debug", "#aaaaaa", 400),
  ];
  for (name, color, weight) in tags {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      tag.set_property("weight", weight);
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
}

#[cfg(feature = "gui")]
fn mirror(level: Level, line: String) {
  if LOG_VIEW.get().is_none() {
    return;
  }
  let tag_name = tag_for(level);

  glib::MainContext::default().spawn_local(async move {
    if let Some(view) = LOG_VIEW.get().and_then(|weak_ref| weak_ref.upgrade()) {
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &format!("{}\n", line), &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    }
  });
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let line = format_line(record.level(), &record.args().to_string());
    eprintln!("{}", line);

    #[cfg(feature = "gui")]
    mirror(record.level(), line);
  }

  fn flush(&self) {}
}
