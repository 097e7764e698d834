use crate::rendering::{export_frame, DrawOptions, GifWriter, Scene};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>) {

    // --- EXPORT FRAME ACTION ---
    let frame_action = gtk4::gio::SimpleAction::new("export_frame", None);
    let win_weak_f = window.downgrade();
    let state_weak_f = Rc::downgrade(&state);

    frame_action.connect_activate(move |_, _| {
        let win = match win_weak_f.upgrade() { Some(w) => w, None => return };
        let state_weak_inner = state_weak_f.clone();

        let dialog = FileChooserNative::new(Some("Export Frame"), Some(&win), FileChooserAction::Save, Some("Export"), Some("Cancel"));

        let filter_png = FileFilter::new(); filter_png.set_name(Some("PNG Image (*.png)")); filter_png.add_pattern("*.png"); dialog.add_filter(&filter_png);
        let filter_pdf = FileFilter::new(); filter_pdf.set_name(Some("PDF Document (*.pdf)")); filter_pdf.add_pattern("*.pdf"); dialog.add_filter(&filter_pdf);
        let filter_svg = FileFilter::new(); filter_svg.set_name(Some("SVG Vector (*.svg)")); filter_svg.add_pattern("*.svg"); dialog.add_filter(&filter_svg);
        dialog.set_filter(&filter_png);
        dialog.set_current_name("atom.png");

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let (Some(path), Some(st)) = (chosen_path(d), state_weak_inner.upgrade()) {
                    let s = st.borrow();
                    let size = (s.config.export.width, s.config.export.height);
                    if let Err(e) = export_frame(&s.scene, s.frame, &path, size, &s.options) {
                        log::error!("Export failed: {:#}", e);
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&frame_action);


    // --- EXPORT ANIMATION ACTION ---
    let anim_action = gtk4::gio::SimpleAction::new("export_animation", None);
    let win_weak_a = window.downgrade();
    let state_weak_a = Rc::downgrade(&state);

    anim_action.connect_activate(move |_, _| {
        let win = match win_weak_a.upgrade() { Some(w) => w, None => return };
        let state_weak_inner = state_weak_a.clone();

        let dialog = FileChooserNative::new(Some("Export Animation"), Some(&win), FileChooserAction::Save, Some("Export"), Some("Cancel"));

        let filter_gif = FileFilter::new(); filter_gif.set_name(Some("Animated GIF (*.gif)")); filter_gif.add_pattern("*.gif"); dialog.add_filter(&filter_gif);
        dialog.set_current_name("atom.gif");

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let (Some(path), Some(st)) = (chosen_path(d), state_weak_inner.upgrade()) {
                    let s = st.borrow();
                    let size = (s.config.export.width, s.config.export.height);
                    let fps = s.config.export.fps;
                    // Snapshot: later view changes do not reach a running export
                    let scene = s.scene.clone();
                    let opts = s.options;
                    drop(s);
                    start_gif_export(scene, opts, &path, size, fps);
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&anim_action);


    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();

    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}

fn chosen_path(dialog: &FileChooserNative) -> Option<PathBuf> {
    dialog.file().and_then(|file| file.path())
}

/// Writes the GIF one frame per idle tick so the window stays responsive.
fn start_gif_export(scene: Scene, opts: DrawOptions, path: &Path, size: (u32, u32), fps: u32) {
    let mut writer = match GifWriter::create(&scene, path, size, fps) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Export failed: {:#}", e);
            return;
        }
    };
    let (_, total) = writer.progress();
    log::info!("Rendering {} frames to {:?}...", total, path);

    glib::idle_add_local(move || match writer.write_next(&scene, &opts) {
        Ok(true) => {
            let (done, total) = writer.progress();
            if done % 25 == 0 {
                log::info!("Export: {}/{} frames", done, total);
            }
            glib::ControlFlow::Continue
        }
        Ok(false) => {
            let (done, _) = writer.progress();
            log::info!("Exported {} frames at {} fps to {:?}", done, fps, writer.path());
            glib::ControlFlow::Break
        }
        Err(e) => {
            log::error!("Export failed: {:#}", e);
            glib::ControlFlow::Break
        }
    });
}
