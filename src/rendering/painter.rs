// src/rendering/painter.rs
// Draws the atom onto any plotters backend: the GTK canvas (via plotters-cairo),
// cairo export surfaces, or the bitmap/GIF backend.

use super::scene::{Artist, Frame, Scene, Viewport};
use crate::config::{Rgb, MIN_AXIS_LIMIT};
use crate::model::ElectronPosition;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::TAU;

/// Height of the title strip above the canvas, in pixels.
pub const TITLE_PX: u32 = 56;
/// Gap around the canvas, in pixels.
pub const MARGIN_PX: u32 = 24;

/// Pixel spacing between the dots of an orbit guide.
const ORBIT_DOT_SPACING: f64 = 7.0;
const MIN_ORBIT_DOTS: usize = 12;
const MAX_ORBIT_DOTS: usize = 2048;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
  /// Title, nucleus label and legend. Off means no font is touched.
  pub annotations: bool,
}

impl Default for DrawOptions {
  fn default() -> Self {
    Self { annotations: true }
  }
}

pub fn rgb(c: Rgb) -> RGBColor {
  let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
  RGBColor(to_u8(c.0), to_u8(c.1), to_u8(c.2))
}

pub fn viewport_for<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> Viewport {
  let (w, h) = root.dim_in_pixel();
  Viewport::fit(w, h, TITLE_PX, MARGIN_PX, scene.style.axis_limit.max(MIN_AXIS_LIMIT))
}

/// Figure background, canvas and every artist no frame touches.
pub fn draw_static_layer<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  scene: &Scene,
  vp: &Viewport,
  opts: &DrawOptions,
) -> DrawResult<DB> {
  let style = &scene.style;
  root.fill(&rgb(style.figure_color))?;

  let (right, bottom) = vp.bottom_right();
  root.draw(&Rectangle::new(
    [(vp.left, vp.top), (right, bottom)],
    rgb(style.canvas_color).filled(),
  ))?;
  root.draw(&Rectangle::new(
    [(vp.left, vp.top), (right, bottom)],
    ShapeStyle::from(&rgb(style.frame_color)).stroke_width(1),
  ))?;

  draw_artists(root, scene, &[], vp, &scene.static_artists(), opts)
}

/// Draws `artists` in order. Electron indices refer to `electrons`.
pub fn draw_artists<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  scene: &Scene,
  electrons: &[ElectronPosition],
  vp: &Viewport,
  artists: &[Artist],
  opts: &DrawOptions,
) -> DrawResult<DB> {
  for artist in artists {
    match *artist {
      Artist::Title => {
        if opts.annotations {
          draw_title(root, scene)?;
        }
      }
      Artist::Nucleus => {
        let style = &scene.style;
        root.draw(&Circle::new(
          vp.to_pixel(0.0, 0.0),
          vp.scale_len(style.nucleus_radius),
          rgb(style.nucleus_color).filled(),
        ))?;
      }
      Artist::NucleusLabel => {
        if opts.annotations {
          draw_nucleus_label(root, scene, vp)?;
        }
      }
      Artist::Legend => {
        if opts.annotations {
          draw_legend(root, scene, vp)?;
        }
      }
      Artist::Orbit(i) => {
        if let Some(&r) = scene.orbit_radii().get(i) {
          draw_dotted_circle(root, vp, r, rgb(scene.style.orbit_color))?;
        }
      }
      Artist::Electron(i) => {
        if let Some(p) = electrons.get(i) {
          root.draw(&Circle::new(
            vp.to_pixel(p.x, p.y),
            vp.scale_len(scene.style.electron_radius),
            rgb(scene.style.electron_color).filled(),
          ))?;
        }
      }
    }
  }
  Ok(())
}

/// A complete picture of one frame.
pub fn draw_frame<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  scene: &Scene,
  frame: &Frame,
  opts: &DrawOptions,
) -> DrawResult<DB> {
  let vp = viewport_for(root, scene);
  draw_static_layer(root, scene, &vp, opts)?;
  draw_artists(root, scene, &frame.electrons, &vp, &frame.paint_order(scene), opts)
}

/// Dots on an orbit guide of `radius_px` pixels.
pub fn orbit_dot_count(radius_px: f64) -> usize {
  let circumference = TAU * radius_px;
  ((circumference / ORBIT_DOT_SPACING).round() as usize).clamp(MIN_ORBIT_DOTS, MAX_ORBIT_DOTS)
}

// --- Individual artists ---

fn draw_title<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> DrawResult<DB> {
  let (w, _) = root.dim_in_pixel();
  let font = ("serif", 22)
    .into_font()
    .style(FontStyle::Bold)
    .color(&rgb(scene.style.text_color))
    .pos(Pos::new(HPos::Center, VPos::Center));
  root.draw(&Text::new(
    scene.style.title.clone(),
    (w as i32 / 2, TITLE_PX as i32 / 2 + 4),
    font,
  ))
}

fn draw_nucleus_label<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  scene: &Scene,
  vp: &Viewport,
) -> DrawResult<DB> {
  let size = vp.scale_len(scene.style.nucleus_radius).max(8.0);
  let font = ("sans-serif", size)
    .into_font()
    .color(&WHITE)
    .pos(Pos::new(HPos::Center, VPos::Center));
  root.draw(&Text::new(
    scene.style.nucleus_label.clone(),
    vp.to_pixel(0.0, 0.0),
    font,
  ))
}

fn draw_legend<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  scene: &Scene,
  vp: &Viewport,
) -> DrawResult<DB> {
  let style = &scene.style;
  let row_h = 24;
  let box_w = 170;
  let box_h = 2 * row_h + 12;

  let (right, _) = vp.bottom_right();
  let x0 = right - box_w - 10;
  let y0 = vp.top + 10;

  root.draw(&Rectangle::new(
    [(x0, y0), (x0 + box_w, y0 + box_h)],
    rgb(style.figure_color).filled(),
  ))?;
  root.draw(&Rectangle::new(
    [(x0, y0), (x0 + box_w, y0 + box_h)],
    ShapeStyle::from(&rgb(style.frame_color)).stroke_width(1),
  ))?;

  let text = ("sans-serif", 16)
    .into_font()
    .color(&rgb(style.text_color))
    .pos(Pos::new(HPos::Left, VPos::Center));

  let entries = [
    ("Electron", style.electron_color, 6.0),
    ("Atom's Nucleus", style.nucleus_color, 8.0),
  ];

  for (row, (label, color, marker)) in entries.iter().enumerate() {
    let y = y0 + 6 + row_h / 2 + row as i32 * row_h;
    root.draw(
      &(EmptyElement::at((x0 + 18, y))
        + Circle::new((0, 0), *marker, rgb(*color).filled())
        + Text::new(label.to_string(), (18, 0), text.clone())),
    )?;
  }
  Ok(())
}

fn draw_dotted_circle<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  vp: &Viewport,
  radius: f64,
  color: RGBColor,
) -> DrawResult<DB> {
  let dots = orbit_dot_count(radius * vp.px_per_unit());

  for i in 0..dots {
    let angle = TAU * i as f64 / dots as f64;
    let (sin, cos) = angle.sin_cos();
    root.draw(&Circle::new(
      vp.to_pixel(radius * cos, radius * sin),
      1.0,
      color.filled(),
    ))?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn colors_convert_to_bytes() {
    assert_eq!(rgb((1.0, 0.0, 0.0)), RGBColor(255, 0, 0));
    assert_eq!(rgb((0.5, 2.0, -1.0)), RGBColor(128, 255, 0));
  }

  #[test]
  fn orbit_dots_stay_bounded() {
    assert_eq!(orbit_dot_count(0.0), 12);
    // radius 1 at 36 px per unit: 226 px around, about 32 dots
    assert_eq!(orbit_dot_count(36.0), 32);
    assert_eq!(orbit_dot_count(1.0e7), 2048);
    assert_eq!(orbit_dot_count(f64::INFINITY), 2048);
  }

  #[test]
  fn default_options_include_annotations() {
    assert!(DrawOptions::default().annotations);
  }
}
