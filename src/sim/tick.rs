//! Per-frame update-and-render pass
//!
//! Draws the visible ring arcs and the moon discs using the positions the
//! moons hold at the start of the frame, then advances the orbits.

use std::f32::consts::TAU;

use super::arc::visible_arcs;
use super::occlusion::occlusion_intervals;
use super::state::CarrierRing;
use crate::renderer::{Color, DrawSurface};

/// Run one tick: render the ring with current positions, then integrate `dt`
///
/// `stroke_color` is queried once per stroked path. A surface error aborts the
/// pass and is returned unchanged; moons are not advanced in that case.
pub fn update_and_render<S, F>(
    ring: &mut CarrierRing,
    dt: f32,
    surface: &mut S,
    stroke_color: F,
) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
    F: Fn() -> Color,
{
    render(ring, surface, &stroke_color)?;
    ring.advance(dt);
    Ok(())
}

/// Issue the draw calls for one frame without touching orbit state
pub fn render<S, F>(ring: &CarrierRing, surface: &mut S, stroke_color: F) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
    F: Fn() -> Color,
{
    let intervals = occlusion_intervals(&ring.moons, ring.radius);

    for arc in visible_arcs(&intervals) {
        stroke_arc(
            surface,
            ring.center.x,
            ring.center.y,
            ring.radius,
            arc.start,
            arc.end,
            stroke_color(),
        )?;
    }

    for moon in &ring.moons {
        let pos = ring.moon_center(moon);
        stroke_arc(surface, pos.x, pos.y, moon.radius, 0.0, TAU, stroke_color())?;
    }

    Ok(())
}

fn stroke_arc<S: DrawSurface + ?Sized>(
    surface: &mut S,
    cx: f32,
    cy: f32,
    radius: f32,
    start: f32,
    end: f32,
    color: Color,
) -> Result<(), S::Error> {
    surface.begin_path()?;
    surface.arc(cx, cy, radius, start, end)?;
    surface.set_stroke_color(color)?;
    surface.stroke()?;
    surface.close_path()
}
