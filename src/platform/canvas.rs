//! Canvas 2D draw surface (web only)

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::renderer::{Color, DrawSurface};

impl DrawSurface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        CanvasRenderingContext2d::begin_path(self);
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Result<(), Self::Error> {
        CanvasRenderingContext2d::arc(
            self,
            cx as f64,
            cy as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        )
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.set_stroke_style_str(&color.to_css());
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        CanvasRenderingContext2d::stroke(self);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        CanvasRenderingContext2d::close_path(self);
        Ok(())
    }
}
