use iced::{
    Point, Rectangle, Renderer, Theme, mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
};

use crate::{animation::Pose, models::Color};

use super::{faded, paint};

/// A soft blob placed relative to the canvas bounds.
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
    pub pose: Pose,
}

/// Floating paint blobs behind the hero.
#[derive(Debug, Clone, Default)]
pub struct PaintBlobs {
    pub blobs: Vec<Blob>,
}

impl<Message> canvas::Program<Message> for PaintBlobs {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let mut frame = Frame::new(renderer, bounds.size());
        for blob in &self.blobs {
            let center = Point::new(
                blob.x * bounds.width + blob.pose.dx,
                blob.y * bounds.height + blob.pose.dy,
            );
            let color = faded(blob.color, 0.35 * blob.pose.opacity);
            frame.fill(&Path::circle(center, blob.radius), color);
            // An off-center lobe makes the rotation visible.
            let (sin, cos) = blob.pose.rotation.sin_cos();
            let lobe = Point::new(
                center.x + blob.radius * 0.45 * cos,
                center.y + blob.radius * 0.45 * sin,
            );
            frame.fill(&Path::circle(lobe, blob.radius * 0.7), color);
        }
        vec![frame.into_geometry()]
    }
}

/// Concentric rotating rings around the about-section emblem.
#[derive(Debug, Clone, Default)]
pub struct Rings {
    pub rings: Vec<(Color, Pose)>,
}

impl<Message> canvas::Program<Message> for Rings {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let outer = bounds.width.min(bounds.height) / 2.0 - 4.0;
        for (index, (color, pose)) in self.rings.iter().enumerate() {
            let radius = outer * (1.0 - index as f32 * 0.18);
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(3.0).with_color(faded(*color, 0.5)),
            );
            let (sin, cos) = pose.rotation.sin_cos();
            let marker = Point::new(center.x + radius * cos, center.y + radius * sin);
            frame.fill(&Path::circle(marker, 7.0), paint(*color));
        }
        vec![frame.into_geometry()]
    }
}
