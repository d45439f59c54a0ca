extern crate env_logger;
extern crate nalgebra;
extern crate softcanvas;

use std::f32::consts::PI;

use nalgebra::Point2;

use softcanvas::image_compat::ImageFrameBuffer;
use softcanvas::pixel::RGBAf32Pixel;
use softcanvas::render::{FrameBuffer, Pipeline};
use softcanvas::segment::{SampleCount, SegmentList};

fn main() {
    env_logger::init();

    // A pentagram; its self-intersections show off the even-odd rule
    let center = Point2::new(128.0f32, 128.0);
    let radius = 104.0f32;

    let point_at = |k: u32| {
        // Step two vertices ahead each time to cross the star over itself
        let angle = k as f32 * (4.0 * PI / 5.0) - PI / 2.0;

        Point2::new(center.x + radius * angle.cos(),
                    center.y + radius * angle.sin())
    };

    let mut segments = SegmentList::new();

    segments.move_to(point_at(0));

    for k in 1..5 {
        segments.line_to(point_at(k));
    }

    segments.line_to(point_at(0));

    let samples = SampleCount::new(4).unwrap();

    let framebuffer = FrameBuffer::<RGBAf32Pixel>::new(256, 256);

    let mut pipeline = Pipeline::new(framebuffer);

    pipeline.draw_coverage(&segments, samples);

    let image = pipeline.framebuffer().copy_to_image().unwrap();

    image.save("demos/coverage.png").unwrap();
}
