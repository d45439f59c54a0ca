extern crate env_logger;
extern crate nalgebra;
extern crate softcanvas;

use nalgebra::Point2;

use softcanvas::command::CommandRecorder;
use softcanvas::image_compat::ImageFrameBuffer;
use softcanvas::pixel::{RGBAf32Pixel, RGBAu8Pixel};
use softcanvas::render::{FrameBuffer, Pipeline};

fn main() {
    env_logger::init();

    let commands = CommandRecorder::new()
        // Filled square
        .start_fill(Point2::new(32, 32), RGBAu8Pixel { r: 220, g: 60, b: 60, a: 255 })
        .line_to(Point2::new(160, 32))
        .line_to(Point2::new(160, 160))
        .line_to(Point2::new(32, 160))
        .line_to(Point2::new(32, 32))
        .end_contour()
        // Translucent triangle over it
        .start_fill(Point2::new(96, 64), RGBAu8Pixel { r: 60, g: 120, b: 255, a: 160 })
        .line_to(Point2::new(224, 200))
        .line_to(Point2::new(48, 224))
        .line_to(Point2::new(96, 64))
        .end_contour()
        // Stroked diagonal across everything
        .start_stroke(Point2::new(16, 240), RGBAu8Pixel { r: 255, g: 255, b: 255, a: 255 }, 4)
        .line_to(Point2::new(240, 16))
        .end_contour()
        .finish();

    let framebuffer = FrameBuffer::<RGBAf32Pixel>::new_with(256, 256, RGBAf32Pixel {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    });

    let mut pipeline = Pipeline::new(framebuffer);

    pipeline.draw_contours(&commands);

    let image = pipeline.framebuffer().copy_to_image().unwrap();

    image.save("demos/shapes.png").unwrap();
}
