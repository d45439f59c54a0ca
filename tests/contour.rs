extern crate nalgebra;
extern crate softcanvas;

use nalgebra::Point2;

use softcanvas::command::{Command, CommandList, CommandRecorder};
use softcanvas::pixel::{PackedColor, RGBAf32Pixel, RGBAu8Pixel};
use softcanvas::render::{rasterize_pixel, FrameBuffer, Pipeline};
use softcanvas::utils::smoothstep;

const RED: RGBAu8Pixel = RGBAu8Pixel { r: 255, g: 0, b: 0, a: 255 };
const WHITE: RGBAu8Pixel = RGBAu8Pixel { r: 255, g: 255, b: 255, a: 255 };

const OPAQUE_BLACK: RGBAf32Pixel = RGBAf32Pixel { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

fn assert_approx(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-5,
            "expected {}, got {}", expected, actual);
}

fn assert_pixel(actual: RGBAf32Pixel, expected: RGBAf32Pixel) {
    assert_approx(actual.r, expected.r);
    assert_approx(actual.g, expected.g);
    assert_approx(actual.b, expected.b);
    assert_approx(actual.a, expected.a);
}

/// Closed square with corners (0, 0) and (8, 8)
fn closed_square(color: RGBAu8Pixel) -> CommandList {
    CommandRecorder::new()
        .start_fill(Point2::new(0, 0), color)
        .line_to(Point2::new(8, 0))
        .line_to(Point2::new(8, 8))
        .line_to(Point2::new(0, 8))
        .line_to(Point2::new(0, 0))
        .end_contour()
        .finish()
}

#[test]
fn fill_inside_is_draw_color() {
    let commands = closed_square(RED);

    for &(x, y) in &[(2, 2), (4, 4), (6, 3), (1, 6)] {
        let pixel = rasterize_pixel(&commands, x, y);

        assert_pixel(pixel, RGBAf32Pixel { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
    }
}

#[test]
fn fill_far_outside_is_untouched() {
    let commands = closed_square(RED);

    // All farther than one unit from every edge
    for &(x, y) in &[(11, 4), (4, 11), (12, 12), (15, 0)] {
        let pixel = rasterize_pixel(&commands, x, y);

        assert_pixel(pixel, OPAQUE_BLACK);
    }
}

#[test]
fn fill_edge_falloff_is_monotonic() {
    // Quad with a shallow slanted top edge from (0, 4) to (16, 0), so pixels
    // along the row above it sit at fractional distances from the boundary
    let commands = CommandRecorder::new()
        .start_fill(Point2::new(0, 4), RED)
        .line_to(Point2::new(16, 0))
        .line_to(Point2::new(16, 12))
        .line_to(Point2::new(0, 12))
        .line_to(Point2::new(0, 4))
        .end_contour()
        .finish();

    // Walking row y = 2 toward the edge, coverage must rise continuously
    // from almost nothing to full
    let coverages: Vec<f32> = (4..9)
        .map(|x| rasterize_pixel(&commands, x, 2).r)
        .collect();

    for pair in coverages.windows(2) {
        assert!(pair[0] < pair[1],
                "coverage fell from {} to {}", pair[0], pair[1]);
    }

    assert!(coverages[0] < 0.05);
    assert!(coverages[1] > 0.0 && coverages[1] < 1.0);
    assert_approx(coverages[4], 1.0);
}

#[test]
fn stroke_coverage_profile() {
    let commands = CommandRecorder::new()
        .start_stroke(Point2::new(0, 0), WHITE, 2)
        .line_to(Point2::new(10, 10))
        .end_contour()
        .finish();

    // On the line itself: full coverage
    assert_pixel(rasterize_pixel(&commands, 5, 5),
                 RGBAf32Pixel { r: 1.0, g: 1.0, b: 1.0, a: 1.0 });

    // At distance sqrt(2), inside the one-unit transition band before the
    // stroke width
    let mid = rasterize_pixel(&commands, 4, 6);
    let expected = 1.0 - smoothstep(1.0, 2.0, 2.0f32.sqrt());

    assert!(expected > 0.0 && expected < 1.0);
    assert_pixel(mid, RGBAf32Pixel { r: expected, g: expected, b: expected, a: 1.0 });

    // Beyond the stroke width: nothing
    assert_pixel(rasterize_pixel(&commands, 0, 8), OPAQUE_BLACK);

    // Full, partial, gone as the distance grows
    let near = rasterize_pixel(&commands, 5, 6).r;
    let far = rasterize_pixel(&commands, 3, 7).r;

    assert_approx(near, 1.0);
    assert!(mid.r < near);
    assert_approx(far, 0.0);
}

#[test]
fn square_fill_hits_pixel_center() {
    // Raw command vector through the validation boundary, left open on the
    // final edge
    let commands = CommandList::from_commands(vec![
        Command::StartFill {
            start: Point2::new(0, 0),
            color: PackedColor::pack(RED),
        },
        Command::LineTo { point: Point2::new(4, 0) },
        Command::LineTo { point: Point2::new(4, 4) },
        Command::LineTo { point: Point2::new(0, 4) },
        Command::EndContour,
        Command::LastCommand,
    ]).unwrap();

    let pixel = rasterize_pixel(&commands, 2, 2);

    assert_pixel(pixel, RGBAf32Pixel { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
}

#[test]
fn empty_contour_draws_nothing() {
    let commands = CommandRecorder::new()
        .start_fill(Point2::new(3, 3), RED)
        .end_contour()
        .finish();

    let framebuffer = FrameBuffer::<RGBAf32Pixel>::new_with(8, 8, OPAQUE_BLACK);

    let mut pipeline = Pipeline::new(framebuffer);

    pipeline.draw_contours(&commands);

    for pixel in pipeline.framebuffer().color_buffer() {
        assert_pixel(*pixel, OPAQUE_BLACK);
    }
}

#[test]
fn translucent_blend_is_alpha_normalized() {
    let commands = closed_square(RGBAu8Pixel { r: 255, g: 0, b: 0, a: 128 });

    let pixel = rasterize_pixel(&commands, 4, 4);

    // The blend lerps all four channels by the coverage-scaled alpha, then
    // rescales to unit alpha; plain over-compositing would give r == alpha
    let alpha = 128.0 / 255.0;
    let blended_w = alpha * alpha + (1.0 - alpha);

    assert_pixel(pixel, RGBAf32Pixel {
        r: alpha / blended_w,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    });

    assert!((pixel.r - alpha).abs() > 0.1);
}

#[test]
fn parallel_dispatch_matches_serial_replay() {
    let commands = CommandRecorder::new()
        .start_fill(Point2::new(1, 1), RED)
        .line_to(Point2::new(12, 1))
        .line_to(Point2::new(12, 9))
        .line_to(Point2::new(1, 9))
        .line_to(Point2::new(1, 1))
        .end_contour()
        .start_stroke(Point2::new(0, 11), RGBAu8Pixel { r: 0, g: 255, b: 0, a: 200 }, 3)
        .line_to(Point2::new(15, 0))
        .end_contour()
        .finish();

    let framebuffer = FrameBuffer::<RGBAf32Pixel>::new_with(16, 12, OPAQUE_BLACK);

    let mut pipeline = Pipeline::new(framebuffer);

    pipeline.draw_contours(&commands);

    for y in 0..12 {
        for x in 0..16 {
            let parallel = pipeline.framebuffer().color_buffer()[(y * 16 + x) as usize];
            let serial = rasterize_pixel(&commands, x, y);

            assert_pixel(parallel, serial);
        }
    }
}
