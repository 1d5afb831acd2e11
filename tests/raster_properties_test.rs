use pixel_rooms::raster::{
    build_grid_sized, clip_line, compute_outcode, render_grid, Camera, Canvas, ClipRect, Outcode,
    PixelBuffer, PixelTarget, Segment, Space, Texture,
};
use pixel_rooms::types::{MapRoom, Rect, Rgba, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

const CLIP: ClipRect = ClipRect::new(0.0, 0.0, 100.0, 80.0);

#[test]
fn segment_inside_is_returned_unchanged() {
    let seg = Segment::new(10.0, 10.0, 90.0, 70.0);
    assert_eq!(clip_line(seg, &CLIP), Some(seg));
    let edge = Segment::new(0.0, 0.0, 100.0, 80.0);
    assert_eq!(clip_line(edge, &CLIP), Some(edge));
}

#[test]
fn segment_outside_on_one_side_is_rejected() {
    let seg = Segment::new(-20.0, 5.0, -1.0, 60.0);
    assert!((compute_outcode(seg.x0, seg.y0, &CLIP) & compute_outcode(seg.x1, seg.y1, &CLIP))
        .contains(Outcode::LEFT));
    assert_eq!(clip_line(seg, &CLIP), None);
    assert_eq!(clip_line(Segment::new(5.0, 81.0, 95.0, 200.0), &CLIP), None);
}

#[test]
fn crossing_segment_is_cut_on_the_boundary() {
    let clipped = clip_line(Segment::new(-5.0, 5.0, 5.0, 5.0), &CLIP).unwrap();
    assert_eq!(clipped.x0, 0.0);
    assert_eq!(clipped.y0, 5.0);
    assert_eq!((clipped.x1, clipped.y1), (5.0, 5.0));

    // Diagonal through two boundaries.
    let clipped = clip_line(Segment::new(-10.0, -10.0, 110.0, 110.0), &CLIP).unwrap();
    assert!(clipped.x0 >= 0.0 && clipped.y0 >= 0.0);
    assert!(clipped.x1 <= 100.0 && clipped.y1 <= 80.0);
}

#[test]
fn camera_round_trip_within_a_pixel_for_every_zoom() {
    let mut camera = Camera::new(180, 90);
    camera.update(437.5, 212.25);

    let mut zoom = MIN_ZOOM;
    while zoom <= MAX_ZOOM {
        let mut cam = camera.clone();
        cam.zoom_out(100.0);
        cam.zoom_in(zoom / MIN_ZOOM);
        for &(x, y) in &[(0.0f32, 0.0f32), (437.5, 212.25), (900.0, 700.0), (123.4, 567.8)] {
            let (sx, sy) = cam.world_to_screen(x, y);
            let (wx, wy) = cam.screen_to_world(sx as f32, sy as f32);
            let tolerance = 1.0 / cam.zoom() + 1e-3;
            assert!((wx - x).abs() <= tolerance, "zoom {zoom}: x {x} -> {wx}");
            assert!((wy - y).abs() <= tolerance, "zoom {zoom}: y {y} -> {wy}");
        }
        zoom += 0.25;
    }
}

#[test]
fn zoom_is_bounded_and_resets_to_default() {
    let mut camera = Camera::new(100, 100);
    for _ in 0..100 {
        camera.zoom_in_step();
        assert!(camera.zoom() <= MAX_ZOOM);
    }
    assert_eq!(camera.zoom(), MAX_ZOOM);

    for _ in 0..100 {
        camera.zoom_out_step();
        assert!(camera.zoom() >= MIN_ZOOM);
    }
    assert_eq!(camera.zoom(), MIN_ZOOM);

    camera.reset_zoom();
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);
}

#[test]
fn six_pixel_line_has_exact_endpoints() {
    let mut fb = PixelBuffer::new(10, 3);
    let camera = Camera::new(10, 3);
    Canvas::new(&mut fb, &camera).draw_line(0.0, 0.0, 5.0, 0.0, Rgba::RED, Space::Screen);

    for x in 0..=5 {
        assert_eq!(fb.color_at(x, 0), Some(Rgba::RED));
    }
    assert_eq!(fb.count_rgb(Rgba::RED), 6);
}

/// 10×10 interior with its 40 border pixels at `(ox, oy)`.
fn enclosed_region(ox: i32, oy: i32) -> PixelBuffer {
    let mut fb = PixelBuffer::new(30, 30);
    fb.clear(Rgba::WHITE);
    for i in 0..10 {
        fb.set_color_at(ox + i, oy - 1, Rgba::BLACK);
        fb.set_color_at(ox + i, oy + 10, Rgba::BLACK);
        fb.set_color_at(ox - 1, oy + i, Rgba::BLACK);
        fb.set_color_at(ox + 10, oy + i, Rgba::BLACK);
    }
    fb
}

#[test]
fn flood_fill_covers_interior_from_any_seed() {
    let camera = Camera::new(30, 30);
    let (ox, oy) = (7, 9);
    for &(sx, sy) in &[(0, 0), (9, 9), (4, 7), (9, 0)] {
        let mut fb = enclosed_region(ox, oy);
        let filled = Canvas::new(&mut fb, &camera).flood_fill(ox + sx, oy + sy, Rgba::GREEN, Some(Rgba::BLACK));
        assert_eq!(filled, 100);
        assert_eq!(fb.count_rgb(Rgba::GREEN), 100);
        assert_eq!(fb.count_rgb(Rgba::BLACK), 40);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.color_at(ox + x, oy + y), Some(Rgba::GREEN));
            }
        }
    }
}

#[test]
fn checker_repeats_every_two_tiles_for_any_origin() {
    let camera = Camera::new(64, 64);
    for &(ox, oy) in &[(0, 0), (3, 5), (11, 2), (-6, -1)] {
        let mut fb = PixelBuffer::new(64, 64);
        Canvas::new(&mut fb, &camera).fill_rect_textured(
            ox as f32,
            oy as f32,
            48.0,
            48.0,
            Texture::Checker,
            Space::Screen,
        );
        for y in 0..16 {
            for x in 0..16 {
                let (px, py) = (ox.max(0) + x, oy.max(0) + y);
                assert_eq!(fb.color_at(px, py), fb.color_at(px + 16, py), "origin ({ox}, {oy})");
            }
        }
    }
}

#[test]
fn out_of_bounds_set_pixel_never_mutates() {
    let mut fb = PixelBuffer::new(8, 6);
    fb.clear(Rgba::BLUE);
    let before = fb.clone();
    let camera = Camera::new(8, 6);
    let mut canvas = Canvas::new(&mut fb, &camera);
    for &(x, y) in &[(-1.0, 0.0), (8.0, 0.0), (0.0, 6.0), (0.0, -0.5e9), (f32::MAX, f32::MIN), (f32::NAN, 0.0)] {
        canvas.set_pixel(x, y, Rgba::RED, Space::Screen);
    }
    // World space far away from the camera.
    canvas.set_pixel(1.0e6, -1.0e6, Rgba::RED, Space::World);
    assert_eq!(fb, before);
}

#[test]
fn minimap_render_paints_one_block_per_cell() {
    let room = MapRoom {
        bounds: Rect::new(20, 10, 60, 40),
        door: Rect::new(40, 46, 20, 4),
        door_blocking: true,
        button: Rect::new(25, 15, 10, 10),
        completed: false,
        furniture: Vec::new(),
    };
    let (gw, gh, scale) = (12usize, 8usize, 3i32);
    let grid = build_grid_sized(Rect::new(85, 60, 20, 32), &[room], &[], gw, gh, 10);

    let (ox, oy) = (2, 2);
    let mut fb = PixelBuffer::new(50, 40);
    let camera = Camera::new(50, 40);
    render_grid(&mut Canvas::new(&mut fb, &camera), &grid, ox, oy, scale);

    for row in 0..gh {
        for col in 0..gw {
            let expected = grid.get(col, row);
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = ox + col as i32 * scale + dx;
                    let py = oy + row as i32 * scale + dy;
                    assert_eq!(fb.color_at(px, py), expected, "cell ({col}, {row})");
                }
            }
        }
    }
}
