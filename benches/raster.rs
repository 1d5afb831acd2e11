use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_rooms::core::GameState;
use pixel_rooms::raster::{Camera, Canvas, MiniMap, MiniMapConfig, PixelBuffer, Space, TextLayer};
use pixel_rooms::term::{FrameBuffer, Scene};
use pixel_rooms::types::Rgba;

fn bench_lines(c: &mut Criterion) {
    let mut fb = PixelBuffer::new(320, 200);
    let camera = Camera::new(320, 200);

    c.bench_function("draw_line_fan_64", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(&mut fb, &camera);
            for i in 0..64 {
                let x = (i * 7) as f32 - 100.0;
                canvas.draw_line(160.0, 100.0, black_box(x), 400.0, Rgba::WHITE, Space::Screen);
            }
        })
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    let camera = Camera::new(200, 150);

    c.bench_function("flood_fill_200x150", |b| {
        b.iter(|| {
            let mut fb = PixelBuffer::new(200, 150);
            let mut canvas = Canvas::new(&mut fb, &camera);
            canvas.draw_rect(10.0, 10.0, 180.0, 130.0, Rgba::BLACK, Space::Screen);
            canvas.flood_fill(black_box(100), 75, Rgba::GREEN, Some(Rgba::BLACK))
        })
    });
}

fn bench_minimap(c: &mut Criterion) {
    let game = GameState::new();
    let minimap = MiniMap::new(MiniMapConfig::default());
    let rooms = game.map_rooms();
    let mut fb = PixelBuffer::new(200, 160);
    let camera = Camera::new(200, 160);
    let mut labels = TextLayer::new();

    c.bench_function("minimap_build_and_render", |b| {
        b.iter(|| {
            labels.clear();
            let grid = minimap.build_grid(game.player().rect(), &rooms, game.walls());
            let mut canvas = Canvas::new(&mut fb, &camera);
            minimap.render(&mut canvas, black_box(&grid), 5, 5, &mut labels);
        })
    });
}

fn bench_game_frame(c: &mut Criterion) {
    let mut game = GameState::new();
    game.start();
    let mut camera = Camera::new(200, 100);
    let target = game.camera_target();
    camera.update(target.x, target.y);
    let mut scene = Scene::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("game_frame_200x100", |b| {
        b.iter(|| {
            scene.render(black_box(&game), &camera);
            scene.present(&mut fb);
        })
    });
}

criterion_group!(benches, bench_lines, bench_flood_fill, bench_minimap, bench_game_frame);
criterion_main!(benches);
