//! Icons rasterized through the tiny-skia backend

use befair_core::{Color, DrawCommand, RecordingContext, Size};
use befair_icons::{paint, render, IconKind, PaintStyle, Surface};
use befair_paint::{PixmapContext, RasterizedImage};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn rasterize(icon: IconKind, side: u32) -> RasterizedImage {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    let mut ctx = PixmapContext::new(side, side).unwrap();
    let style = PaintStyle::stroke(Color::BLACK, 2.0).with_contrast(Color::WHITE);
    paint(&mut ctx, icon, Surface::square(side as f32), &style).unwrap();
    ctx.finish()
}

#[test]
fn test_arrow_shaft_is_painted() {
    let image = rasterize(IconKind::ArrowRight, 16);
    // Shaft covers rows 7 and 8
    assert_eq!(image.pixel(4, 7), Some(BLACK));
    assert_eq!(image.pixel(4, 0), Some(CLEAR));
    assert_eq!(image.pixel(4, 15), Some(CLEAR));
}

#[test]
fn test_email_body_and_flap() {
    let image = rasterize(IconKind::Email, 100);
    // Body below the flap
    assert_eq!(image.pixel(50, 70), Some(BLACK));
    // Outside the envelope
    assert_eq!(image.pixel(5, 5), Some(CLEAR));
    assert_eq!(image.pixel(50, 90), Some(CLEAR));

    // The flap is drawn in the contrast color on top of the body
    let flap = image.pixel(31, 36).unwrap();
    assert!(flap[0] > 0, "flap pixel should be lightened, got {flap:?}");
}

#[test]
fn test_lock_keyhole_and_body() {
    let image = rasterize(IconKind::Lock, 48);
    assert_eq!(image.pixel(23, 29), Some(WHITE));
    assert_eq!(image.pixel(24, 38), Some(BLACK));
    // Shackle apex
    assert!(image.pixel(24, 10).unwrap()[3] > 0);
    assert_eq!(image.pixel(24, 2), Some(CLEAR));
}

#[test]
fn test_eye_highlight_inside_pupil() {
    let image = rasterize(IconKind::Eye, 48);
    assert_eq!(image.pixel(24, 24), Some(WHITE));
    assert_eq!(image.pixel(24, 30), Some(BLACK));
    assert_eq!(image.pixel(0, 0), Some(CLEAR));
    assert_eq!(image.pixel(47, 47), Some(CLEAR));
}

#[test]
fn test_rejected_icon_paints_nothing() {
    let mut ctx = PixmapContext::new(24, 24).unwrap();
    let style = PaintStyle::default().with_stroke_width(-1.0);
    assert!(paint(&mut ctx, IconKind::Lock, Surface::square(24.0), &style).is_err());
    assert_eq!(ctx.finish().coverage(), 0);
}

#[test]
fn test_recorded_commands_replay_like_direct_paint() {
    let surface = Surface::square(32.0);
    let style = PaintStyle::default();

    let mut recording = RecordingContext::new(Size::new(32.0, 32.0));
    paint(&mut recording, IconKind::Lock, surface, &style).unwrap();
    assert_eq!(
        recording.commands().len(),
        render(IconKind::Lock, surface, &style).unwrap().len()
    );
    assert!(matches!(recording.commands()[0], DrawCommand::FillRect { .. }));

    let mut direct = PixmapContext::new(32, 32).unwrap();
    paint(&mut direct, IconKind::Lock, surface, &style).unwrap();

    let mut replayed = PixmapContext::new(32, 32).unwrap();
    for cmd in recording.commands() {
        cmd.replay(&mut replayed);
    }

    assert_eq!(direct.finish().data(), replayed.finish().data());
}
