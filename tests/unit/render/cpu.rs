use super::*;

fn sink(w: u32, h: u32) -> CpuSink {
    CpuSink::new(CpuSinkOpts {
        width: w,
        height: h,
        background: Some(Rgba8::opaque(0, 0, 0)),
    })
    .unwrap()
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

fn white(width: f64, glow: Option<Glow>) -> StrokePaint {
    StrokePaint {
        color: Rgba8::WHITE,
        width,
        glow,
    }
}

#[test]
fn rejects_degenerate_dimensions() {
    assert!(
        CpuSink::new(CpuSinkOpts {
            width: 0,
            height: 8,
            background: None
        })
        .is_err()
    );
    assert!(
        CpuSink::new(CpuSinkOpts {
            width: 70_000,
            height: 8,
            background: None
        })
        .is_err()
    );
}

#[test]
fn empty_frame_is_background() {
    let mut s = sink(8, 4);
    let frame = s.finish().unwrap();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn sharp_circle_lights_its_outline_only() {
    let mut s = sink(64, 64);
    s.draw_circle(Point::new(32.0, 32.0), 20.0, &white(4.0, None))
        .unwrap();
    let frame = s.finish().unwrap();

    assert!(pixel(&frame, 52, 32)[0] > 200);
    assert_eq!(pixel(&frame, 32, 32), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 2, 2), [0, 0, 0, 255]);
}

#[test]
fn normal_glow_spreads_past_the_stroke() {
    let glow = Glow {
        radius: 4.0,
        style: GlowStyle::Normal,
    };
    let mut sharp = sink(64, 64);
    sharp
        .draw_circle(Point::new(32.0, 32.0), 20.0, &white(2.0, None))
        .unwrap();
    let sharp = sharp.finish().unwrap();

    let mut glowing = sink(64, 64);
    glowing
        .draw_circle(Point::new(32.0, 32.0), 20.0, &white(2.0, Some(glow)))
        .unwrap();
    let glowing = glowing.finish().unwrap();

    assert_eq!(pixel(&sharp, 57, 32)[0], 0);
    assert!(pixel(&glowing, 57, 32)[0] > 0);
}

#[test]
fn transforms_apply_to_strokes() {
    let mut s = sink(64, 64);
    s.save();
    s.translate(Vec2::new(32.0, 32.0));
    s.draw_circle(Point::ORIGIN, 10.0, &white(4.0, None))
        .unwrap();
    s.restore().unwrap();
    let frame = s.finish().unwrap();
    assert!(pixel(&frame, 42, 32)[0] > 200);
    assert_eq!(pixel(&frame, 10, 10), [0, 0, 0, 255]);
}

#[test]
fn begin_frame_discards_previous_content() {
    let mut s = sink(32, 32);
    s.draw_circle(Point::new(16.0, 16.0), 8.0, &white(3.0, None))
        .unwrap();
    let _ = s.finish().unwrap();
    s.begin_frame();
    let frame = s.finish().unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn unbalanced_restore_errors() {
    let mut s = sink(8, 8);
    assert!(s.restore().is_err());
}
