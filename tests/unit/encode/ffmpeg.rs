use super::*;

fn cfg(width: u32, height: u32, fps: Fps) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        fps,
        out_path: PathBuf::from("target/out.mp4"),
        overwrite: true,
    }
}

#[test]
fn config_validation_catches_bad_values() {
    let fps = Fps::new(30, 1).unwrap();
    assert!(cfg(0, 10, fps).validate().is_err());
    assert!(cfg(11, 10, fps).validate().is_err());
    assert!(cfg(10, 10, Fps { num: 0, den: 1 }).validate().is_err());
    assert!(cfg(10, 10, fps).validate().is_ok());
}

#[test]
fn flatten_premul_over_black() {
    let src = [128u8, 0, 0, 128];
    let mut dst = [0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, [128, 0, 0, 255]);
}

#[test]
fn flatten_straight_over_black() {
    let src = [255u8, 0, 0, 128];
    let mut dst = [0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, [128, 0, 0, 255]);
}

#[test]
fn flatten_transparent_shows_background() {
    let src = [0u8; 8];
    let mut dst = [0u8; 8];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, [10, 20, 30, 255, 10, 20, 30, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = [0u8; 4];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 8], true, [0; 4]).is_err());
}

#[test]
fn parent_dir_is_created() {
    let dir = std::env::temp_dir().join(format!("ringfield-encode-{}", std::process::id()));
    let out = dir.join("nested").join("a.mp4");
    ensure_parent_dir(&out).unwrap();
    assert!(out.parent().unwrap().is_dir());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn bare_file_name_needs_no_directory() {
    ensure_parent_dir(Path::new("a.mp4")).unwrap();
}
