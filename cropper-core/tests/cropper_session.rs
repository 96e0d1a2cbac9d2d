use cropper_core::{
    decode_data_uri, CanvasSize, Cropper, CropperConfig, LoadState, Orientation, PointerInput,
    RasterSurface, Surface, ViewportConfig,
};
use image::{Rgba, RgbaImage};

fn photo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn loaded_cropper(config: CropperConfig, image: RgbaImage) -> Cropper<RasterSurface> {
    let mut cropper = Cropper::new(RasterSurface::new(CanvasSize::new(0, 0)), config);
    cropper
        .finish_load(LoadState::from_result::<String>(Ok(image)))
        .unwrap();
    cropper
}

#[test]
fn consecutive_redraws_are_bit_identical() {
    let mut cropper = loaded_cropper(CropperConfig::default(), photo(731, 529));
    cropper.zoom_by(37.0).unwrap();
    cropper.handle_pointer(PointerInput::Down { x: 3.0, y: 4.0 }).unwrap();
    cropper.handle_pointer(PointerInput::Move { x: 40.0, y: -11.0 }).unwrap();

    cropper.redraw().unwrap();
    let first = cropper.surface().read_pixels().unwrap();
    cropper.redraw().unwrap();
    let second = cropper.surface().read_pixels().unwrap();

    assert_eq!(first, second);
}

#[test]
fn presets_set_exact_canvas_sizes() {
    let mut cropper = loaded_cropper(CropperConfig::default(), photo(640, 480));

    assert_eq!(
        cropper.set_orientation("wide").unwrap(),
        Some(CanvasSize::new(400, 250))
    );
    assert_eq!(cropper.surface().size(), CanvasSize::new(400, 250));

    assert_eq!(cropper.set_orientation("banana").unwrap(), None);
    assert_eq!(cropper.canvas_size(), CanvasSize::new(400, 250));
    assert_eq!(cropper.surface().size(), CanvasSize::new(400, 250));

    for orientation in Orientation::ALL {
        let size = cropper.set_orientation(orientation.id()).unwrap();
        assert_eq!(size, Some(orientation.canvas_size()));
    }
}

#[test]
fn export_is_labelled_as_binary_stream() {
    let cropper = loaded_cropper(CropperConfig::default(), photo(100, 100));
    let uri = cropper.export().unwrap();

    assert!(uri.starts_with("data:application/octet-stream"));
    assert!(!uri.starts_with("data:image/png"));
}

#[test]
fn export_matches_visible_region() {
    let image = photo(400, 400);
    let cropper = loaded_cropper(CropperConfig::default(), image.clone());

    let bytes = decode_data_uri(&cropper.export().unwrap()).unwrap();
    let exported = image::load_from_memory(&bytes).unwrap().to_rgba8();

    // 400×400 image on the 400×400 start canvas: fit gives a 1:1 copy.
    assert_eq!(exported, image);
}

#[test]
fn failed_load_keeps_cropper_inert() {
    let mut cropper = Cropper::new(
        RasterSurface::new(CanvasSize::new(0, 0)),
        CropperConfig::default(),
    );
    cropper
        .finish_load(LoadState::from_result(Err::<RgbaImage, _>("decode error")))
        .unwrap();

    assert_eq!(cropper.load_state().failure(), Some("decode error"));
    cropper.handle_pointer(PointerInput::Wheel { delta_y: 120.0 }).unwrap();
    cropper.reset_orientation().unwrap();

    let pixels = cropper.surface().read_pixels().unwrap();
    assert!(pixels.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut a = loaded_cropper(CropperConfig::default(), photo(400, 400));
    let b = loaded_cropper(CropperConfig::default(), photo(400, 400));

    a.handle_pointer(PointerInput::Down { x: 0.0, y: 0.0 }).unwrap();
    a.handle_pointer(PointerInput::Move { x: 25.0, y: 25.0 }).unwrap();

    assert_ne!(a.state(), b.state());
    assert!(a.drag_state().is_dragging());
    assert!(!b.drag_state().is_dragging());
}

#[test]
fn clamped_config_keeps_drag_inside_image() {
    let config = CropperConfig {
        viewport: ViewportConfig {
            clamp_to_bounds: true,
            ..ViewportConfig::default()
        },
        ..CropperConfig::default()
    };
    let mut cropper = loaded_cropper(config, photo(800, 800));
    cropper.zoom_by(100.0).unwrap(); // zoom 2 → 1

    cropper.handle_pointer(PointerInput::Down { x: 0.0, y: 0.0 }).unwrap();
    cropper.handle_pointer(PointerInput::Move { x: 5000.0, y: 5000.0 }).unwrap();

    let state = cropper.state();
    assert_eq!(state.offset_x(), 0.0);
    assert_eq!(state.offset_y(), 0.0);

    // The whole canvas is covered by image pixels, no background.
    let pixels = cropper.surface().read_pixels().unwrap();
    assert_eq!(pixels.get_pixel(399, 399).0, [143, 143, 30, 255]);
}

#[test]
fn config_from_json_drives_initial_orientation() {
    let config = CropperConfig::from_json(r#"{ "initial_orientation": "high" }"#).unwrap();
    let cropper = Cropper::new(RasterSurface::new(CanvasSize::new(1, 1)), config);
    assert_eq!(cropper.canvas_size(), CanvasSize::new(250, 400));
}
