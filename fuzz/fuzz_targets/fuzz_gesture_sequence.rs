#![no_main]

use glam::{DVec2, DVec3};
use libfuzzer_sys::fuzz_target;
use orbit_view_controller::{InteractiveState, OrbitState, ViewportProps};

fn read_f64(chunks: &mut std::slice::ChunksExact<'_, u8>) -> Option<f64> {
    let bytes: [u8; 8] = chunks.next()?.try_into().ok()?;
    Some(f64::from_le_bytes(bytes))
}

fuzz_target!(|data: &[u8]| {
    let mut chunks = data.chunks_exact(8);

    let props = ViewportProps {
        width: read_f64(&mut chunks),
        height: read_f64(&mut chunks),
        distance: read_f64(&mut chunks),
        fov: read_f64(&mut chunks),
        zoom: read_f64(&mut chunks),
        min_zoom: read_f64(&mut chunks),
        max_zoom: read_f64(&mut chunks),
        look_at: Some(DVec3::new(
            read_f64(&mut chunks).unwrap_or(0.0),
            read_f64(&mut chunks).unwrap_or(0.0),
            read_f64(&mut chunks).unwrap_or(0.0),
        )),
        ..Default::default()
    };
    let mut state: OrbitState = OrbitState::new(props);

    while let (Some(op), Some(x), Some(y), Some(s)) = (
        read_f64(&mut chunks),
        read_f64(&mut chunks),
        read_f64(&mut chunks),
        read_f64(&mut chunks),
    ) {
        let pos = DVec2::new(x, y);
        state = match op.to_bits() % 6 {
            0 => state.pan_start(pos),
            1 => state.pan(pos, None),
            2 => state.pan_end(),
            3 => state.zoom_start(pos),
            4 => state.zoom(pos, None, s),
            _ => state.zoom_end(),
        };

        let params = state.viewport_props();
        assert!(params.look_at.is_finite());
        assert!(params.zoom.is_finite());
        assert!(params.zoom >= params.min_zoom && params.zoom <= params.max_zoom);
    }
});
