//! End-to-end tests for the batching pipeline, driven through the
//! headless backend.

use crate::core::config::RendererConfig;
use crate::drawables::{Cube, Drawable, WorldReference};
use crate::foundation::color::colors;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::backends::{DrawCall, HeadlessBackend};
use crate::render::diagnostics::{DiagnosticSeverity, DriverDiagnostic};
use crate::render::{DrawLimits, Renderer, UniformValue, Vertex, VertexData};
use std::path::PathBuf;

fn test_config() -> RendererConfig {
    RendererConfig {
        asset_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..RendererConfig::default()
    }
}

fn test_renderer(limits: DrawLimits) -> Renderer {
    let backend = Box::new(HeadlessBackend::with_limits(limits));
    Renderer::new(backend, &test_config()).expect("renderer construction")
}

fn backend(renderer: &Renderer) -> &HeadlessBackend {
    renderer
        .backend()
        .as_any()
        .downcast_ref::<HeadlessBackend>()
        .expect("headless backend")
}

/// Quad in the XY plane: 4 vertices, 6 indices.
fn quad() -> (VertexData, Vec<u32>) {
    let vertices = VertexData::from_vertices(vec![
        Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0], [1.0; 4], [0.0, 0.0, 1.0]),
        Vertex::new([1.0, 0.0, 0.0], [1.0, 0.0], [1.0; 4], [0.0, 0.0, 1.0]),
        Vertex::new([1.0, 1.0, 0.0], [1.0, 1.0], [1.0; 4], [0.0, 0.0, 1.0]),
        Vertex::new([0.0, 1.0, 0.0], [0.0, 1.0], [1.0; 4], [0.0, 0.0, 1.0]),
    ]);
    (vertices, vec![0, 1, 2, 2, 3, 0])
}

#[test]
fn two_quads_batch_into_one_draw_call() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();

    let (vertices, indices) = quad();
    renderer.push_object(vertices, &indices, &Mat4::identity());
    let (vertices, indices) = quad();
    let translate = Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0));
    renderer.push_object(vertices, &indices, &translate);

    renderer.end_batch().unwrap();

    let stats = renderer.stats();
    assert_eq!(stats.vertices_count, 8);
    assert_eq!(stats.indices_count, 12);
    assert_eq!(stats.draw_calls, 1);

    let backend = backend(&renderer);
    assert_eq!(
        backend.draw_calls(),
        &[DrawCall {
            geometry: crate::render::GeometryHandle(0),
            first_index: 0,
            index_count: 12,
        }]
    );

    // The second quad's indices are rebased by its predecessor's 4 vertices.
    let uploaded = backend.geometry_indices(crate::render::GeometryHandle(0));
    assert_eq!(uploaded, &[0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
}

#[test]
fn camera_uniforms_upload_once_per_frame() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::new(0.0, 2.0, 5.0))
        .unwrap();

    for _ in 0..5 {
        let (vertices, indices) = quad();
        renderer.push_object(vertices, &indices, &Mat4::identity());
    }
    renderer.end_batch().unwrap();

    let vp_updates = backend(&renderer)
        .uniform_log()
        .iter()
        .filter(|(_, name)| name == "u_VP")
        .count();
    assert_eq!(vp_updates, 1);
}

#[test]
fn statistics_are_additive_and_reset_on_begin() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    for _ in 0..3 {
        let (vertices, indices) = quad();
        renderer.push_object(vertices, &indices, &Mat4::identity());
    }
    renderer.end_batch().unwrap();
    assert_eq!(renderer.stats().vertices_count, 12);
    assert_eq!(renderer.stats().indices_count, 18);

    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    assert_eq!(renderer.stats().vertices_count, 0);
    assert_eq!(renderer.stats().indices_count, 0);
    renderer.end_batch().unwrap();
}

#[test]
fn frames_are_isolated() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    let (vertices, indices) = quad();
    renderer.push_object(vertices, &indices, &Mat4::identity());
    renderer.end_batch().unwrap();

    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    renderer.end_batch().unwrap();

    let stats = renderer.stats();
    assert_eq!(stats.vertices_count, 0);
    assert_eq!(stats.indices_count, 0);
    assert_eq!(stats.draw_calls, 0);
    assert!(backend(&renderer)
        .geometry_indices(crate::render::GeometryHandle(0))
        .is_empty());
}

#[test]
fn frame_time_never_reads_zero() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    renderer.end_batch().unwrap();
    assert!(renderer.stats().time_spent >= 1);
}

#[test]
fn oversized_batch_splits_on_triangle_boundaries() {
    let mut renderer = test_renderer(DrawLimits {
        max_indices_per_draw: 8,
    });
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    for _ in 0..2 {
        let (vertices, indices) = quad();
        renderer.push_object(vertices, &indices, &Mat4::identity());
    }
    renderer.end_batch().unwrap();

    // 12 indices with a limit of 8 → triangle-aligned chunks of 6.
    let calls = backend(&renderer).draw_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!((calls[0].first_index, calls[0].index_count), (0, 6));
    assert_eq!((calls[1].first_index, calls[1].index_count), (6, 6));
    assert_eq!(renderer.stats().draw_calls, 2);
}

#[test]
fn benign_driver_notices_are_filtered() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .backend_mut()
        .as_any_mut()
        .downcast_mut::<HeadlessBackend>()
        .unwrap()
        .inject_diagnostic(DriverDiagnostic {
            code: 0x20071,
            severity: DiagnosticSeverity::Notification,
            message: "buffer detailed info".to_string(),
        });

    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    renderer.end_batch().unwrap();
}

#[test]
#[should_panic(expected = "driver error")]
fn unknown_driver_diagnostics_are_fatal() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .backend_mut()
        .as_any_mut()
        .downcast_mut::<HeadlessBackend>()
        .unwrap()
        .inject_diagnostic(DriverDiagnostic {
            code: 0x0502,
            severity: DiagnosticSeverity::High,
            message: "invalid operation".to_string(),
        });

    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    renderer.end_batch().unwrap();
}

#[test]
#[should_panic(expected = "outside an open frame")]
fn push_before_begin_is_fatal() {
    let mut renderer = test_renderer(DrawLimits::default());
    let (vertices, indices) = quad();
    renderer.push_object(vertices, &indices, &Mat4::identity());
}

#[test]
#[should_panic(expected = "still accumulating")]
fn begin_during_open_frame_is_fatal() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();
}

#[test]
fn lighting_state_forwards_to_shader_uniforms() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .set_ambient_light(crate::render::AmbientLight {
            color: colors::WHITE,
            strength: 0.25,
        })
        .unwrap();
    renderer.set_texture_slots(&[0, 1, 2]).unwrap();

    let backend = backend(&renderer);
    let shader = crate::render::ShaderHandle(0);
    assert_eq!(
        backend.uniform(shader, "u_ambientStrength"),
        Some(&UniformValue::Float(0.25))
    );
    assert_eq!(
        backend.uniform(shader, "u_textures"),
        Some(&UniformValue::IntArray(vec![0, 1, 2]))
    );
}

#[test]
fn immediate_draw_uploads_model_matrix() {
    let mut renderer = test_renderer(DrawLimits::default());
    let geometry = renderer.create_geometry().unwrap();
    let (vertices, indices) = quad();
    renderer.upload_geometry(geometry, &vertices, &indices).unwrap();

    let model = Mat4::new_translation(&Vec3::new(0.0, 3.0, 0.0));
    renderer.draw_indexed(geometry, 6, &model).unwrap();

    let backend = backend(&renderer);
    assert_eq!(backend.draw_calls().len(), 1);
    assert_eq!(
        backend.uniform(crate::render::ShaderHandle(0), "u_M"),
        Some(&UniformValue::Mat4(model))
    );
}

#[test]
fn drawables_submit_through_single_dispatch() {
    let mut renderer = test_renderer(DrawLimits::default());
    renderer
        .begin_batch(&Mat4::identity(), Vec3::zeros())
        .unwrap();

    let scene = Drawable::Composite(vec![
        Drawable::Cube(Cube::new(colors::MAGENTA)),
        WorldReference::new(5.0).drawable(),
    ]);
    scene.push_to(&mut renderer);
    renderer.end_batch().unwrap();

    let stats = renderer.stats();
    // One cube + gizmo (platform cube and three cylinders); everything in
    // one draw call regardless of the object count.
    assert!(stats.vertices_count > 24);
    assert_eq!(stats.draw_calls, 1);

    let total = stats.vertices_count;
    let backend = backend(&renderer);
    assert!(backend
        .geometry_indices(crate::render::GeometryHandle(0))
        .iter()
        .all(|&i| u64::from(i) < total));
}
