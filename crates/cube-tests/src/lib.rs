//! Integration tests for the cube crates.
//!
//! These tests check the kernel against `glam` as an independent
//! implementation and run the scene end to end: config file to projected
//! vertices and packed uniform bytes.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cube_math::{Mat4, MatrixBlock, Vec3, Vec4, Vector, deg_to_rad, mod_pi};
    use cube_scene::{CUBE_INDICES, CUBE_VERTICES, Scene, SceneConfig, to_ndc};
    use std::f32::consts::PI;
    use tempfile::tempdir;

    fn assert_mat_close(a: &Mat4, b: &glam::Mat4, eps: f32) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = eps);
        }
    }

    /// Deterministic affine matrices: rotation about a varying axis,
    /// positive non-uniform scale, translation.
    fn affine_samples() -> Vec<Mat4> {
        (0..16)
            .map(|i| {
                let f = i as f32;
                let axis = Vec3::new(1.0 + f, (f * 0.7).sin(), (f * 1.3).cos());
                let scale = Vec3::new(0.5 + f * 0.1, 1.0 + (f * 0.3).sin().abs(), 2.0 - f * 0.05);
                let translation = Vec3::new(f - 8.0, f * 0.25, -f);
                Mat4::create_translate(translation)
                    * Mat4::create_rotation(axis, f * 0.4 - 3.0)
                    * Mat4::create_scale(scale)
            })
            .collect()
    }

    #[test]
    fn test_inverse_against_glam() {
        for m in affine_samples() {
            let g = m.to_glam();
            assert_mat_close(&m.inverse(), &g.inverse(), 1e-4);
            assert_abs_diff_eq!(m.det(), g.determinant(), epsilon = 1e-3);
            assert_mat_close(&(m * m.inverse()), &glam::Mat4::IDENTITY, 1e-4);
            assert_abs_diff_eq!(m.det() * m.inverse().det(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_affine_fast_paths_against_general() {
        let samples = affine_samples();
        for pair in samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let general = a * b;
            let fast = a.mul_trans(&b);
            for (x, y) in general.to_cols_array().iter().zip(fast.to_cols_array().iter()) {
                assert_abs_diff_eq!(*x, *y, epsilon = 1e-3);
            }

            let inv = a.inverse_trans();
            assert_mat_close(&inv, &a.to_glam().inverse(), 1e-4);
            assert_eq!(inv.row(3), Vec4::W);
        }
    }

    #[test]
    fn test_products_against_glam() {
        let samples = affine_samples();
        let proj = Mat4::create_perspective(deg_to_rad(60.0), 4.0 / 3.0, 0.5, 50.0);
        for m in samples {
            let product = proj * m;
            assert_mat_close(&product, &(proj.to_glam() * m.to_glam()), 1e-4);
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn test_constructors_against_glam() {
        let eye = Vec3::new(3.0, 0.0, 3.0);
        assert_mat_close(
            &Mat4::create_look_at(eye, Vec3::ZERO, Vec3::Y),
            &glam::Mat4::look_at_rh(eye.to_glam(), glam::Vec3::ZERO, glam::Vec3::Y),
            1e-5,
        );
        assert_mat_close(
            &Mat4::create_perspective(deg_to_rad(50.0), 1.0, 0.1, 100.0),
            &glam::Mat4::perspective_rh(deg_to_rad(50.0), 1.0, 0.1, 100.0),
            1e-5,
        );
        assert_mat_close(
            &Mat4::create_translate(Vec3::new(1.0, 2.0, 3.0)),
            &glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)),
            0.0,
        );
    }

    #[test]
    fn test_vectors_against_glam() {
        let a = Vec3::new(0.3, -1.2, 2.5);
        let b = Vec3::new(-0.7, 0.4, 1.1);
        assert_abs_diff_eq!(a.dot(b), a.to_glam().dot(b.to_glam()), epsilon = 1e-6);
        assert!(a.cross(b).to_glam().abs_diff_eq(a.to_glam().cross(b.to_glam()), 1e-6));

        let n = a.normalize();
        let g = a.to_glam().normalize();
        assert_abs_diff_eq!(n.x, g.x, epsilon = 1e-6);
        assert_abs_diff_eq!(n.y, g.y, epsilon = 1e-6);
        assert_abs_diff_eq!(n.z, g.z, epsilon = 1e-6);

        let r = a.reflect(Vec3::Y);
        assert!(r.to_glam().abs_diff_eq(a.to_glam().reflect(glam::Vec3::Y), 1e-6));

        let v4 = Vec4::from_vec3(a, 0.0);
        assert_eq!(v4.cross(Vec4::from_vec3(b, 0.0)).xyz(), a.cross(b));
    }

    #[test]
    fn test_mod_pi_wraps() {
        for k in -4..=4 {
            let base = 0.5;
            let wrapped = mod_pi(base + k as f32 * 2.0 * PI);
            assert_abs_diff_eq!(wrapped, base, epsilon = 1e-4);
        }
        // odd multiples of π land on the closed end of [-π, π)
        for k in [-3.0f32, -1.0, 1.0, 3.0] {
            let wrapped = mod_pi(k * PI);
            assert!(wrapped < 0.0, "{k}π -> {wrapped}");
            assert_abs_diff_eq!(wrapped, -PI, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scene_from_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(
            &path,
            "viewport:\n  width: 1600\n  height: 900\nmodel:\n  spin_rate: 0.5\n",
        )
        .unwrap();

        let config = SceneConfig::load(&path).unwrap();
        let scene = Scene::from_config(&config).unwrap();
        let frame = scene.frame(2.0);

        // aspect reaches the projection
        assert_abs_diff_eq!(frame.proj[(1, 1)] / frame.proj[(0, 0)], 1600.0 / 900.0, epsilon = 1e-5);
        // spin_rate 0.5 at t = 2 is one radian
        let expected = Mat4::create_translate(Vec3::new(-0.33, 0.0, 0.0)) * Mat4::create_rotation_z(1.0);
        assert_mat_close(&frame.model, &expected.to_glam(), 1e-6);
    }

    #[test]
    fn test_cube_end_to_end() {
        let scene = Scene::from_config(&SceneConfig::default()).unwrap();

        for step in 0..24 {
            let frame = scene.frame(step as f32 * 0.25);
            let mvp = (frame.proj.to_glam() * frame.view.to_glam()) * frame.model.to_glam();

            for v in CUBE_VERTICES {
                let clip = frame.project_vertex(v.pos);
                let expected = mvp * glam::Vec4::new(v.pos.x, v.pos.y, v.pos.z, 1.0);
                assert_abs_diff_eq!(clip.x, expected.x, epsilon = 1e-4);
                assert_abs_diff_eq!(clip.y, expected.y, epsilon = 1e-4);
                assert_abs_diff_eq!(clip.z, expected.z, epsilon = 1e-4);
                assert_abs_diff_eq!(clip.w, expected.w, epsilon = 1e-4);

                let ndc = to_ndc(clip);
                assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
                assert!(ndc.z > 0.0 && ndc.z < 1.0);
            }
        }
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn test_uniform_upload_bytes() {
        let scene = Scene::from_config(&SceneConfig::default()).unwrap();
        let frame = scene.frame(0.5);

        let mut buf = vec![0u8; MatrixBlock::SIZE];
        frame.matrices().write_to(&mut buf).unwrap();

        // same bytes glam would upload, column-major
        let proj = frame.proj.to_glam().to_cols_array();
        let view = frame.view.to_glam().to_cols_array();
        assert_eq!(&buf[..64], bytemuck::cast_slice::<f32, u8>(&proj));
        assert_eq!(&buf[64..], bytemuck::cast_slice::<f32, u8>(&view));

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
        assert_eq!(vertex_bytes.len(), 8 * 24);
    }
}
