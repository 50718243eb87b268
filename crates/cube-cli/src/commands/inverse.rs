//! Inverse command - compare the general and affine inverse of Model

use crate::InverseArgs;
use anyhow::{Context, Result};
use cube_math::{AFFINE_TOLERANCE, Mat4};
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: InverseArgs, config: Option<&Path>) -> Result<()> {
    let scene = super::load_scene(config, None, None)?;
    let model = scene.frame(args.time).model;
    info!("Model at t = {}s, det = {}", args.time, model.det());

    model
        .validate_affine(AFFINE_TOLERANCE)
        .context("Model is not affine, inverse_trans would be wrong")?;
    debug!("Model passed affine validation");

    let general = model.inverse();
    let fast = model.inverse_trans();

    println!("inverse:");
    println!("{}", super::format_mat4(&general));
    println!("inverse_trans:");
    println!("{}", super::format_mat4(&fast));
    println!("max |difference|: {:e}", max_abs_diff(&general, &fast));

    Ok(())
}

fn max_abs_diff(a: &Mat4, b: &Mat4) -> f32 {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_abs_diff() {
        let a = Mat4::IDENTITY;
        let mut b = Mat4::IDENTITY;
        b[(2, 3)] = -0.25;
        assert_eq!(max_abs_diff(&a, &b), 0.25);
        assert_eq!(max_abs_diff(&a, &a), 0.0);
    }
}
