//! Project command - run points through Proj * View * Model

use crate::ProjectArgs;
use anyhow::Result;
use cube_math::Vec3;
use cube_scene::{CUBE_VERTICES, to_ndc};
use std::path::Path;
use tracing::{debug, info, warn};

pub fn run(args: ProjectArgs, config: Option<&Path>) -> Result<()> {
    let scene = super::load_scene(config, None, None)?;
    let frame = scene.frame(args.time);

    let points: Vec<Vec3> = match (args.x, args.y, args.z) {
        (None, None, None) => CUBE_VERTICES.iter().map(|v| v.pos).collect(),
        (x, y, z) => vec![Vec3::new(x.unwrap_or(0.0), y.unwrap_or(0.0), z.unwrap_or(0.0))],
    };
    info!("Projecting {} point(s) at t = {}s", points.len(), args.time);
    debug!("MVP:\n{}", super::format_mat4(&frame.mvp()));

    println!("{:>26}  {:>38}  {:>26}", "object", "clip", "ndc");
    for p in points {
        let clip = frame.project_vertex(p);
        let ndc = to_ndc(clip);
        println!(
            "({:>7.3} {:>7.3} {:>7.3})  ({:>8.4} {:>8.4} {:>8.4} {:>8.4})  ({:>7.4} {:>7.4} {:>7.4})",
            p.x, p.y, p.z, clip.x, clip.y, clip.z, clip.w, ndc.x, ndc.y, ndc.z
        );
        if clip.w <= 0.0 {
            warn!("Point {:?} is behind the camera", p.to_array());
        } else if !in_view(ndc) {
            warn!("Point {:?} is outside the view volume", p.to_array());
        }
    }

    Ok(())
}

fn in_view(ndc: Vec3) -> bool {
    ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z)
}
