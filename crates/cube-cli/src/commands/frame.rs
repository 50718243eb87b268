//! Frame command - print the matrices uploaded for one frame

use crate::FrameArgs;
use anyhow::{Context, Result};
use cube_math::MatrixBlock;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: FrameArgs, config: Option<&Path>) -> Result<()> {
    let scene = super::load_scene(config, args.width, args.height)?;
    info!(
        "Frame at t = {}s, viewport {}x{}",
        args.time, scene.viewport.width, scene.viewport.height
    );

    let frame = scene.frame(args.time);

    if args.bytes {
        let mut buf = [0u8; MatrixBlock::SIZE];
        let written = frame
            .matrices()
            .write_to(&mut buf)
            .context("Failed to pack Matrices block")?;
        debug!("Packed {} bytes", written);
        println!("{}", hex_dump(&buf[..written]));
        return Ok(());
    }

    println!("Proj (offset {}):", MatrixBlock::PROJ_OFFSET);
    println!("{}", super::format_mat4(&frame.proj));
    println!("View (offset {}):", MatrixBlock::VIEW_OFFSET);
    println!("{}", super::format_mat4(&frame.view));
    println!("Model:");
    println!("{}", super::format_mat4(&frame.model));

    Ok(())
}

/// 16 bytes per line with a leading offset
fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, line)| {
            let hex: Vec<String> = line.iter().map(|b| format!("{:02x}", b)).collect();
            format!("{:04x}: {}", i * 16, hex.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
