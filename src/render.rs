//! PNG rendering of a filtered bit graph.
//!
//! Deterministic circular layout, software-rasterized edges and node dots.
//! The contract is "a legible image of the retained component", nothing
//! more; styling knobs are intentionally absent.

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

use crate::graph::BitGraph;
use crate::Result;

/// Output image side length in pixels.
pub const IMG_SIZE: u32 = 1200;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const EDGE_COLOR: Rgba<u8> = Rgba([120, 120, 120, 255]);
const NODE_COLOR: Rgba<u8> = Rgba([30, 60, 160, 255]);
const NODE_RADIUS: i64 = 3;

/// Render `graph` to a PNG at `path`.
pub fn render_png(graph: &BitGraph, path: &Path) -> Result<()> {
    let mut img = RgbaImage::from_pixel(IMG_SIZE, IMG_SIZE, BACKGROUND);
    let positions = circular_layout(graph.node_count());

    for edge in graph.graph.edge_indices() {
        let (a, b) = graph.graph.edge_endpoints(edge).expect("edge exists");
        let (x0, y0) = positions[a.index()];
        let (x1, y1) = positions[b.index()];
        draw_line(&mut img, x0, y0, x1, y1, EDGE_COLOR);
    }
    for &(x, y) in &positions {
        draw_dot(&mut img, x, y, NODE_RADIUS, NODE_COLOR);
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Evenly spaced positions on a circle, node order = angle order.
fn circular_layout(n: usize) -> Vec<(i64, i64)> {
    let center = IMG_SIZE as f64 / 2.0;
    let radius = IMG_SIZE as f64 * 0.45;
    (0..n)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / n.max(1) as f64;
            (
                (center + radius * angle.cos()).round() as i64,
                (center + radius * angle.sin()).round() as i64,
            )
        })
        .collect()
}

/// Bresenham segment clipped to the image bounds.
fn draw_line(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        put_pixel(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Filled disc of the given radius.
fn draw_dot(img: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Rgba<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn put_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
