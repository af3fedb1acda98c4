//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (the classic CRT palette)
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const PLAYER_TURRET: [f32; 4] = [0.0, 0.65, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const INVADER_BULLET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const INVADER_FAST: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const INVADER_FAST_CORE: [f32; 4] = [0.65, 0.0, 0.65, 1.0];
    pub const INVADER_NORMAL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const INVADER_NORMAL_CORE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const START_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
