use super::helpers;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TunnelUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

pub(crate) struct TunnelResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl TunnelResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, view_proj: Mat4, opacity: f32) {
        let u = TunnelUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, opacity.clamp(0.0, 1.0)],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub(crate) fn create_tunnel_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    lines: &[Vec3],
) -> TunnelResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tunnel_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TUNNEL_WGSL.into()),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tunnel_uniforms"),
        size: std::mem::size_of::<TunnelUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let (bgl, bind_group) = helpers::uniform_binding(
        device,
        "tunnel_bg",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
        &uniform_buffer,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tunnel_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertices: Vec<[f32; 3]> = lines.iter().map(|v| v.to_array()).collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tunnel_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let pipeline = helpers::make_blended_pipeline(
        device,
        "tunnel_pipeline",
        &pl,
        &shader,
        ("vs_tunnel", "fs_tunnel"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        },
        wgpu::PrimitiveTopology::LineList,
        color_format,
    );

    TunnelResources {
        pipeline,
        vertex_buffer,
        vertex_count: vertices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
