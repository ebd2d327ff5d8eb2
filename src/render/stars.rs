use super::helpers;
use crate::core::geometry::StarInstance;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
    pub(crate) misc: [f32; 4],
}

/// Per-frame inputs for the starfield pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct StarfieldFrame {
    pub opacity: f32,
    pub scale: f32,
    pub z_offset: f32,
}

pub(crate) struct StarResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl StarResources {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        view: Mat4,
        proj: Mat4,
        frame: StarfieldFrame,
        time: f32,
        pixel_ratio: f32,
        viewport: [f32; 2],
    ) {
        let u = StarUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            params: [frame.scale, frame.z_offset, time, pixel_ratio],
            misc: [frame.opacity.clamp(0.0, 1.0), viewport[0], viewport[1], 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    stars: &[StarInstance],
) -> StarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("stars_uniforms"),
        size: std::mem::size_of::<StarUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let (bgl, bind_group) = helpers::uniform_binding(
        device,
        "stars_bg",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
        &uniform_buffer,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("stars_instances"),
        contents: bytemuck::cast_slice(stars),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let pipeline = helpers::make_blended_pipeline(
        device,
        "stars_pipeline",
        &pl,
        &shader,
        ("vs_stars", "fs_stars"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32,
                2 => Float32,
                3 => Float32
            ],
        },
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
    );

    StarResources {
        pipeline,
        instance_buffer,
        instance_count: stars.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
