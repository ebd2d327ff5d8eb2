use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEGREES, CAMERA_NEAR};
use crate::core::geometry::StarInstance;
use crate::core::Camera;
use glam::Vec3;
use web_sys as web;

mod helpers;
mod stars;
mod tunnel;

pub use stars::StarfieldFrame;
use stars::{create_star_resources, StarResources};
use tunnel::{create_tunnel_resources, TunnelResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    tunnel: TunnelResources,
    stars: StarResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera: Camera,
    tunnel_opacity: f32,
    starfield: StarfieldFrame,
    pixel_ratio: f32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        tunnel_lines: &[Vec3],
        stars: &[StarInstance],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let tunnel = create_tunnel_resources(&device, format, tunnel_lines);
        let stars = create_star_resources(&device, format, stars);
        log::info!(
            "[gpu] ready {}x{} format={:?} tunnel_vertices={} stars={}",
            width,
            height,
            format,
            tunnel.vertex_count,
            stars.instance_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            tunnel,
            stars,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
            camera: Camera::new(
                CAMERA_FOV_Y_DEGREES,
                width as f32 / height as f32,
                CAMERA_NEAR,
                CAMERA_FAR,
            ),
            tunnel_opacity: 1.0,
            starfield: StarfieldFrame::default(),
            pixel_ratio: 1.0,
            time_accum: 0.0,
        })
    }

    pub fn set_camera_z(&mut self, z: f32) {
        self.camera.z = z;
    }

    pub fn set_tunnel_opacity(&mut self, opacity: f32) {
        self.tunnel_opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_starfield(&mut self, frame: StarfieldFrame) {
        self.starfield = frame;
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        if ratio.is_finite() && ratio > 0.0 {
            self.pixel_ratio = ratio;
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_aspect_from_size(width, height);
        }
    }

    pub fn render(&mut self, dt_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let view_m = self.camera.view_matrix();
        let proj_m = self.camera.projection_matrix();
        self.tunnel
            .write_uniforms(&self.queue, proj_m * view_m, self.tunnel_opacity);
        self.stars.write_uniforms(
            &self.queue,
            view_m,
            proj_m,
            self.starfield,
            self.time_accum,
            self.pixel_ratio,
            [self.width as f32, self.height as f32],
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if self.tunnel_opacity > 0.0 {
                rpass.set_pipeline(&self.tunnel.pipeline);
                rpass.set_bind_group(0, &self.tunnel.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.tunnel.vertex_buffer.slice(..));
                rpass.draw(0..self.tunnel.vertex_count, 0..1);
            }
            if self.starfield.opacity > 0.0 {
                rpass.set_pipeline(&self.stars.pipeline);
                rpass.set_bind_group(0, &self.stars.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.stars.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.stars.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
