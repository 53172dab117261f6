use crate::constants::SURFACE_FRAME_LATENCY;
use orb_core::mesh::{orb_mesh, ring_mesh};
use orb_core::{Renderer, ShaderUniforms};
use web_sys as web;

mod helpers;
use helpers::MeshBuffers;

static ORB_WGSL: &str = include_str!("../shaders/orb.wgsl");

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    orb_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    orb: MeshBuffers,
    ring: MeshBuffers,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = helpers::pick_alpha_mode(&caps.alpha_modes);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: SURFACE_FRAME_LATENCY,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orb_shader"),
            source: wgpu::ShaderSource::Wgsl(ORB_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orb_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("orb_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let orb_pipeline = helpers::make_mesh_pipeline(&device, &pl, &shader, "fs_orb", format);
        let ring_pipeline = helpers::make_mesh_pipeline(&device, &pl, &shader, "fs_ring", format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("orb_uniforms"),
            size: std::mem::size_of::<ShaderUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orb_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let orb = helpers::upload_mesh(&device, "orb", &orb_mesh());
        let ring = helpers::upload_mesh(&device, "ring", &ring_mesh());
        log::info!(
            "[render] {:?} {}x{} orb={} ring={} indices",
            format,
            width,
            height,
            orb.index_count,
            ring.index_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            orb_pipeline,
            ring_pipeline,
            uniform_buffer,
            bind_group,
            orb,
            ring,
            width,
            height,
        })
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
        }
    }

    pub fn render(&mut self, uniforms: &ShaderUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let clear = helpers::clear_color(self.config.alpha_mode, uniforms.color1);
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orb_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            for (pipeline, mesh) in [
                (&self.orb_pipeline, &self.orb),
                (&self.ring_pipeline, &self.ring),
            ] {
                rpass.set_pipeline(pipeline);
                rpass.set_vertex_buffer(0, mesh.vertex.slice(..));
                rpass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Renderer for GpuState {
    fn redraw(&mut self, uniforms: &ShaderUniforms) -> anyhow::Result<()> {
        self.render(uniforms)
            .map_err(|e| anyhow::anyhow!("surface error: {:?}", e))
    }
}
