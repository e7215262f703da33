//! WebGPU render pipeline setup

use anyhow::Context;
use wgpu::util::DeviceExt;

use super::canvas::VertexCanvas;
use super::vertex::Vertex;

/// Map a logical canvas point to normalized device coordinates.
///
/// The logical canvas is scaled uniformly to fit the surface and centred,
/// leaving bars on the long axis when the aspect ratios differ.
pub fn logical_to_ndc(logical: (f32, f32), surface: (u32, u32), x: f32, y: f32) -> (f32, f32) {
    let (lw, lh) = logical;
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let scale = (sw / lw).min(sh / lh);
    let offset_x = (sw - lw * scale) / 2.0;
    let offset_y = (sh - lh * scale) / 2.0;

    let px = x * scale + offset_x;
    let py = y * scale + offset_y;
    (px / sw * 2.0 - 1.0, 1.0 - py / sh * 2.0)
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    /// Surface size in physical pixels
    pub size: (u32, u32),
    /// Logical canvas reported by the game's layout
    pub logical_size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pong-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .context("request device")?;

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Create initial vertex buffer (will be replaced each frame)
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vertex_buffer"),
            contents: bytemuck::cast_slice(&[Vertex::new(0.0, 0.0, [1.0; 4])]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_count: 0,
            size: (width, height),
            logical_size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size (after `Lost`/`Outdated`)
    pub fn reconfigure(&mut self) {
        let (w, h) = self.size;
        self.resize(w, h);
    }

    pub fn set_logical_size(&mut self, width: u32, height: u32) {
        self.logical_size = (width.max(1), height.max(1));
    }

    /// Upload the canvas geometry and present it
    pub fn render(&mut self, canvas: &VertexCanvas) -> Result<(), wgpu::SurfaceError> {
        let logical = (self.logical_size.0 as f32, self.logical_size.1 as f32);
        let surface_size = (self.config.width, self.config.height);

        let ndc_vertices: Vec<Vertex> = canvas
            .vertices
            .iter()
            .map(|v| {
                let (x, y) = logical_to_ndc(logical, surface_size, v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect();

        if !ndc_vertices.is_empty() {
            self.vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&ndc_vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
        }
        self.vertex_count = ndc_vertices.len() as u32;

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        let [r, g, b, a] = canvas.clear_color;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertex_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners_same_aspect() {
        let logical = (640.0, 480.0);
        assert_eq!(logical_to_ndc(logical, (1280, 960), 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(logical_to_ndc(logical, (1280, 960), 640.0, 480.0), (1.0, -1.0));
        assert_eq!(logical_to_ndc(logical, (640, 480), 320.0, 240.0), (0.0, 0.0));
    }

    #[test]
    fn test_ndc_letterboxes_wide_surface() {
        // 4:3 canvas on a 2:1 surface: bars left and right
        let (x0, y0) = logical_to_ndc((640.0, 480.0), (960, 480), 0.0, 0.0);
        let (x1, y1) = logical_to_ndc((640.0, 480.0), (960, 480), 640.0, 480.0);
        assert!((x0 + 2.0 / 3.0).abs() < 1e-6);
        assert!((x1 - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!((y0, y1), (1.0, -1.0));
    }
}
