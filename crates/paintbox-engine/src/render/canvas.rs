use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::context::{AttribHandle, BufferHandle, GraphicsContext, Topology, UniformHandle};
use super::error::InitError;
use super::frame::{CanvasVertex, RecordedFrame, UniformSlots};
use super::program::{Program, ShaderSource, UNIFORM_FRAG_COLOR, UNIFORM_POINT_SIZE};

/// wgpu-backed [`GraphicsContext`].
///
/// Calls are recorded into a frame (vertex data + one op per draw call) and
/// replayed by [`present`](Self::present), which clears to the recorded clear
/// color and issues the ops in record order. The recorded frame survives until
/// the next [`clear_frame`](GraphicsContext::clear_frame), so presenting every
/// frame shows the same picture.
///
/// wgpu has neither triangle fans nor a point-size builtin:
/// - fans are expanded to triangle lists on the CPU
/// - points become screen-aligned quads sized by the point-size uniform (logical px)
///
/// Vertex buffers handed out by `allocate_vertex_buffer` are CPU staging
/// buffers released at the next frame clear. Recording itself lives in
/// [`RecordedFrame`]; this type owns the GPU side.
pub struct GpuCanvas {
    device: wgpu::Device,
    surface_format: wgpu::TextureFormat,

    sources: Option<(String, String)>,
    next_program: u32,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,

    uniform_buffer: Option<wgpu::Buffer>,
    uniform_capacity: usize,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    frame: RecordedFrame,
}

impl GpuCanvas {
    pub fn new(device: wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            surface_format,
            sources: None,
            next_program: 0,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_buffer: None,
            uniform_capacity: 0,
            vertex_buffer: None,
            vertex_capacity: 0,
            frame: RecordedFrame::default(),
        }
    }

    /// Encodes the recorded frame into `target`.
    pub fn present(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);

        let stride = self.uniform_stride();
        if !self.frame.ops.is_empty() {
            self.ensure_vertex_capacity(ctx, self.frame.vertices.len());
            self.ensure_uniform_capacity(ctx, self.frame.ops.len());
            self.write_frame(ctx, stride);
        }

        let clear = self.frame.clear;
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("paintbox canvas pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: clear.a as f64,
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

        if self.frame.ops.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));

        for (i, op) in self.frame.ops.iter().enumerate() {
            rpass.set_bind_group(0, bind_group, &[(i * stride) as u32]);
            rpass.draw(op.first_vertex..op.first_vertex + op.vertex_count, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn uniform_stride(&self) -> usize {
        let align = self.device.limits().min_uniform_buffer_offset_alignment as usize;
        std::mem::size_of::<DrawUniform>().next_multiple_of(align.max(1))
    }

    fn build_pipeline(&mut self, vertex: &str, fragment: &str, format: wgpu::TextureFormat) {
        let vs = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("paintbox canvas vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vertex.into()),
        });
        let fs = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("paintbox canvas fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fragment.into()),
        });

        let bind_group_layout =
            self.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("paintbox canvas bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: Some(draw_uniform_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            self.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("paintbox canvas pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("paintbox canvas pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CanvasVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
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

        self.pipeline_format = Some(format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        // The bind group references the old layout.
        self.bind_group = None;
        self.uniform_buffer = None;
        self.uniform_capacity = 0;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        let Some((vertex, fragment)) = self.sources.clone() else { return };

        log::debug!("rebuilding canvas pipeline for {:?}", ctx.surface_format);
        self.surface_format = ctx.surface_format;
        self.build_pipeline(&vertex, &fragment, ctx.surface_format);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_buffer.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(256);
        self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("paintbox canvas vbo"),
            size: (new_cap * std::mem::size_of::<CanvasVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.uniform_capacity && self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(64);
        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("paintbox canvas draw ubo"),
            size: (new_cap * self.uniform_stride()) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("paintbox canvas bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: Some(draw_uniform_binding_size()),
                }),
            }],
        });

        self.uniform_buffer = Some(buffer);
        self.bind_group = Some(bind_group);
        self.uniform_capacity = new_cap;
    }

    fn write_frame(&self, ctx: &RenderCtx<'_>, stride: usize) {
        let (Some(vbo), Some(ubo)) = (self.vertex_buffer.as_ref(), self.uniform_buffer.as_ref())
        else {
            return;
        };

        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.frame.vertices));

        let viewport = [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)];
        let mut bytes = vec![0u8; self.frame.ops.len() * stride];
        for (i, op) in self.frame.ops.iter().enumerate() {
            let uniform = DrawUniform {
                frag_color: op.color.to_array(),
                viewport,
                point_size: op.point_size,
                _pad: 0.0,
            };
            let at = i * stride;
            bytes[at..at + std::mem::size_of::<DrawUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&uniform));
        }
        ctx.queue.write_buffer(ubo, 0, &bytes);
    }
}

impl GraphicsContext for GpuCanvas {
    fn compile_program(&mut self, source: &ShaderSource<'_>) -> Result<Program, InitError> {
        for (stage, src, entry) in [
            ("vertex", source.vertex, "vs_main"),
            ("fragment", source.fragment, "fs_main"),
        ] {
            if !src.contains(&format!("fn {entry}")) {
                return Err(InitError::Compile(format!(
                    "{stage} shader has no `{entry}` entry point"
                )));
            }
        }

        let slots = UniformSlots {
            frag_color: source
                .interface
                .uniform(UNIFORM_FRAG_COLOR)
                .ok_or_else(|| InitError::MissingUniform(UNIFORM_FRAG_COLOR.to_string()))?,
            point_size: source
                .interface
                .uniform(UNIFORM_POINT_SIZE)
                .ok_or_else(|| InitError::MissingUniform(UNIFORM_POINT_SIZE.to_string()))?,
        };

        self.build_pipeline(source.vertex, source.fragment, self.surface_format);
        self.sources = Some((source.vertex.to_string(), source.fragment.to_string()));
        self.frame.use_program(slots, source.interface.uniforms.len());

        let id = self.next_program;
        self.next_program += 1;
        log::debug!("compiled canvas program {id} for {:?}", self.surface_format);

        Ok(Program { id, interface: source.interface })
    }

    fn attribute_handle(&self, program: &Program, name: &str) -> Option<AttribHandle> {
        program.interface.attribute(name)
    }

    fn uniform_handle(&self, program: &Program, name: &str) -> Option<UniformHandle> {
        program.interface.uniform(name)
    }

    fn set_immediate_vertex_attribute(&mut self, _handle: AttribHandle, x: f32, y: f32, z: f32) {
        self.frame.set_immediate([x, y, z]);
    }

    fn set_uniform_color(&mut self, handle: UniformHandle, color: Color) {
        self.frame.set_color(handle, color);
    }

    fn set_uniform_float(&mut self, handle: UniformHandle, value: f32) {
        self.frame.set_float(handle, value);
    }

    fn allocate_vertex_buffer(&mut self, data: &[f32]) -> BufferHandle {
        self.frame.allocate(data)
    }

    fn bind_vertex_buffer(&mut self, buffer: BufferHandle, _attribute: AttribHandle) {
        self.frame.bind(buffer);
    }

    fn unbind_vertex_buffer(&mut self) {
        self.frame.unbind();
    }

    fn draw_primitives(&mut self, topology: Topology, vertex_count: u32) {
        self.frame.draw(topology, vertex_count);
    }

    fn clear_frame(&mut self, color: Color) {
        self.frame.clear(color);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Per-draw uniform block (32 bytes), bound with a dynamic offset.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawUniform {
    frag_color: [f32; 4],
    viewport: [f32; 2],
    point_size: f32,
    _pad: f32,
}

fn draw_uniform_binding_size() -> wgpu::BufferSize {
    const SIZE: wgpu::BufferSize = match wgpu::BufferSize::new(std::mem::size_of::<DrawUniform>() as u64) {
        Some(size) => size,
        None => panic!("DrawUniform is not zero-sized"),
    };
    SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<DrawUniform>(), 32);
        assert_eq!(draw_uniform_binding_size().get(), 32);
    }
}
