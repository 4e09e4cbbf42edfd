use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::mesh::{self, Vertex};
use crate::profile::GpuProfile;
use crate::texture;

use super::orbit::OrbitState;
use super::{RenderCtx, RenderTarget};

/// Vertical field of view at zoom 1.0, degrees. Zoom divides it: zooming
/// narrows the FOV instead of moving the camera (dolly-zoom feel).
const FOV_Y_DEG: f32 = 45.0;

/// Projection clip planes.
const Z_NEAR: f32 = 10.0;
const Z_FAR: f32 = 500.0;

/// Model offset below the orbit pivot.
const MODEL_DROP_Y: f32 = -20.0;

/// Matrix block uploaded to the vertex stage each frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TeapotUniforms {
    world: [[f32; 4]; 4],
    world_inverse_transpose: [[f32; 4]; 4],
    world_view_proj: [[f32; 4]; 4],
    view_inverse: [[f32; 4]; 4],
}

/// GPU resources acquired by `init` and released together when the teapot is
/// dropped. Stored only after every acquisition step succeeds, so a failed
/// `init` leaks nothing.
struct TeapotResources {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    // Textures are kept alive alongside their views.
    _env_texture: wgpu::Texture,
    _bump_texture: wgpu::Texture,
}

/// The renderable teapot: GPU resources plus interactive orbit/zoom state.
///
/// Lifecycle: constructed in the default state, armed by a successful
/// [`Teapot::init`], then driven by mutate/[`Teapot::draw`] cycles until
/// dropped. Drawing before initialization is a logged no-op.
#[derive(Default)]
pub struct Teapot {
    orbit: OrbitState,
    resources: Option<TeapotResources>,
}

impl Teapot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `init` has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.resources.is_some()
    }

    /// Acquires every GPU resource the teapot needs:
    ///
    /// 1. interleaves the baked attribute tables and uploads vertex/index
    ///    buffers (upload-once, GPU-resident),
    /// 2. loads the environment cubemap and the bump map from `asset_dir`
    ///    (any missing or unreadable image fails initialization),
    /// 3. compiles the profile's shader and builds the render pipeline inside
    ///    a validation error scope (a rejected shader fails initialization),
    /// 4. writes an initial matrix set for the current viewport.
    ///
    /// On error nothing is retained; a later retry starts from scratch.
    pub fn init(
        &mut self,
        ctx: &RenderCtx<'_>,
        profile: &dyn GpuProfile,
        asset_dir: &Path,
    ) -> Result<()> {
        let vertices = mesh::teapot_vertices();
        let indices = mesh::teapot_indices();
        log::debug!(
            "teapot mesh: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("samovar teapot vbo"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("samovar teapot ibo"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let (env_texture, env_view) = texture::load_cubemap(ctx.device, ctx.queue, asset_dir)
            .context("environment cubemap")?;
        let (bump_texture, bump_view) =
            texture::load_bump(ctx.device, ctx.queue, asset_dir).context("bump map")?;

        let env_sampler = texture::env_sampler(ctx.device);
        let bump_sampler = texture::bump_sampler(ctx.device);

        // Shader + pipeline creation runs inside a validation scope so a
        // rejected shader surfaces as an `init` error instead of an
        // uncaptured log line. The guard must stay alive until `pop`.
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("samovar teapot shader"),
                source: wgpu::ShaderSource::Wgsl(profile.shader_source().into()),
            });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("samovar teapot bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: Some(uniform_min_binding_size()),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 3,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::Cube,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 4,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("samovar teapot pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("samovar teapot pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
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

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: ctx.depth_format,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            anyhow::bail!(
                "teapot shader/pipeline rejected under the {} profile: {err}",
                profile.name()
            );
        }

        let uniforms = compute_uniforms(&self.orbit, ctx.viewport.aspect_ratio());
        let uniform_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("samovar teapot ubo"),
                contents: bytemuck::bytes_of(&uniforms),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("samovar teapot bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&bump_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&bump_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&env_view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&env_sampler),
                },
            ],
        });

        // Every fallible step is behind us. Until this point all GPU handles
        // live in locals, so any error return above drops them and leaves the
        // teapot in its uninitialized state.
        self.resources = Some(TeapotResources {
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            _env_texture: env_texture,
            _bump_texture: bump_texture,
        });

        log::info!("teapot initialized ({} profile)", profile.name());
        Ok(())
    }

    /// Buffers a relative object rotation.
    pub fn rotate_by(&mut self, dyaw: f32, dpitch: f32) {
        self.orbit.rotate_by(dyaw, dpitch);
    }

    /// Sets the object yaw absolutely.
    pub fn rotate_to(&mut self, yaw: f32) {
        self.orbit.rotate_to(yaw);
    }

    /// Buffers a relative camera orbit.
    pub fn rotate_camera_by(&mut self, dyaw: f32, dpitch: f32) {
        self.orbit.rotate_camera_by(dyaw, dpitch);
    }

    /// Sets the camera yaw absolutely.
    pub fn rotate_camera_to(&mut self, yaw: f32) {
        self.orbit.rotate_camera_to(yaw);
    }

    /// Buffers a relative zoom change (suppresses same-batch rotations).
    pub fn zoom_by(&mut self, dzoom: f32) {
        self.orbit.zoom_by(dzoom);
    }

    /// Current zoom scalar.
    pub fn zoom_value(&self) -> f32 {
        self.orbit.zoom()
    }

    /// Applies buffered input, recomputes the matrix set for the current
    /// viewport, and records one indexed draw into `target`.
    ///
    /// Submission and presentation belong to the host; GPU errors surface
    /// through the device's uncaptured-error log handler and never abort the
    /// frame.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let Some(res) = self.resources.as_ref() else {
            log::error!("Teapot::draw called before successful init; skipping");
            return;
        };

        self.orbit.apply_pending();

        let uniforms = compute_uniforms(&self.orbit, ctx.viewport.aspect_ratio());
        ctx.queue
            .write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("samovar teapot pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&res.pipeline);
        rpass.set_bind_group(0, &res.bind_group, &[]);
        rpass.set_vertex_buffer(0, res.vertex_buffer.slice(..));
        rpass.set_index_buffer(res.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..res.index_count, 0, 0..1);
    }
}

/// Returns the minimum binding size for the uniform buffer.
///
/// `TeapotUniforms` holds four `mat4x4<f32>` so its size is always non-zero.
fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<TeapotUniforms>() as u64)
        .expect("TeapotUniforms has non-zero size by construction")
}

/// Recomputes the full matrix set from the orbit state and viewport aspect.
///
/// The model drops below the pivot, pitches about the side axis, yaws about
/// the up axis, and finally rotates -90 degrees about X to stand the Z-up
/// baked geometry upright.
fn compute_uniforms(orbit: &OrbitState, aspect: f32) -> TeapotUniforms {
    let eye = orbit.camera_position();

    let projection = Mat4::perspective_rh(
        (FOV_Y_DEG / orbit.zoom()).to_radians(),
        aspect,
        Z_NEAR,
        Z_FAR,
    );
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let model = Mat4::from_translation(Vec3::new(0.0, MODEL_DROP_Y, 0.0))
        * Mat4::from_rotation_z(orbit.pitch())
        * Mat4::from_rotation_y(-orbit.yaw())
        * Mat4::from_rotation_x(-FRAC_PI_2);

    TeapotUniforms {
        world: model.to_cols_array_2d(),
        world_inverse_transpose: model.inverse().transpose().to_cols_array_2d(),
        world_view_proj: (projection * view * model).to_cols_array_2d(),
        view_inverse: view.inverse().to_cols_array_2d(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(cols: [[f32; 4]; 4]) -> Mat4 {
        Mat4::from_cols_array_2d(&cols)
    }

    fn approx_eq(a: Mat4, b: Mat4, eps: f32) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array())
            .all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn uniform_block_is_four_matrices() {
        assert_eq!(std::mem::size_of::<TeapotUniforms>(), 4 * 64);
    }

    #[test]
    fn world_matrix_drops_the_model_below_the_pivot() {
        let u = compute_uniforms(&OrbitState::new(), 1.6);
        let world = mat(u.world);
        let origin = world.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, MODEL_DROP_Y, 0.0)).length() < 1e-5);
    }

    #[test]
    fn world_matrix_stands_z_up_geometry_upright() {
        let u = compute_uniforms(&OrbitState::new(), 1.0);
        let world = mat(u.world);
        // The baked +Z axis (teapot "up") maps to world +Y.
        let up = world.transform_vector3(Vec3::Z);
        assert!((up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn inverse_transpose_matches_its_definition() {
        let mut orbit = OrbitState::new();
        orbit.rotate_by(0.8, -0.3);
        orbit.apply_pending();

        let u = compute_uniforms(&orbit, 1.6);
        let world = mat(u.world);
        let expected = world.inverse().transpose();
        assert!(approx_eq(mat(u.world_inverse_transpose), expected, 1e-5));
    }

    #[test]
    fn view_inverse_carries_the_camera_position() {
        let mut orbit = OrbitState::new();
        orbit.rotate_camera_by(0.5, -0.2);
        orbit.apply_pending();

        let u = compute_uniforms(&orbit, 1.6);
        let view_inverse = mat(u.view_inverse);
        let eye_from_matrix = view_inverse.transform_point3(Vec3::ZERO);
        assert!((eye_from_matrix - orbit.camera_position()).length() < 1e-3);
    }

    #[test]
    fn mvp_composes_projection_view_model() {
        let u = compute_uniforms(&OrbitState::new(), 1.6);
        let view = mat(u.view_inverse).inverse();
        let world = mat(u.world);
        let projection = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), 1.6, Z_NEAR, Z_FAR);
        assert!(approx_eq(mat(u.world_view_proj), projection * view * world, 1e-3));
    }

    #[test]
    fn zoom_narrows_the_field_of_view() {
        let mut orbit = OrbitState::new();
        orbit.zoom_by(2.0); // clamps to 3.0
        orbit.apply_pending();

        // Recover the projection from mvp = P * V * M.
        let focal_scale = |u: &TeapotUniforms| {
            let view = mat(u.view_inverse).inverse();
            let world = mat(u.world);
            let projection = mat(u.world_view_proj) * (view * world).inverse();
            projection.x_axis.x
        };

        let wide = compute_uniforms(&OrbitState::new(), 1.0);
        let narrow = compute_uniforms(&orbit, 1.0);
        assert!(focal_scale(&narrow) > focal_scale(&wide));
    }

    #[test]
    fn draw_before_init_is_a_guarded_no_op() {
        let teapot = Teapot::new();
        assert!(!teapot.is_initialized());
        // The draw guard itself needs a device; state-side behavior is what
        // we can check here.
        assert_eq!(teapot.zoom_value(), 1.0);
    }
}
