//! GPU profile strategy.
//!
//! The viewer runs on desktop-class adapters as well as GLES-class mobile
//! hardware. Instead of compile-time switches, a profile object is chosen
//! once at startup from the adapter and injected into renderers. The profile
//! decides the device limits to request and the shader dialect to compile.

/// Capability strategy chosen once at startup.
///
/// Implementations must be cheap, stateless value objects; renderers hold
/// them only for the duration of initialization.
pub trait GpuProfile {
    /// Short human-readable profile name, used in logs.
    fn name(&self) -> &'static str;

    /// Device limits to request from the adapter.
    fn required_limits(&self) -> wgpu::Limits;

    /// WGSL source for the teapot shader under this profile.
    fn shader_source(&self) -> &'static str;
}

/// Full desktop-class profile (default limits, full shader).
#[derive(Debug, Copy, Clone, Default)]
pub struct Desktop;

/// GLES3-class profile (downlevel limits, full shader).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gles3;

/// GLES2/WebGL2-class profile (strictest limits, fixed-LOD shader variant).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gles2;

impl GpuProfile for Desktop {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn required_limits(&self) -> wgpu::Limits {
        wgpu::Limits::default()
    }

    fn shader_source(&self) -> &'static str {
        include_str!("../render/shaders/teapot.wgsl")
    }
}

impl GpuProfile for Gles3 {
    fn name(&self) -> &'static str {
        "gles3"
    }

    fn required_limits(&self) -> wgpu::Limits {
        wgpu::Limits::downlevel_defaults()
    }

    fn shader_source(&self) -> &'static str {
        include_str!("../render/shaders/teapot.wgsl")
    }
}

impl GpuProfile for Gles2 {
    fn name(&self) -> &'static str {
        "gles2"
    }

    fn required_limits(&self) -> wgpu::Limits {
        wgpu::Limits::downlevel_webgl2_defaults()
    }

    fn shader_source(&self) -> &'static str {
        // Implicit-derivative cube sampling is not reliable on this class of
        // hardware; the variant samples the environment at a fixed LOD.
        include_str!("../render/shaders/teapot_gles.wgsl")
    }
}

/// Selects a profile for the given adapter.
///
/// GL-backed adapters are classified by how their limits compare to the
/// downlevel baselines; everything else gets the desktop profile.
pub fn detect(adapter: &wgpu::Adapter) -> Box<dyn GpuProfile> {
    let info = adapter.get_info();
    if info.backend != wgpu::Backend::Gl {
        return Box::new(Desktop);
    }

    let limits = adapter.limits();
    let es3_baseline = wgpu::Limits::downlevel_defaults();

    if limits.max_texture_dimension_2d >= es3_baseline.max_texture_dimension_2d
        && limits.max_uniform_buffer_binding_size >= es3_baseline.max_uniform_buffer_binding_size
    {
        Box::new(Gles3)
    } else {
        Box::new(Gles2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_tighten_from_desktop_to_gles2() {
        let d = Desktop.required_limits();
        let e3 = Gles3.required_limits();
        let e2 = Gles2.required_limits();

        assert!(e3.max_texture_dimension_2d <= d.max_texture_dimension_2d);
        assert!(e2.max_texture_dimension_2d <= e3.max_texture_dimension_2d);
    }

    #[test]
    fn shader_sources_declare_both_entry_points() {
        for p in [
            Desktop.shader_source(),
            Gles3.shader_source(),
            Gles2.shader_source(),
        ] {
            assert!(p.contains("fn vs_main"));
            assert!(p.contains("fn fs_main"));
        }
    }

    #[test]
    fn gles2_variant_uses_fixed_lod_sampling() {
        assert!(Gles2.shader_source().contains("textureSampleLevel"));
    }
}
