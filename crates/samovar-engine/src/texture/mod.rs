//! Image file → GPU texture upload.
//!
//! The viewer reads exactly seven images from the asset directory: six cube
//! faces for the environment map and one bump map. A failed load is a hard
//! error carrying the offending path; renderer initialization must not
//! proceed with undefined texture contents.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Cube face files in wgpu layer order (+X, -X, +Y, -Y, +Z, -Z).
pub const CUBE_FACE_FILES: [&str; 6] = [
    "skybox-posx.jpg",
    "skybox-negx.jpg",
    "skybox-posy.jpg",
    "skybox-negy.jpg",
    "skybox-posz.jpg",
    "skybox-negz.jpg",
];

/// Bump (normal-perturbation) map file.
pub const BUMP_FILE: &str = "bump.jpg";

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?;
    Ok(img.to_rgba8())
}

fn write_layer(queue: &wgpu::Queue, texture: &wgpu::Texture, layer: u32, img: &RgbaImage) {
    let (w, h) = img.dimensions();
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d { x: 0, y: 0, z: layer },
            aspect: wgpu::TextureAspect::All,
        },
        img.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * w),
            rows_per_image: Some(h),
        },
        wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
    );
}

/// Loads the six cube faces into an environment cubemap.
///
/// All faces must be square and share the same dimensions.
pub fn load_cubemap(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    dir: &Path,
) -> Result<(wgpu::Texture, wgpu::TextureView)> {
    let mut faces = Vec::with_capacity(CUBE_FACE_FILES.len());
    for name in CUBE_FACE_FILES {
        faces.push(load_rgba(&dir.join(name))?);
    }

    let (w, h) = faces[0].dimensions();
    anyhow::ensure!(w == h, "cube faces must be square, got {w}x{h}");
    for (name, face) in CUBE_FACE_FILES.iter().zip(&faces) {
        anyhow::ensure!(
            face.dimensions() == (w, h),
            "cube face {name} has mismatched dimensions {:?}, expected {w}x{h}",
            face.dimensions()
        );
    }

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("samovar env cubemap"),
        size: wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (layer, face) in faces.iter().enumerate() {
        write_layer(queue, &texture, layer as u32, face);
    }

    let view = texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("samovar env cubemap view"),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    });

    Ok((texture, view))
}

/// Loads the bump map into a 2D texture.
///
/// Stored linearly (not sRGB): the channels encode normal perturbation, not
/// color.
pub fn load_bump(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    dir: &Path,
) -> Result<(wgpu::Texture, wgpu::TextureView)> {
    let img = load_rgba(&dir.join(BUMP_FILE))?;
    let (w, h) = img.dimensions();

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("samovar bump texture"),
        size: wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    write_layer(queue, &texture, 0, &img);

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Ok((texture, view))
}

/// Clamp-to-edge linear sampler for the environment cubemap.
pub fn env_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("samovar env sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    })
}

/// Repeating linear sampler for the bump map.
pub fn bump_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("samovar bump sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    })
}
