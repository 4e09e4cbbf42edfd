//! Samovar engine crate.
//!
//! This crate owns the GPU runtime pieces behind the teapot viewer: device and
//! surface management, the renderable teapot object (resource lifecycle,
//! interactive orbit/zoom state, draw submission), baked mesh tables, texture
//! loading, and the GPU-profile strategy.

pub mod device;
pub mod profile;

pub mod logging;
pub mod coords;
pub mod mesh;
pub mod texture;
pub mod render;
