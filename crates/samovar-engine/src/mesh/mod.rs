//! Teapot mesh: baked attribute tables and the interleaved vertex layout.
//!
//! The geometry ships as five parallel per-vertex tables (position, normal,
//! tangent, binormal, texcoord — three floats each) plus a u16 triangle-list
//! index table. Interleaving happens once at renderer initialization.

mod teapot_data;
mod vertex;

pub use vertex::Vertex;

/// Zips the five parallel attribute tables into an interleaved vertex slab.
///
/// The vertex count is the position table length divided by three; all five
/// tables must agree on it.
pub fn interleave(
    positions: &[f32],
    normals: &[f32],
    tangents: &[f32],
    binormals: &[f32],
    texcoords: &[f32],
) -> Vec<Vertex> {
    let count = positions.len() / 3;
    assert_eq!(positions.len(), count * 3);
    assert_eq!(normals.len(), count * 3);
    assert_eq!(tangents.len(), count * 3);
    assert_eq!(binormals.len(), count * 3);
    assert_eq!(texcoords.len(), count * 3);

    let vec3 = |table: &[f32], i: usize| -> [f32; 3] {
        [table[3 * i], table[3 * i + 1], table[3 * i + 2]]
    };

    (0..count)
        .map(|i| Vertex {
            position: vec3(positions, i),
            normal: vec3(normals, i),
            tangent: vec3(tangents, i),
            binormal: vec3(binormals, i),
            texcoord: vec3(texcoords, i),
        })
        .collect()
}

/// Interleaves the baked teapot tables.
pub fn teapot_vertices() -> Vec<Vertex> {
    interleave(
        &teapot_data::TEAPOT_POSITIONS,
        &teapot_data::TEAPOT_NORMALS,
        &teapot_data::TEAPOT_TANGENTS,
        &teapot_data::TEAPOT_BINORMALS,
        &teapot_data::TEAPOT_TEXCOORDS,
    )
}

/// Baked teapot triangle-list indices.
pub fn teapot_indices() -> &'static [u16] {
    &teapot_data::TEAPOT_INDICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_five_vec3s() {
        assert_eq!(std::mem::size_of::<Vertex>(), 60);
        assert_eq!(Vertex::layout().array_stride, 60);
    }

    #[test]
    fn vertex_field_offsets_match_attribute_order() {
        assert_eq!(std::mem::offset_of!(Vertex, position), 0);
        assert_eq!(std::mem::offset_of!(Vertex, normal), 12);
        assert_eq!(std::mem::offset_of!(Vertex, tangent), 24);
        assert_eq!(std::mem::offset_of!(Vertex, binormal), 36);
        assert_eq!(std::mem::offset_of!(Vertex, texcoord), 48);
    }

    #[test]
    fn interleave_zips_index_by_index() {
        let verts = interleave(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[0.0, 0.0, 1.0, 0.0, 1.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0],
            &[0.0, 0.5, 0.0, 0.5, 1.0, 0.0],
        );
        assert_eq!(verts.len(), 2);
        assert_eq!(verts[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(verts[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(verts[1].normal, [0.0, 1.0, 0.0]);
        assert_eq!(verts[1].texcoord, [0.5, 1.0, 0.0]);
    }

    #[test]
    fn baked_tables_are_parallel() {
        let n = teapot_data::TEAPOT_POSITIONS.len();
        assert!(n > 0);
        assert_eq!(n % 3, 0);
        assert_eq!(teapot_data::TEAPOT_NORMALS.len(), n);
        assert_eq!(teapot_data::TEAPOT_TANGENTS.len(), n);
        assert_eq!(teapot_data::TEAPOT_BINORMALS.len(), n);
        assert_eq!(teapot_data::TEAPOT_TEXCOORDS.len(), n);
    }

    #[test]
    fn baked_indices_form_triangles_in_range() {
        let vertex_count = (teapot_data::TEAPOT_POSITIONS.len() / 3) as u16;
        let indices = teapot_indices();
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn teapot_vertex_count_matches_position_table() {
        assert_eq!(
            teapot_vertices().len(),
            teapot_data::TEAPOT_POSITIONS.len() / 3
        );
    }
}
