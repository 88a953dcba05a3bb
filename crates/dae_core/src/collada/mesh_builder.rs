//! Mesh import from `<polylist>` primitives.
//!
//! A polylist stores, for every polygon corner, one index per input (`stride`
//! indices). Corners sharing the same index tuple are merged into a single
//! vertex, polygons are triangulated, and each attribute array is rebuilt so
//! that it is addressed by the merged vertex index.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use super::error::{ImportError, ImportResult};
use super::parse::{parse_array, parse_scalar, FromComponents, ValueCursor};
use super::query::{collada, strip_url, DocumentQuery, ElementPath};
use crate::mesh::{Mesh, MeshPrimitive};

/// Merged corner indices of a polylist.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CombinedIndices {
    /// Merged vertex index of every corner
    pub combined: Vec<u32>,

    /// Corner at which each merged vertex first appeared
    pub unique_corners: Vec<usize>,
}

/// Merge corners with identical index tuples.
///
/// Merged indices are assigned in order of first appearance.
pub(crate) fn combine_indices(indices: &[u32], stride: usize) -> CombinedIndices {
    if stride == 0 {
        return CombinedIndices {
            combined: Vec::new(),
            unique_corners: Vec::new(),
        };
    }

    let corner_count = indices.len() / stride;
    let mut lookup: HashMap<&[u32], u32> = HashMap::with_capacity(corner_count);
    let mut combined = Vec::with_capacity(corner_count);
    let mut unique_corners = Vec::new();

    for (corner, key) in indices.chunks_exact(stride).enumerate() {
        let next = unique_corners.len() as u32;
        let id = *lookup.entry(key).or_insert_with(|| {
            unique_corners.push(corner);
            next
        });
        combined.push(id);
    }

    CombinedIndices {
        combined,
        unique_corners,
    }
}

/// Split polygons of 3 or 4 corners into triangles.
///
/// Quads `[c0, c1, c2, c3]` become `[c0, c1, c2, c0, c2, c3]`.
pub(crate) fn triangulate(mesh: &str, vertex_counts: &[u32], corners: &[u32]) -> ImportResult<Vec<u32>> {
    let mut indices = Vec::with_capacity(corners.len() * 3 / 2);
    let mut offset = 0usize;

    for &count in vertex_counts {
        let polygon = corners
            .get(offset..offset + count as usize)
            .ok_or_else(|| ImportError::malformed(format!("mesh {}", mesh), "index list too short"))?;
        match *polygon {
            [a, b, c] => indices.extend_from_slice(&[a, b, c]),
            [a, b, c, d] => indices.extend_from_slice(&[a, b, c, a, c, d]),
            _ => {
                return Err(ImportError::UnsupportedTopology {
                    mesh: mesh.to_string(),
                    count,
                })
            }
        }
        offset += count as usize;
    }

    Ok(indices)
}

/// Build one attribute array addressed by merged vertex index.
///
/// Merged vertex `i` takes the value at index `indices[unique_corners[i] * stride + offset]`.
pub(crate) fn build_attribute<T: Copy>(
    mesh: &str,
    values: &[T],
    indices: &[u32],
    stride: usize,
    offset: usize,
    unique_corners: &[usize],
) -> ImportResult<Vec<T>> {
    unique_corners
        .iter()
        .map(|&corner| {
            let index = corner
                .checked_mul(stride)
                .and_then(|start| start.checked_add(offset))
                .and_then(|position| indices.get(position))
                .copied()
                .ok_or_else(|| ImportError::malformed(format!("mesh {}", mesh), "input offset out of range"))?;
            values.get(index as usize).copied().ok_or_else(|| {
                ImportError::malformed(
                    format!("mesh {}", mesh),
                    format!("index {} out of range ({} values)", index, values.len()),
                )
            })
        })
        .collect()
}

/// Read the vectors of the geometry `<source>` with the given id.
///
/// Each accessor item of `stride` values yields one vector made of its first
/// components.
pub fn parse_source<T: FromComponents>(query: &impl DocumentQuery, id: &str) -> ImportResult<Vec<T>> {
    let entity = format!("source \"{}\"", id);
    let sources = collada()
        .child("library_geometries")
        .child("geometry")
        .child("mesh")
        .child("source");
    let accessor = sources
        .clone()
        .with_attribute("id", id)
        .child("technique_common")
        .child("accessor");

    let count: usize = parse_scalar(&query.evaluate(&accessor.clone().attribute("count")))
        .map_err(|e| ImportError::malformed(entity.clone(), format!("accessor count: {}", e)))?;
    let stride_text = query.evaluate(&accessor.clone().attribute("stride"));
    let stride: usize = if stride_text.is_empty() {
        1
    } else {
        parse_scalar(&stride_text)
            .map_err(|e| ImportError::malformed(entity.clone(), format!("accessor stride: {}", e)))?
    };
    if stride == 0 {
        return Err(ImportError::malformed(entity, "accessor stride is zero"));
    }

    let array_id = query.evaluate(&accessor.attribute("source"));
    let array = sources
        .child("float_array")
        .with_attribute("id", strip_url(&array_id));
    let total: usize = parse_scalar(&query.evaluate(&array.clone().attribute("count")))
        .map_err(|e| ImportError::malformed(entity.clone(), format!("array count: {}", e)))?;
    if count.checked_mul(stride) != Some(total) {
        return Err(ImportError::malformed(entity, "wrong total count in source"));
    }

    let text = query.evaluate(&array.text());
    let mut cursor = ValueCursor::new(&text);
    let mut values = Vec::new();
    for _ in 0..count {
        let value = cursor
            .next_vector(stride)
            .map_err(|e| ImportError::malformed(entity.clone(), e))?;
        values.push(value);
    }
    Ok(values)
}

/// Attribute input of a polylist.
struct Input {
    source: String,
    offset: usize,
}

fn read_input(query: &impl DocumentQuery, mesh: &str, input: ElementPath) -> ImportResult<Input> {
    let source = strip_url(&query.evaluate(&input.clone().attribute("source"))).to_string();
    let offset = parse_scalar(&query.evaluate(&input.attribute("offset")))
        .map_err(|e| ImportError::malformed(format!("mesh {}", mesh), format!("input offset: {}", e)))?;
    Ok(Input { source, offset })
}

/// Import geometry `id` (0-based, document order) called `name`.
pub(crate) fn build_mesh(query: &impl DocumentQuery, id: usize, name: &str) -> ImportResult<Mesh> {
    let malformed = |reason: String| ImportError::malformed(format!("mesh {}", name), reason);

    let geometry = collada()
        .child("library_geometries")
        .child("geometry")
        .nth(id + 1)
        .child("mesh");
    let polylist = geometry.clone().child("polylist").nth(1);
    let inputs = polylist.clone().child("input");

    let polygon_count: usize = parse_scalar(&query.evaluate(&polylist.clone().attribute("count")))
        .map_err(|e| malformed(format!("polylist count: {}", e)))?;
    let vertex_counts: Vec<u32> = parse_array(
        &query.evaluate(&polylist.clone().child("vcount").text()),
        polygon_count,
    )
    .map_err(|e| malformed(format!("vcount: {}", e)))?;

    if let Some(&count) = vertex_counts.iter().find(|&&c| c != 3 && c != 4) {
        return Err(ImportError::UnsupportedTopology {
            mesh: name.to_string(),
            count,
        });
    }

    let stride = query.count(&inputs);
    if stride == 0 {
        return Err(malformed("polylist has no inputs".to_string()));
    }
    let corner_count: usize = vertex_counts.iter().map(|&c| c as usize).sum();
    let index_count = corner_count
        .checked_mul(stride)
        .ok_or_else(|| malformed(format!("{} corners of {} inputs overflow", corner_count, stride)))?;
    let indices: Vec<u32> = parse_array(
        &query.evaluate(&polylist.clone().child("p").text()),
        index_count,
    )
    .map_err(|e| malformed(format!("p: {}", e)))?;

    let CombinedIndices {
        combined,
        unique_corners,
    } = combine_indices(&indices, stride);
    let triangles = triangulate(name, &vertex_counts, &combined)?;

    let mut positions: Option<Vec<Vec3>> = None;
    let mut normals = Vec::new();
    let mut texcoords = Vec::new();

    let semantics = query.evaluate_list(&inputs.clone().attribute("semantic"));
    for semantic in &semantics {
        let with_semantic = inputs.clone().with_attribute("semantic", semantic);
        match semantic.as_str() {
            "VERTEX" => {
                if positions.is_some() {
                    log::warn!("Mesh {}: ignoring extra VERTEX input", name);
                    continue;
                }
                let input = read_input(query, name, with_semantic.nth(1))?;
                let position_source = query.evaluate(
                    &geometry
                        .clone()
                        .child("vertices")
                        .with_attribute("id", &input.source)
                        .child("input")
                        .with_attribute("semantic", "POSITION")
                        .attribute("source"),
                );
                let values: Vec<Vec3> = parse_source(query, strip_url(&position_source))?;
                positions = Some(build_attribute(
                    name,
                    &values,
                    &indices,
                    stride,
                    input.offset,
                    &unique_corners,
                )?);
            }
            "NORMAL" => {
                let input = read_input(query, name, with_semantic.nth(normals.len() + 1))?;
                let values: Vec<Vec3> = parse_source(query, &input.source)?;
                normals.push(build_attribute(
                    name,
                    &values,
                    &indices,
                    stride,
                    input.offset,
                    &unique_corners,
                )?);
            }
            "TEXCOORD" => {
                let input = read_input(query, name, with_semantic.nth(texcoords.len() + 1))?;
                let values: Vec<Vec2> = parse_source(query, &input.source)?;
                texcoords.push(build_attribute(
                    name,
                    &values,
                    &indices,
                    stride,
                    input.offset,
                    &unique_corners,
                )?);
            }
            _ => {
                log::warn!(
                    "{}",
                    ImportError::UnsupportedSemantic {
                        mesh: name.to_string(),
                        semantic: semantic.clone(),
                    }
                );
            }
        }
    }

    let positions = positions.ok_or_else(|| malformed("polylist has no VERTEX input".to_string()))?;

    log::debug!(
        "Built mesh {}: {} vertices, {} triangles, {} normal / {} texcoord layers",
        name,
        positions.len(),
        triangles.len() / 3,
        normals.len(),
        texcoords.len()
    );

    Ok(Mesh {
        primitive: MeshPrimitive::Triangles,
        indices: triangles,
        positions,
        normals,
        texcoords,
    })
}
