//! Scene hierarchy import from `<library_visual_scenes>`.
//!
//! Objects of every scene share one flat index space. The direct children of
//! a node (or the roots of a scene) get consecutive indices, then each child's
//! own subtree is allocated after them. A node that fails to import keeps its
//! slot empty and its subtree is skipped.
//!
//! Nodes are addressed by their position under the parent, never by id, so
//! repeated ids stay separate objects. The name lookup keeps the last object
//! imported under a given name.

use std::collections::HashMap;

use dae_math::{compose_transform_ops, Mat4, TransformOp, Vec3};

use super::error::{ImportError, ImportResult};
use super::parse::{parse_array, parse_vector, ValueError};
use super::query::{collada, strip_url, DocumentQuery, ElementPath};
use super::registry::{NameRegistry, Registries};
use crate::scene::{Object, ObjectKind, Scene};

/// Imported scenes and objects of a document.
#[derive(Debug, Default)]
pub(crate) struct SceneGraph {
    pub scenes: Vec<Scene>,
    pub scene_names: NameRegistry,

    /// One slot per allocated object, `None` where the import failed
    pub objects: Vec<Option<Object>>,
    pub object_names: HashMap<String, usize>,

    /// Scene referenced by `<scene>/<instance_visual_scene>`, else 0
    pub default_scene: usize,
}

fn visual_scenes() -> ElementPath {
    collada().child("library_visual_scenes").child("visual_scene")
}

/// The `position`-th (1-based) `<node>` child of `parent`.
fn child_node(parent: &ElementPath, position: usize) -> ElementPath {
    parent.clone().child("node").nth(position)
}

/// Import every visual scene of the document.
pub(crate) fn parse_scenes(query: &impl DocumentQuery, registries: &Registries) -> SceneGraph {
    let default_url = query.evaluate(
        &collada()
            .child("scene")
            .child("instance_visual_scene")
            .attribute("url"),
    );
    let default_name = strip_url(&default_url);

    let mut builder = SceneGraphBuilder {
        query,
        registries,
        objects: Vec::new(),
        object_names: HashMap::new(),
    };

    let scene_count = query.count(&visual_scenes());
    let mut scenes = Vec::with_capacity(scene_count);
    let mut scene_names = NameRegistry::with_capacity(scene_count);
    let mut default_scene = None;
    let mut next_free = 0;

    for scene_id in 0..scene_count {
        let scene = visual_scenes().nth(scene_id + 1);
        let name = query.evaluate(&scene.clone().attribute("id"));
        if default_scene.is_none() && !name.is_empty() && name == default_name {
            default_scene = Some(scene_id);
        }

        let (children, next) = builder.parse_children(next_free, &scene);
        next_free = next;

        scene_names.insert(name.clone());
        scenes.push(Scene { name, children });
    }

    if default_scene.is_none() && !default_name.is_empty() {
        log::warn!("Default scene \"{}\" not found, using the first scene", default_name);
    }

    log::info!(
        "Parsed {} scenes with {} objects",
        scenes.len(),
        builder.objects.len()
    );

    SceneGraph {
        scenes,
        scene_names,
        objects: builder.objects,
        object_names: builder.object_names,
        default_scene: default_scene.unwrap_or(0),
    }
}

struct SceneGraphBuilder<'a, Q> {
    query: &'a Q,
    registries: &'a Registries,
    objects: Vec<Option<Object>>,
    object_names: HashMap<String, usize>,
}

impl<Q: DocumentQuery> SceneGraphBuilder<'_, Q> {
    /// Allocate the `<node>` children of `parent` at `first..` and import
    /// their subtrees.
    ///
    /// Returns the allocated indices and the next free index.
    fn parse_children(&mut self, first: usize, parent: &ElementPath) -> (Vec<usize>, usize) {
        let count = self.query.count(&parent.clone().child("node"));
        let indices: Vec<usize> = (first..first + count).collect();
        if self.objects.len() < first + count {
            self.objects.resize(first + count, None);
        }

        let mut next_free = first + count;
        for (position, &index) in indices.iter().enumerate() {
            next_free = self.parse_object(index, &child_node(parent, position + 1), next_free);
        }
        (indices, next_free)
    }

    /// Import the node at `path` into slot `index`, its children starting at `next_free`.
    fn parse_object(&mut self, index: usize, path: &ElementPath, next_free: usize) -> usize {
        let name = self.query.evaluate(&path.clone().attribute("id"));
        let name = name.as_str();
        let parts = self
            .read_transform(name, path)
            .and_then(|transform| self.read_instance(name, path).map(|kind| (transform, kind)));
        let (transform, kind) = match parts {
            Ok(parts) => parts,
            Err(e) => {
                log::error!("ColladaImporter: {}", e);
                return next_free;
            }
        };

        self.objects[index] = Some(Object {
            name: name.to_string(),
            transform,
            kind,
            children: Vec::new(),
        });
        if !name.is_empty() {
            self.object_names.insert(name.to_string(), index);
        }

        let (children, next) = self.parse_children(next_free, path);
        if let Some(Some(object)) = self.objects.get_mut(index) {
            object.children = children;
        }
        next
    }

    fn read_transform(&self, name: &str, path: &ElementPath) -> ImportResult<Mat4> {
        let ops = path
            .clone()
            .child_any_of(&["translate", "rotate", "scale", "matrix"]);
        let kinds = self.query.evaluate_list(&ops.clone().name());
        let values = self.query.evaluate_list(&ops.text());

        let malformed = |op: &str, e: ValueError| {
            ImportError::malformed(format!("object {}", name), format!("{}: {}", op, e))
        };

        let ops = kinds
            .iter()
            .zip(&values)
            .map(|(kind, text)| {
                let kind = kind.as_str();
                let op = match kind {
                    "translate" => TransformOp::Translate(parse_vector(text).map_err(|e| malformed(kind, e))?),
                    "scale" => TransformOp::Scale(parse_vector(text).map_err(|e| malformed(kind, e))?),
                    "rotate" => {
                        let v: Vec<f32> = parse_array(text, 4).map_err(|e| malformed(kind, e))?;
                        TransformOp::Rotate {
                            axis: Vec3::new(v[0], v[1], v[2]),
                            degrees: v[3],
                        }
                    }
                    _ => {
                        // Row-major in the document
                        let v: Vec<f32> = parse_array(text, 16).map_err(|e| malformed(kind, e))?;
                        let mut cols = [0.0f32; 16];
                        cols.copy_from_slice(&v);
                        TransformOp::Matrix(Mat4::from_cols_array(&cols).transpose())
                    }
                };
                Ok(op)
            })
            .collect::<ImportResult<Vec<_>>>()?;

        Ok(compose_transform_ops(&ops))
    }

    fn read_instance(&self, name: &str, path: &ElementPath) -> ImportResult<ObjectKind> {
        let instances = path.clone().child_with_prefix("instance_");
        let Some(instance) = self.query.evaluate_list(&instances.name()).into_iter().next() else {
            return Ok(ObjectKind::Empty);
        };

        let instance_path = path.clone().child(&instance);
        let url = self.query.evaluate(&instance_path.clone().attribute("url"));
        let target = strip_url(&url);
        let lookup = |registry: &NameRegistry, kind: &'static str, target: &str| {
            registry
                .id_for_name(target)
                .ok_or_else(|| ImportError::ReferenceNotFound {
                    object: name.to_string(),
                    kind,
                    name: target.to_string(),
                })
        };

        match instance.as_str() {
            "instance_camera" => Ok(ObjectKind::Camera(lookup(&self.registries.cameras, "camera", target)?)),
            "instance_light" => Ok(ObjectKind::Light(lookup(&self.registries.lights, "light", target)?)),
            "instance_geometry" => {
                let mesh = lookup(&self.registries.meshes, "mesh", target)?;
                let material_url = self.query.evaluate(
                    &instance_path
                        .child("bind_material")
                        .child("technique_common")
                        .child("instance_material")
                        .attribute("target"),
                );
                let material = match strip_url(&material_url) {
                    "" => None,
                    material => Some(lookup(&self.registries.materials, "material", material)?),
                };
                Ok(ObjectKind::Mesh { mesh, material })
            }
            _ => Err(ImportError::UnsupportedInstance {
                object: name.to_string(),
                instance: instance.clone(),
            }),
        }
    }
}
