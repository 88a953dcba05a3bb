//! Name registries built once when a document is opened.

use std::collections::HashMap;

use super::query::{collada, DocumentQuery, Query};

/// Bidirectional map between entity ids and names.
///
/// Ids are positions in document order. If a name appears twice, both
/// entries keep their id and name lookup returns the last one.
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Append a name, returning its id.
    pub fn insert(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let id = self.names.len();
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of entity `id`.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Id of the entity called `name`.
    pub fn id_for_name(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl FromIterator<String> for NameRegistry {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut registry = Self::with_capacity(iter.size_hint().0);
        for name in iter {
            registry.insert(name);
        }
        registry
    }
}

/// Library registries of an opened document.
#[derive(Clone, Debug, Default)]
pub struct Registries {
    pub cameras: NameRegistry,
    pub lights: NameRegistry,
    pub meshes: NameRegistry,
    pub materials: NameRegistry,
    pub textures: NameRegistry,
    pub images: NameRegistry,
}

impl Registries {
    pub fn build(query: &impl DocumentQuery) -> Self {
        let collect = |q: Query| -> NameRegistry { query.evaluate_list(&q).into_iter().collect() };

        Self {
            cameras: collect(library_ids("library_cameras", "camera")),
            lights: collect(library_ids("library_lights", "light")),
            meshes: collect(library_ids("library_geometries", "geometry")),
            materials: collect(library_ids("library_materials", "material")),
            // Textures are the samplers declared as effect parameters
            textures: collect(
                collada()
                    .child("library_effects")
                    .child("effect")
                    .child("profile_COMMON")
                    .child("newparam")
                    .with_child_prefix("sampler")
                    .attribute("sid"),
            ),
            images: collect(library_ids("library_images", "image")),
        }
    }
}

fn library_ids(library: &str, element: &str) -> Query {
    collada().child(library).child(element).attribute("id")
}
