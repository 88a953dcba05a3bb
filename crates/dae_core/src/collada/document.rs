//! Opened COLLADA documents and on-demand entity import.

use std::cell::OnceCell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::effect::build_material;
use super::error::{ImportError, ImportResult};
use super::mesh_builder::{build_mesh, parse_source};
use super::parse::FromComponents;
use super::query::{collada, DocumentQuery};
use super::registry::{NameRegistry, Registries};
use super::sampler::{build_texture, image_source};
use super::scene_graph::{parse_scenes, SceneGraph};
use super::xml::XmlDocument;
use crate::material::PhongMaterial;
use crate::mesh::Mesh;
use crate::scene::{Object, Scene};
use crate::texture::{ImageData, ImageDecoder, ImageSource, TextureData, TgaDecoder};

/// Namespace every supported document declares on its root element.
pub const COLLADA_NAMESPACE: &str = "http://www.collada.org/2005/11/COLLADASchema";

/// Supported schema version.
pub const COLLADA_VERSION: &str = "1.4.1";

/// Load a COLLADA file.
///
/// Only the document structure and the library registries are read here.
/// Meshes, materials, textures and images are imported when requested, the
/// scene hierarchy on first access.
///
/// # Example
///
/// ```ignore
/// use dae_core::collada::open_dae;
///
/// let document = open_dae("scene.dae")?;
/// if let Some(scene) = document.default_scene().and_then(|id| document.scene(id)) {
///     println!("{} root objects", scene.children.len());
/// }
/// ```
pub fn open_dae<P: AsRef<Path>>(path: P) -> ImportResult<ColladaDocument> {
    let path = path.as_ref();
    log::info!("Loading COLLADA file: {}", path.display());

    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let xml = XmlDocument::parse(BufReader::new(file))?;

    ColladaDocument::from_xml(
        xml,
        path.display().to_string(),
        path.parent().map(Path::to_path_buf),
    )
}

/// Load a COLLADA document from a string.
///
/// `base_dir` is used to resolve relative image paths.
pub fn open_dae_from_string(
    content: &str,
    name: &str,
    base_dir: Option<PathBuf>,
) -> ImportResult<ColladaDocument> {
    let xml = XmlDocument::parse(content.as_bytes())?;
    ColladaDocument::from_xml(xml, name.to_string(), base_dir)
}

/// Entity counts of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub scenes: usize,
    pub default_scene: Option<usize>,
    pub objects: usize,
    pub meshes: usize,
    pub materials: usize,
    pub textures: usize,
    pub images: usize,
    pub cameras: usize,
    pub lights: usize,
}

/// An opened COLLADA 1.4.1 document.
///
/// Entities are addressed by 0-based id in document order, or by the `id`
/// attribute of their element through the `*_for_name` lookups. Import
/// failures are logged and returned; they never affect other entities.
pub struct ColladaDocument {
    name: String,
    base_dir: Option<PathBuf>,
    xml: XmlDocument,
    registries: Registries,
    scene_graph: OnceCell<SceneGraph>,
    decoder: Box<dyn ImageDecoder>,
}

impl ColladaDocument {
    fn from_xml(xml: XmlDocument, name: String, base_dir: Option<PathBuf>) -> ImportResult<Self> {
        let namespace = xml.root_namespace();
        if xml.root_name() != "COLLADA" || namespace != COLLADA_NAMESPACE {
            return Err(ImportError::UnsupportedNamespace(namespace.to_string()));
        }
        let version = xml.root_attribute("version").unwrap_or("");
        if version != COLLADA_VERSION {
            return Err(ImportError::UnsupportedVersion(version.to_string()));
        }

        let registries = Registries::build(&xml);
        log::info!(
            "Opened {}: {} meshes, {} materials, {} textures, {} images, {} cameras, {} lights",
            name,
            registries.meshes.len(),
            registries.materials.len(),
            registries.textures.len(),
            registries.images.len(),
            registries.cameras.len(),
            registries.lights.len()
        );

        Ok(Self {
            name,
            base_dir,
            xml,
            registries,
            scene_graph: OnceCell::new(),
            decoder: Box::new(TgaDecoder),
        })
    }

    /// Replace the decoder used by [`ColladaDocument::image`].
    pub fn with_image_decoder(mut self, decoder: impl ImageDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// File path or name given when opening.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory relative image paths are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn scene_graph(&self) -> &SceneGraph {
        self.scene_graph
            .get_or_init(|| parse_scenes(&self.xml, &self.registries))
    }

    // Scenes

    /// Scene named by `<scene>/<instance_visual_scene>`, else the first one.
    pub fn default_scene(&self) -> Option<usize> {
        let graph = self.scene_graph();
        (!graph.scenes.is_empty()).then_some(graph.default_scene)
    }

    pub fn scene_count(&self) -> usize {
        self.xml
            .count(&collada().child("library_visual_scenes").child("visual_scene"))
    }

    pub fn scene_name(&self, id: usize) -> Option<&str> {
        self.scene_graph().scene_names.name(id)
    }

    pub fn scene_for_name(&self, name: &str) -> Option<usize> {
        self.scene_graph().scene_names.id_for_name(name)
    }

    pub fn scene(&self, id: usize) -> Option<&Scene> {
        self.scene_graph().scenes.get(id)
    }

    // Objects

    /// Number of allocated object slots, including failed ones.
    pub fn object_count(&self) -> usize {
        self.scene_graph().objects.len()
    }

    pub fn object_name(&self, id: usize) -> Option<&str> {
        self.object(id).map(|o| o.name.as_str())
    }

    /// Object imported under `name`, the last one if several share it.
    pub fn object_for_name(&self, name: &str) -> Option<usize> {
        self.scene_graph().object_names.get(name).copied()
    }

    /// Object `id`, `None` if out of range or if its import failed.
    pub fn object(&self, id: usize) -> Option<&Object> {
        self.scene_graph().objects.get(id).and_then(Option::as_ref)
    }

    // Meshes

    pub fn mesh_count(&self) -> usize {
        self.registries.meshes.len()
    }

    pub fn mesh_name(&self, id: usize) -> Option<&str> {
        self.registries.meshes.name(id)
    }

    pub fn mesh_for_name(&self, name: &str) -> Option<usize> {
        self.registries.meshes.id_for_name(name)
    }

    /// Import mesh `id`.
    pub fn mesh(&self, id: usize) -> ImportResult<Mesh> {
        report(
            checked(&self.registries.meshes, "mesh", id)
                .and_then(|name| build_mesh(&self.xml, id, name)),
        )
    }

    // Materials

    pub fn material_count(&self) -> usize {
        self.registries.materials.len()
    }

    pub fn material_name(&self, id: usize) -> Option<&str> {
        self.registries.materials.name(id)
    }

    pub fn material_for_name(&self, name: &str) -> Option<usize> {
        self.registries.materials.id_for_name(name)
    }

    /// Import material `id`.
    pub fn material(&self, id: usize) -> ImportResult<PhongMaterial> {
        report(
            checked(&self.registries.materials, "material", id)
                .and_then(|name| build_material(&self.xml, &self.registries, id, name)),
        )
    }

    // Textures

    pub fn texture_count(&self) -> usize {
        self.registries.textures.len()
    }

    pub fn texture_name(&self, id: usize) -> Option<&str> {
        self.registries.textures.name(id)
    }

    pub fn texture_for_name(&self, name: &str) -> Option<usize> {
        self.registries.textures.id_for_name(name)
    }

    /// Import texture `id`.
    pub fn texture(&self, id: usize) -> ImportResult<TextureData> {
        report(
            checked(&self.registries.textures, "texture", id)
                .and_then(|name| build_texture(&self.xml, &self.registries, name)),
        )
    }

    // Images

    pub fn image_count(&self) -> usize {
        self.registries.images.len()
    }

    pub fn image_name(&self, id: usize) -> Option<&str> {
        self.registries.images.name(id)
    }

    pub fn image_for_name(&self, name: &str) -> Option<usize> {
        self.registries.images.id_for_name(name)
    }

    /// Resolved file location of image `id`, without decoding it.
    pub fn image_source(&self, id: usize) -> ImportResult<ImageSource> {
        report(
            checked(&self.registries.images, "image", id)
                .and_then(|name| image_source(&self.xml, id, name, self.base_dir())),
        )
    }

    /// Decode image `id`.
    pub fn image(&self, id: usize) -> ImportResult<ImageData> {
        let source = checked(&self.registries.images, "image", id)
            .and_then(|name| image_source(&self.xml, id, name, self.base_dir()));
        report(source.and_then(|source| {
            if !self.decoder.supports(&source.path) {
                return Err(ImportError::UnsupportedImageFormat {
                    image: source.name,
                    path: source.path,
                });
            }
            self.decoder
                .decode(&source.path)
                .map_err(|e| ImportError::Image {
                    image: source.name,
                    source: e,
                })
        }))
    }

    // Cameras

    pub fn camera_count(&self) -> usize {
        self.registries.cameras.len()
    }

    pub fn camera_name(&self, id: usize) -> Option<&str> {
        self.registries.cameras.name(id)
    }

    pub fn camera_for_name(&self, name: &str) -> Option<usize> {
        self.registries.cameras.id_for_name(name)
    }

    // Lights

    pub fn light_count(&self) -> usize {
        self.registries.lights.len()
    }

    pub fn light_name(&self, id: usize) -> Option<&str> {
        self.registries.lights.name(id)
    }

    pub fn light_for_name(&self, name: &str) -> Option<usize> {
        self.registries.lights.id_for_name(name)
    }

    /// Read the vectors of geometry source `id` (the element's `id` attribute).
    pub fn parse_source<T: FromComponents>(&self, id: &str) -> ImportResult<Vec<T>> {
        report(parse_source(&self.xml, id))
    }

    /// Entity counts, parsing the scene hierarchy if needed.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            name: self.name.clone(),
            scenes: self.scene_count(),
            default_scene: self.default_scene(),
            objects: self.object_count(),
            meshes: self.mesh_count(),
            materials: self.material_count(),
            textures: self.texture_count(),
            images: self.image_count(),
            cameras: self.camera_count(),
            lights: self.light_count(),
        }
    }
}

impl std::fmt::Debug for ColladaDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColladaDocument")
            .field("name", &self.name)
            .field("base_dir", &self.base_dir)
            .field("registries", &self.registries)
            .field("scenes_parsed", &self.scene_graph.get().is_some())
            .finish()
    }
}

fn checked<'a>(registry: &'a NameRegistry, kind: &'static str, id: usize) -> ImportResult<&'a str> {
    registry.name(id).ok_or(ImportError::IndexOutOfRange {
        kind,
        id,
        count: registry.len(),
    })
}

fn report<T>(result: ImportResult<T>) -> ImportResult<T> {
    if let Err(e) = &result {
        log::error!("ColladaImporter: {}", e);
    }
    result
}
