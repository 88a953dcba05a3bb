// Inspect the contents of a COLLADA document
// Run with: cargo run --release -p dae_inspect -- <path_to.dae> [--json]
// Set RUST_LOG=debug to see per-entity import details.

use std::env;

use anyhow::{Context, Result};
use dae_core::collada::{open_dae, ColladaDocument};
use dae_core::{MaterialChannel, ObjectKind};
use dae_math::Aabb;
use serde_json::{json, Value};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let Some(path) = args.iter().skip(1).find(|a| !a.starts_with("--")) else {
        eprintln!("Usage: {} <path_to.dae> [--json]", args[0]);
        std::process::exit(1);
    };

    let document = open_dae(path).with_context(|| format!("failed to open {}", path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&document))?);
    } else {
        print_report(&document);
    }

    Ok(())
}

fn print_report(document: &ColladaDocument) {
    let summary = document.summary();
    println!("=== {} ===", summary.name);
    println!("Scenes: {}", summary.scenes);
    println!("Objects: {}", summary.objects);
    println!("Meshes: {}", summary.meshes);
    println!("Materials: {}", summary.materials);
    println!("Textures: {}", summary.textures);
    println!("Images: {}", summary.images);
    println!("Cameras: {}", summary.cameras);
    println!("Lights: {}", summary.lights);

    println!("\n--- Scenes ---");
    for id in 0..document.scene_count() {
        let Some(scene) = document.scene(id) else {
            continue;
        };
        let marker = if document.default_scene() == Some(id) { " (default)" } else { "" };
        println!("  [{}] {}{}", id, scene.name, marker);
        for &child in &scene.children {
            print_object(document, child, 2);
        }
    }

    println!("\n--- Meshes ---");
    for id in 0..document.mesh_count() {
        let name = document.mesh_name(id).unwrap_or("?");
        match document.mesh(id) {
            Ok(mesh) => {
                let bounds = mesh.bounds();
                println!(
                    "  [{}] {} - {} vertices, {} triangles, {} normal / {} uv layers",
                    id,
                    name,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    mesh.normals.len(),
                    mesh.texcoords.len()
                );
                if !bounds.is_empty() {
                    let (center, size) = (bounds.centroid(), bounds.size());
                    println!(
                        "      bounds: center ({:.3}, {:.3}, {:.3}), size ({:.3}, {:.3}, {:.3})",
                        center.x, center.y, center.z, size.x, size.y, size.z
                    );
                }
            }
            Err(e) => println!("  [{}] {} - FAILED: {}", id, name, e),
        }
    }

    println!("\n--- Materials ---");
    for id in 0..document.material_count() {
        let name = document.material_name(id).unwrap_or("?");
        match document.material(id) {
            Ok(material) => println!(
                "  [{}] {} - shininess {}, ambient {}, diffuse {}, specular {}{}",
                id,
                name,
                material.shininess,
                describe_channel(document, &material.ambient),
                describe_channel(document, &material.diffuse),
                describe_channel(document, &material.specular),
                if material.has_textures() { " (textured)" } else { "" }
            ),
            Err(e) => println!("  [{}] {} - FAILED: {}", id, name, e),
        }
    }

    println!("\n--- Textures ---");
    for id in 0..document.texture_count() {
        let name = document.texture_name(id).unwrap_or("?");
        match document.texture(id) {
            Ok(texture) => println!(
                "  [{}] {} - {:?} image {}, filter {:?}/{:?}, mip {:?}, wrap {:?}",
                id,
                name,
                texture.kind,
                document.image_name(texture.image).unwrap_or("?"),
                texture.min_filter,
                texture.mag_filter,
                texture.mipmap,
                texture.wrapping
            ),
            Err(e) => println!("  [{}] {} - FAILED: {}", id, name, e),
        }
    }

    println!("\n--- Images ---");
    for id in 0..document.image_count() {
        let name = document.image_name(id).unwrap_or("?");
        match document.image_source(id) {
            Ok(source) => println!("  [{}] {} - {}", id, name, source.path.display()),
            Err(e) => {
                println!("  [{}] {} - FAILED: {}", id, name, e);
                continue;
            }
        }
        match document.image(id) {
            Ok(image) => println!(
                "      {}x{}, {} bytes",
                image.width,
                image.height,
                image.size_bytes()
            ),
            Err(e) => println!("      not loaded: {}", e),
        }
    }
}

fn print_object(document: &ColladaDocument, id: usize, depth: usize) {
    let indent = "  ".repeat(depth);
    let Some(object) = document.object(id) else {
        println!("{}[{}] <failed>", indent, id);
        return;
    };

    let kind = match object.kind {
        ObjectKind::Empty => "empty".to_string(),
        ObjectKind::Camera(camera) => {
            format!("camera {}", document.camera_name(camera).unwrap_or("?"))
        }
        ObjectKind::Light(light) => format!("light {}", document.light_name(light).unwrap_or("?")),
        ObjectKind::Mesh { mesh, material } => format!(
            "mesh {} material {}",
            document.mesh_name(mesh).unwrap_or("?"),
            material
                .and_then(|m| document.material_name(m))
                .unwrap_or("<none>")
        ),
    };
    let t = object.translation();
    println!(
        "{}[{}] {} - {} at ({:.3}, {:.3}, {:.3})",
        indent, id, object.name, kind, t.x, t.y, t.z
    );

    for &child in &object.children {
        print_object(document, child, depth + 1);
    }
}

fn describe_channel(document: &ColladaDocument, channel: &MaterialChannel) -> String {
    match *channel {
        MaterialChannel::Color(c) => format!("({:.2}, {:.2}, {:.2})", c.x, c.y, c.z),
        MaterialChannel::Texture(id) => {
            format!("texture {}", document.texture_name(id).unwrap_or("?"))
        }
    }
}

fn to_json(document: &ColladaDocument) -> Value {
    let scenes: Vec<Value> = (0..document.scene_count())
        .filter_map(|id| document.scene(id))
        .map(|scene| json!(scene))
        .collect();
    let objects: Vec<Value> = (0..document.object_count())
        .map(|id| json!(document.object(id)))
        .collect();

    let meshes: Vec<Value> = (0..document.mesh_count())
        .map(|id| match document.mesh(id) {
            Ok(mesh) => {
                let bounds: Aabb = mesh.bounds();
                let bounds = if bounds.is_empty() { Value::Null } else { json!(bounds) };
                json!({
                    "name": document.mesh_name(id),
                    "vertices": mesh.vertex_count(),
                    "triangles": mesh.triangle_count(),
                    "has_normals": mesh.has_normals(),
                    "has_texcoords": mesh.has_texcoords(),
                    "normal_layers": mesh.normals.len(),
                    "texcoord_layers": mesh.texcoords.len(),
                    "bounds": bounds,
                })
            }
            Err(e) => json!({ "name": document.mesh_name(id), "error": e.to_string() }),
        })
        .collect();

    let materials: Vec<Value> = (0..document.material_count())
        .map(|id| match document.material(id) {
            Ok(material) => json!({ "name": document.material_name(id), "material": material }),
            Err(e) => json!({ "name": document.material_name(id), "error": e.to_string() }),
        })
        .collect();

    let textures: Vec<Value> = (0..document.texture_count())
        .map(|id| match document.texture(id) {
            Ok(texture) => json!({ "name": document.texture_name(id), "texture": texture }),
            Err(e) => json!({ "name": document.texture_name(id), "error": e.to_string() }),
        })
        .collect();

    let images: Vec<Value> = (0..document.image_count())
        .map(|id| match document.image_source(id) {
            Ok(source) => json!(source),
            Err(e) => json!({ "name": document.image_name(id), "error": e.to_string() }),
        })
        .collect();

    json!({
        "summary": document.summary(),
        "scenes": scenes,
        "objects": objects,
        "meshes": meshes,
        "materials": materials,
        "textures": textures,
        "images": images,
    })
}
