//! Built scenes and named picking.

use log::debug;
use raypick::{FaceKind, Geometry, Intersection, Mesh, Particle, Ray, SceneObject};
use raypick_math::{Point3, Vec3};
use serde::Serialize;

use crate::error::{Result, SceneError};
use crate::{Document, GeometryDef, ObjectKind, PickSettings};

/// A validated scene ready for ray queries.
#[derive(Debug, Clone)]
pub struct Scene {
    settings: PickSettings,
    names: Vec<String>,
    objects: Vec<SceneObject>,
}

/// A hit resolved to a named object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    /// Name of the object hit.
    pub object: String,
    /// Position of the object in the document.
    pub index: usize,
    /// Distance reported by the intersector.
    pub distance: f64,
    /// World-space hit point.
    pub point: [f64; 3],
    /// Face index within the mesh, if a face was hit.
    pub face: Option<usize>,
}

/// Object and geometry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    /// Number of particles.
    pub particles: usize,
    /// Number of meshes.
    pub meshes: usize,
    /// Number of helpers.
    pub helpers: usize,
    /// Total mesh faces.
    pub faces: usize,
    /// Total mesh vertices.
    pub vertices: usize,
}

impl Scene {
    pub(crate) fn from_document(doc: &Document) -> Result<Self> {
        doc.settings.validate()?;

        let mut names = Vec::with_capacity(doc.objects.len());
        let mut objects = Vec::with_capacity(doc.objects.len());
        for def in &doc.objects {
            objects.push(build_object(&def.name, &def.kind)?);
            names.push(def.name.clone());
        }
        debug!("built scene with {} objects", objects.len());

        Ok(Self {
            settings: doc.settings.clone(),
            names,
            objects,
        })
    }

    /// Settings the scene was built with.
    pub fn settings(&self) -> &PickSettings {
        &self.settings
    }

    /// Built objects, in document order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Object names, in document order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up an object by name. The first match wins.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.index_of(name).map(|i| &self.objects[i])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// A ray carrying the scene's precision.
    pub fn ray(&self, origin: Point3, direction: Vec3) -> Ray {
        Ray::new(origin, direction).with_precision(self.settings.precision)
    }

    /// All hits along `ray`, nearest first.
    pub fn pick(&self, ray: &Ray) -> Vec<Pick> {
        let hits = if self.settings.parallel {
            ray.intersect_objects_par(&self.objects)
        } else {
            ray.intersect_objects(&self.objects)
        };
        self.resolve_all(&hits)
    }

    /// The nearest hit along `ray`.
    pub fn pick_nearest(&self, ray: &Ray) -> Option<Pick> {
        ray.intersect_nearest(&self.objects)
            .and_then(|hit| self.resolve(&hit))
    }

    /// Hits against one named object, nearest first.
    pub fn pick_object(&self, name: &str, ray: &Ray) -> Result<Vec<Pick>> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SceneError::UnknownObject(name.to_string()))?;
        let mut picks = self.resolve_all(&ray.intersect_object(&self.objects[index]));
        picks.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(picks)
    }

    /// Object and geometry counts.
    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats::default();
        for object in &self.objects {
            match object {
                SceneObject::Particle(_) => stats.particles += 1,
                SceneObject::Mesh(mesh) => {
                    stats.meshes += 1;
                    stats.faces += mesh.geometry.faces().len();
                    stats.vertices += mesh.geometry.vertices().len();
                }
                SceneObject::Helper => stats.helpers += 1,
            }
        }
        stats
    }

    fn resolve_all(&self, hits: &[Intersection<'_>]) -> Vec<Pick> {
        hits.iter().filter_map(|hit| self.resolve(hit)).collect()
    }

    /// Map a hit back to its document slot. Hits always borrow from
    /// `self.objects`, so the slot is the hit's offset into that slice.
    fn resolve(&self, hit: &Intersection<'_>) -> Option<Pick> {
        let base = self.objects.as_ptr() as usize;
        let offset = (hit.object as *const SceneObject as usize).checked_sub(base)?;
        let index = offset / std::mem::size_of::<SceneObject>();
        let name = self.names.get(index)?;
        Some(Pick {
            object: name.clone(),
            index,
            distance: hit.distance,
            point: [hit.point.x, hit.point.y, hit.point.z],
            face: hit.face_index,
        })
    }
}

fn build_object(name: &str, kind: &ObjectKind) -> Result<SceneObject> {
    let object = match kind {
        ObjectKind::Particle { position, scale } => {
            SceneObject::Particle(Particle::new((*position).into(), *scale))
        }
        ObjectKind::Mesh {
            transform,
            side,
            geometry,
        } => {
            let geometry = build_geometry(name, geometry)?;
            SceneObject::Mesh(
                Mesh::new(geometry)
                    .with_transform(transform.to_transform())
                    .with_side((*side).into()),
            )
        }
        ObjectKind::Helper => SceneObject::Helper,
    };
    Ok(object)
}

fn build_geometry(name: &str, def: &GeometryDef) -> Result<Geometry> {
    match def {
        GeometryDef::Indexed { vertices, faces } => {
            let kinds = faces
                .iter()
                .enumerate()
                .map(|(face, idx)| match idx.as_slice() {
                    &[a, b, c] => Ok(FaceKind::Triangle([a, b, c])),
                    &[a, b, c, d] => Ok(FaceKind::Quad([a, b, c, d])),
                    other => Err(SceneError::InvalidFace {
                        object: name.to_string(),
                        face,
                        len: other.len(),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            let vertices = vertices.iter().map(|&v| v.into()).collect();
            Geometry::new(vertices, kinds).map_err(|source| SceneError::Geometry {
                object: name.to_string(),
                source,
            })
        }
        GeometryDef::Plane { width, height } => Ok(Geometry::plane(*width, *height)),
        GeometryDef::Cube {
            width,
            height,
            depth,
        } => Ok(Geometry::cube(*width, *height, *depth)),
    }
}
