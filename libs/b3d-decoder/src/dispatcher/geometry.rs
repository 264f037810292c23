//! Vertex, face and primitive commands.

use super::Dispatcher;
use b3d_mesh::{MeshBuilderFace, MeshBuilderVertex, NormalPolicy};
use b3d_syntax::{Arguments, NumericRange};
use config::constants::MIN_CYLINDER_SEGMENTS;
use glam::{DVec2, DVec3};

impl Dispatcher<'_> {
    pub(super) fn add_vertex(&mut self, arguments: &Arguments<'_>) {
        let mut read = |index: usize, name: &str| arguments.double(self.sink, index, name, 0.0);
        let position = DVec3::new(read(0, "vX"), read(1, "vY"), read(2, "vZ"));
        let normal = DVec3::new(read(3, "nX"), read(4, "nY"), read(5, "nZ"));
        let texture = DVec2::new(read(6, "u"), read(7, "v"));
        self.current.add_vertex(MeshBuilderVertex {
            position,
            normal,
            texture,
        });
    }

    /// Adds a face; `two_sided` also adds its back face.
    ///
    /// Every index is checked before anything is added: one missing,
    /// unparsable or dangling index voids the face.
    pub(super) fn add_face(&mut self, arguments: &Arguments<'_>, line: usize, two_sided: bool) {
        if arguments.len() < 3 {
            return;
        }
        let count = self.current.vertex_count();
        let mut indices = Vec::with_capacity(arguments.len());
        let mut valid = true;
        for index in 0..arguments.len() {
            let name = format!("v{}", index + 1);
            let Some(value) = arguments.required_int(self.sink, index, &name, NumericRange::unbounded()) else {
                valid = false;
                continue;
            };
            match usize::try_from(value).ok().filter(|&vertex| vertex < count) {
                Some(vertex) => indices.push(vertex),
                None => {
                    arguments.error(
                        self.sink,
                        format!(
                            "{name} in {} references vertex {value}, but only {count} vertices exist",
                            arguments.command()
                        ),
                    );
                    valid = false;
                }
            }
        }
        if !valid {
            return;
        }

        let face = MeshBuilderFace::new(indices, NormalPolicy::UseVertexNormals, line);
        let back = two_sided.then(|| face.back_face());
        for face in std::iter::once(face).chain(back) {
            if let Err(err) = self.current.add_face(face) {
                arguments.error(self.sink, format!("{} failed: {err}", arguments.command()));
            }
        }
    }

    pub(super) fn cube(&mut self, arguments: &Arguments<'_>, line: usize) {
        let x = arguments.double(self.sink, 0, "HalfWidth", 0.0);
        let y = arguments.double(self.sink, 1, "HalfHeight", x);
        let z = arguments.double(self.sink, 2, "HalfDepth", x);
        self.current.add_cube(DVec3::new(x, y, z), line);
    }

    pub(super) fn cylinder(&mut self, arguments: &Arguments<'_>, line: usize) {
        let Some(segments) = arguments.required_int(self.sink, 0, "n", NumericRange::unbounded()) else {
            return;
        };
        let (_, violation) = NumericRange::at_least(MIN_CYLINDER_SEGMENTS).clamp(segments);
        if let Some(violation) = violation {
            arguments.error(self.sink, format!("n in {} {violation}", arguments.command()));
            return;
        }
        let upper_radius = arguments.double(self.sink, 1, "UpperRadius", 0.0);
        let lower_radius = arguments.double(self.sink, 2, "LowerRadius", 0.0);
        let height = arguments.double(self.sink, 3, "Height", 0.0);
        // segments >= 2 here, so the conversion cannot fail
        let segments = usize::try_from(segments).unwrap_or_default();
        self.current
            .add_cylinder(segments, upper_radius, lower_radius, height, line);
    }
}
