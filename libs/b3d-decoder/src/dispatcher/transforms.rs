//! Affine commands and their "-All" variants.

use super::Dispatcher;
use b3d_syntax::Arguments;
use glam::DVec3;

impl Dispatcher<'_> {
    /// Reads three consecutive doubles starting at `first`.
    fn vector(&mut self, arguments: &Arguments<'_>, first: usize, names: [&str; 3], default: f64) -> DVec3 {
        let [x, y, z] = names;
        DVec3::new(
            arguments.double(self.sink, first, x, default),
            arguments.double(self.sink, first + 1, y, default),
            arguments.double(self.sink, first + 2, z, default),
        )
    }

    pub(super) fn translate(&mut self, arguments: &Arguments<'_>, all: bool) {
        let offset = self.vector(arguments, 0, ["X", "Y", "Z"], 0.0);
        self.apply(all, |builder| builder.translate(offset));
    }

    pub(super) fn scale(&mut self, arguments: &Arguments<'_>, all: bool) {
        let factor = self.vector(arguments, 0, ["X", "Y", "Z"], 1.0);
        self.apply(all, |builder| builder.scale(factor));
    }

    /// A null axis falls back to the x axis.
    pub(super) fn rotate(&mut self, arguments: &Arguments<'_>, all: bool) {
        let axis = self.vector(arguments, 0, ["X", "Y", "Z"], 0.0);
        let angle = arguments.double(self.sink, 3, "Angle", 0.0);
        let axis = axis.try_normalize().unwrap_or(DVec3::X);
        let (sin, cos) = angle.to_radians().sin_cos();
        self.apply(all, |builder| builder.rotate(axis, cos, sin));
    }

    pub(super) fn shear(&mut self, arguments: &Arguments<'_>, all: bool) {
        let direction = self.vector(arguments, 0, ["dX", "dY", "dZ"], 0.0);
        let shift = self.vector(arguments, 3, ["sX", "sY", "sZ"], 0.0);
        let ratio = arguments.double(self.sink, 6, "Ratio", 0.0);
        let direction = direction.normalize_or_zero();
        let shift = shift.normalize_or_zero();
        self.apply(all, |builder| builder.shear(direction, shift, ratio));
    }

    /// Any nonzero flag mirrors that axis.
    pub(super) fn mirror(&mut self, arguments: &Arguments<'_>, all: bool) {
        let flags = self.vector(arguments, 0, ["X", "Y", "Z"], 0.0);
        let (x, y, z) = (flags.x != 0.0, flags.y != 0.0, flags.z != 0.0);
        self.apply(all, |builder| builder.mirror(x, y, z));
    }
}
