//! Colour, blending and texture commands.
//!
//! Face-level settings apply to the faces the current builder has at the
//! time of the command. Texture settings apply to the whole builder.

use super::Dispatcher;
use b3d_mesh::{BlendMode, Color24, GlowAttenuation};
use b3d_syntax::{Arguments, NumericRange};
use config::constants::{COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN, DEFAULT_ALPHA, MAX_GLOW_HALF_DISTANCE};
use glam::DVec2;

const CHANNEL: NumericRange<i32> = NumericRange::between(COLOR_CHANNEL_MIN, COLOR_CHANNEL_MAX);

impl Dispatcher<'_> {
    fn channel(&mut self, arguments: &Arguments<'_>, index: usize, name: &str, default: u8) -> u8 {
        let value = arguments.int(self.sink, index, name, i32::from(default), CHANNEL);
        u8::try_from(value).unwrap_or(default)
    }

    fn color(&mut self, arguments: &Arguments<'_>) -> Color24 {
        Color24::new(
            self.channel(arguments, 0, "Red", 0),
            self.channel(arguments, 1, "Green", 0),
            self.channel(arguments, 2, "Blue", 0),
        )
    }

    pub(super) fn set_color(&mut self, arguments: &Arguments<'_>) {
        let color = self.color(arguments);
        let alpha = self.channel(arguments, 3, "Alpha", DEFAULT_ALPHA);
        self.current.set_color(color, alpha);
    }

    pub(super) fn set_emissive_color(&mut self, arguments: &Arguments<'_>) {
        let color = self.color(arguments);
        self.current.set_emissive_color(color);
    }

    pub(super) fn set_decal_transparent_color(&mut self, arguments: &Arguments<'_>) {
        let color = self.color(arguments);
        self.current.set_transparent_color(color);
    }

    pub(super) fn set_blend_mode(&mut self, arguments: &Arguments<'_>) {
        let mode = match arguments.text(0) {
            None => BlendMode::default(),
            Some(keyword) => BlendMode::parse(keyword).unwrap_or_else(|| {
                arguments.error(
                    self.sink,
                    format!("The given BlendMode {keyword} is not supported in {}", arguments.command()),
                );
                BlendMode::default()
            }),
        };
        let glow = arguments.int(
            self.sink,
            1,
            "GlowHalfDistance",
            0,
            NumericRange::between(0, MAX_GLOW_HALF_DISTANCE),
        );
        let attenuation = match arguments.text(2) {
            None => GlowAttenuation::default(),
            Some(keyword) => GlowAttenuation::parse(keyword).unwrap_or_else(|| {
                arguments.error(
                    self.sink,
                    format!(
                        "The given GlowAttenuationMode {keyword} is not supported in {}",
                        arguments.command()
                    ),
                );
                GlowAttenuation::default()
            }),
        };
        let glow = u16::try_from(glow).unwrap_or_default();
        self.current.set_blend_mode(mode, glow, attenuation);
    }

    pub(super) fn load_texture(&mut self, arguments: &Arguments<'_>) {
        let Some(daytime) = arguments.text(0) else {
            arguments.error(
                self.sink,
                format!("Argument 1 (DaytimeTexture) is required in {}", arguments.command()),
            );
            return;
        };
        let nighttime = arguments.text(1).map(str::to_string);
        self.current.set_textures(daytime, nighttime);
    }

    /// An index outside the current builder voids the command.
    pub(super) fn set_texture_coordinates(&mut self, arguments: &Arguments<'_>) {
        let Some(index) = arguments.required_int(self.sink, 0, "VertexIndex", NumericRange::unbounded()) else {
            return;
        };
        let u = arguments.double(self.sink, 1, "X", 0.0);
        let v = arguments.double(self.sink, 2, "Y", 0.0);
        let count = self.current.vertex_count();
        let updated = usize::try_from(index).ok().and_then(|vertex| {
            self.current
                .set_texture_coordinates(vertex, DVec2::new(u, v))
                .ok()
        });
        if updated.is_none() {
            arguments.error(
                self.sink,
                format!(
                    "VertexIndex in {} references vertex {index}, but only {count} vertices exist",
                    arguments.command()
                ),
            );
        }
    }
}
