//! # Command Dispatcher
//!
//! Drives the mesh builders through the command stream of one file.
//!
//! ## State
//!
//! ```text
//! NoBuilder ──CreateMeshBuilder──→ HasBuilder
//!     │                                ↑
//!     └──any other command (warned)────┘
//! ```
//!
//! A builder exists from the start; the state only tracks whether the file
//! opened a block before its first geometry command, so the warning is
//! raised once. Every `CreateMeshBuilder` moves the current builder (even
//! an empty one) onto the accumulated list and starts a fresh one.
//!
//! Command handlers live in submodules grouped by what they touch.

mod appearance;
mod geometry;
mod transforms;

use b3d_mesh::MeshBuilder;
use b3d_syntax::{tokenize_line, Arguments, Command, DiagnosticSink, Dialect, Location};
use config::constants::DecoderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NoBuilder,
    HasBuilder,
}

/// Per-file dispatcher state.
pub(crate) struct Dispatcher<'a> {
    dialect: Dialect,
    path: String,
    config: &'a DecoderConfig,
    sink: &'a mut dyn DiagnosticSink,
    state: State,
    accumulated: Vec<MeshBuilder>,
    current: MeshBuilder,
    commands: usize,
}

impl<'a> Dispatcher<'a> {
    pub(crate) fn new(
        dialect: Dialect,
        path: impl Into<String>,
        config: &'a DecoderConfig,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            dialect,
            path: path.into(),
            config,
            sink,
            state: State::NoBuilder,
            accumulated: Vec::new(),
            current: MeshBuilder::new(),
            commands: 0,
        }
    }

    /// Number of lines that resolved to a command.
    pub(crate) fn command_count(&self) -> usize {
        self.commands
    }

    /// Tokenizes, checks and executes one source line (1-based `line`).
    pub(crate) fn dispatch_line(&mut self, line: usize, raw: &str) {
        let Some(tokens) = tokenize_line(self.dialect, raw) else {
            return;
        };
        let location = Location::new(self.path.as_str(), line);
        let strict = self.config.strict;

        let Some(resolution) = Command::resolve(&tokens.command, self.dialect) else {
            let message = format!("The command {} is not supported", tokens.command);
            Arguments::new(&[], &tokens.command, &location, strict).error(self.sink, message);
            return;
        };
        let command = resolution.command;
        let name = command.name(self.dialect);
        let mut values = tokens.arguments;
        let arguments = Arguments::new(&[], name, &location, strict);

        if strict && tokens.separator_recovered {
            arguments.warning(
                self.sink,
                format!(
                    "{name} must be separated from its arguments by {}",
                    self.dialect.separator_description()
                ),
            );
        }
        if strict && !resolution.canonical {
            arguments.warning(
                self.sink,
                format!(
                    "{} is not the {} spelling of this command; use {name} instead",
                    tokens.command, self.dialect
                ),
            );
        }
        if values.len() > self.config.max_arguments {
            arguments.warning(
                self.sink,
                format!(
                    "{name} was given {} arguments; only the first {} are read",
                    values.len(),
                    self.config.max_arguments
                ),
            );
            values.truncate(self.config.max_arguments);
        }
        let arity = command.arity();
        if !arity.accepts(values.len()) {
            arguments.warning(
                self.sink,
                format!("{name} expects {arity} arguments, but {} were given", values.len()),
            );
        }
        if self.state == State::NoBuilder && command != Command::CreateMeshBuilder && !command.is_placeholder() {
            arguments.warning(
                self.sink,
                format!(
                    "{name} was used before the first {}",
                    Command::CreateMeshBuilder.name(self.dialect)
                ),
            );
            self.state = State::HasBuilder;
        }

        log::trace!("{}:{line}: {command} with {} arguments", self.path, values.len());
        self.commands += 1;
        let arguments = Arguments::new(&values, name, &location, strict);
        self.execute(command, &arguments, line);
    }

    fn execute(&mut self, command: Command, arguments: &Arguments<'_>, line: usize) {
        match command {
            Command::CreateMeshBuilder => self.create_mesh_builder(),
            Command::AddVertex => self.add_vertex(arguments),
            Command::AddFace => self.add_face(arguments, line, false),
            Command::AddFace2 => self.add_face(arguments, line, true),
            Command::Cube => self.cube(arguments, line),
            Command::Cylinder => self.cylinder(arguments, line),
            Command::Translate => self.translate(arguments, false),
            Command::TranslateAll => self.translate(arguments, true),
            Command::Scale => self.scale(arguments, false),
            Command::ScaleAll => self.scale(arguments, true),
            Command::Rotate => self.rotate(arguments, false),
            Command::RotateAll => self.rotate(arguments, true),
            Command::Shear => self.shear(arguments, false),
            Command::ShearAll => self.shear(arguments, true),
            Command::Mirror => self.mirror(arguments, false),
            Command::MirrorAll => self.mirror(arguments, true),
            Command::SetColor => self.set_color(arguments),
            Command::SetEmissiveColor => self.set_emissive_color(arguments),
            Command::SetBlendMode => self.set_blend_mode(arguments),
            Command::LoadTexture => self.load_texture(arguments),
            Command::SetDecalTransparentColor => self.set_decal_transparent_color(arguments),
            Command::SetTextureCoordinates => self.set_texture_coordinates(arguments),
            Command::GenerateNormals => {}
        }
    }

    fn create_mesh_builder(&mut self) {
        let previous = std::mem::take(&mut self.current);
        self.accumulated.push(previous);
        self.state = State::HasBuilder;
    }

    /// Applies `operation` to the current builder, or with `all` set to the
    /// current one first and then every accumulated builder.
    fn apply(&mut self, all: bool, operation: impl Fn(&mut MeshBuilder)) {
        operation(&mut self.current);
        if all {
            self.accumulated.iter_mut().for_each(operation);
        }
    }

    /// Every builder of the file in source order, current one last.
    pub(crate) fn finish(mut self) -> Vec<MeshBuilder> {
        self.accumulated.push(self.current);
        self.accumulated
    }
}
