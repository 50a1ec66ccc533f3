//! Export options.

/// Export configuration.
///
/// Supplied once per build and immutable for its duration. Only
/// `include_transform` is interpreted by the normalization core; the
/// remaining fields are recorded on the built scene for the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Mirror one axis during coordinate conversion.
    pub flip_handedness: bool,
    /// Reverse polygon winding.
    pub flip_faces: bool,
    /// Whether local TRS is recorded per node.
    pub include_transform: bool,
    /// Merge triangle pairs into quads.
    pub quadify: bool,
    /// Search all triangle pairs when quadifying.
    pub quadify_full_search: bool,
    /// Maximum angle between triangles merged into a quad, in degrees.
    pub quadify_threshold_angle: f32,
    /// Uniform scale applied during coordinate conversion.
    pub scale_factor: f32,
    /// System unit of the output scene.
    pub system_unit: SystemUnit,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            flip_handedness: true,
            flip_faces: true,
            include_transform: true,
            quadify: true,
            quadify_full_search: false,
            quadify_threshold_angle: 20.0,
            scale_factor: 1.0,
            system_unit: SystemUnit::Meter,
        }
    }
}

/// System unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemUnit {
    /// Millimeter.
    Millimeter,
    /// Centimeter.
    Centimeter,
    /// Decimeter.
    Decimeter,
    /// Meter.
    Meter,
    /// Kilometer.
    Kilometer,
}
