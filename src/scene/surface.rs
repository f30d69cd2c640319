//! Surface behaviours interpreted by the kernel.
//!
//! Surfaces carry no geometry. They describe what happens to a ray that hits the shape
//! they are bound to: its colour is multiplied, it is reflected, it is bent by an idealized
//! thin lens, or it picks one of two colours from a checkerboard laid out in the shape's
//! own surface coordinates.

use crate::constants::{
    CYLINDRICAL_FOCUSSING_TYPE, IDEAL_REFRACTION_TYPE, PHASE_HOLOGRAM_REFRACTION_TYPE,
    SPHERICAL_FOCUSSING_TYPE, SurfaceKind, TORIC_FOCUSSING_TYPE, TWO_SURFACE_COLOUR_FACTOR,
};
use crate::error::{MirrorBoxError, Result};
use crate::math::{self, BLACK, BLUE, GRAY20, GRAY80, GREEN, RED, Vec3, Vec4, WHITE};

/// Flat colour that multiplies the ray's colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourSurface {
    pub colour_factor: Vec4,
    pub semitransparent: bool,
}

impl ColourSurface {
    pub const WHITE: Self = Self::new(WHITE, false);
    pub const BLACK: Self = Self::new(BLACK, false);
    pub const RED: Self = Self::new(RED, false);
    pub const GREEN: Self = Self::new(GREEN, false);
    pub const BLUE: Self = Self::new(BLUE, false);

    pub const fn new(colour_factor: Vec4, semitransparent: bool) -> Self {
        Self {
            colour_factor,
            semitransparent,
        }
    }
}

/// Specular reflector; `colour_factor` encodes the reflection coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorSurface {
    pub colour_factor: Vec4,
}

impl MirrorSurface {
    pub const PERFECT: Self = Self::new(WHITE);

    pub const fn new(colour_factor: Vec4) -> Self {
        Self { colour_factor }
    }

    /// Mirror that reflects a fraction `coefficient` of the incident light.
    pub fn with_reflection_coefficient(coefficient: f32) -> Self {
        Self::new(math::coefficient_to_colour_factor(coefficient))
    }
}

/// How a thin focussing surface distributes its optical power.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FocussingType {
    #[default]
    Spherical,
    /// power only along the optical-power direction
    Cylindrical,
    Toric,
}

impl FocussingType {
    pub const fn code(self) -> i32 {
        match self {
            Self::Spherical => SPHERICAL_FOCUSSING_TYPE,
            Self::Cylindrical => CYLINDRICAL_FOCUSSING_TYPE,
            Self::Toric => TORIC_FOCUSSING_TYPE,
        }
    }
}

/// Deflection law used by a thin focussing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RefractionType {
    #[default]
    Ideal,
    PhaseHologram,
}

impl RefractionType {
    pub const fn code(self) -> i32 {
        match self {
            Self::Ideal => IDEAL_REFRACTION_TYPE,
            Self::PhaseHologram => PHASE_HOLOGRAM_REFRACTION_TYPE,
        }
    }
}

/// Idealized thin lens or curved mirror.
///
/// The kernel combines `optical_power`, `focussing_type` and the power direction to
/// decide how a ray is bent at the principal point's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinFocussingSurface {
    pub principal_point: Vec3,
    pub optical_power: f32,
    pub focussing_type: FocussingType,
    n_optical_power_direction: Vec3,
    /// true for a focussing mirror, false for a lens
    pub reflective: bool,
    pub refraction_type: RefractionType,
    pub colour_factor: Vec4,
}

impl ThinFocussingSurface {
    /// Ideal spherical thin lens of unit power at the origin with two-interface losses.
    pub const IDEAL_THIN_LENS: Self = Self {
        principal_point: Vec3::ZERO,
        optical_power: 1.0,
        focussing_type: FocussingType::Spherical,
        n_optical_power_direction: Vec3::X,
        reflective: false,
        refraction_type: RefractionType::Ideal,
        colour_factor: TWO_SURFACE_COLOUR_FACTOR,
    };

    pub fn new(
        principal_point: Vec3,
        optical_power: f32,
        focussing_type: FocussingType,
        optical_power_direction: Vec3,
        reflective: bool,
        refraction_type: RefractionType,
        colour_factor: Vec4,
    ) -> Result<Self> {
        Ok(Self {
            principal_point,
            optical_power,
            focussing_type,
            n_optical_power_direction: math::normalized(
                optical_power_direction,
                "optical-power direction",
            )?,
            reflective,
            refraction_type,
            colour_factor,
        })
    }

    pub fn n_optical_power_direction(&self) -> Vec3 {
        self.n_optical_power_direction
    }

    pub fn set_optical_power_direction(&mut self, direction: Vec3) -> Result<()> {
        self.n_optical_power_direction = math::normalized(direction, "optical-power direction")?;
        Ok(())
    }
}

impl Default for ThinFocussingSurface {
    fn default() -> Self {
        Self::IDEAL_THIN_LENS
    }
}

/// Two-colour periodic tiling over the shape's surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerboardSurface {
    width1: f32,
    width2: f32,
    pub colour_factor1: Vec4,
    pub colour_factor2: Vec4,
    pub semitransparent1: bool,
    pub semitransparent2: bool,
}

impl CheckerboardSurface {
    pub const BLACK_WHITE: Self = Self {
        width1: 1.0,
        width2: 1.0,
        colour_factor1: WHITE,
        colour_factor2: BLACK,
        semitransparent1: false,
        semitransparent2: false,
    };

    pub const BLACK_WHITE_SEMITRANSPARENT: Self = Self {
        semitransparent1: true,
        semitransparent2: true,
        ..Self::BLACK_WHITE
    };

    pub const GRAY_SEMITRANSPARENT: Self = Self {
        colour_factor1: GRAY20,
        colour_factor2: GRAY80,
        ..Self::BLACK_WHITE_SEMITRANSPARENT
    };

    /// Creates a checkerboard; both widths must be finite and positive.
    pub fn new(
        width1: f32,
        width2: f32,
        colour_factor1: Vec4,
        colour_factor2: Vec4,
        semitransparent1: bool,
        semitransparent2: bool,
    ) -> Result<Self> {
        for (name, width) in [("width1", width1), ("width2", width2)] {
            if !width.is_finite() || width <= 0.0 {
                return Err(MirrorBoxError::InvalidParameter(format!(
                    "checkerboard {} must be positive, got {}",
                    name, width
                )));
            }
        }
        Ok(Self {
            width1,
            width2,
            colour_factor1,
            colour_factor2,
            semitransparent1,
            semitransparent2,
        })
    }

    pub fn width1(&self) -> f32 {
        self.width1
    }

    pub fn width2(&self) -> f32 {
        self.width2
    }

    /// Checker class (0 or 1) at surface coordinates `(u, v)`.
    ///
    /// ```
    /// use mirrorbox::scene::CheckerboardSurface;
    ///
    /// let board = CheckerboardSurface::BLACK_WHITE;
    /// assert_eq!(board.pattern_class(0.5, 0.5), 0);
    /// assert_eq!(board.pattern_class(1.5, 0.5), 1);
    /// assert_eq!(board.pattern_class(-0.5, 0.5), 1);
    /// ```
    pub fn pattern_class(&self, u: f32, v: f32) -> u8 {
        let sum = (u / self.width1).floor() + (v / self.width2).floor();
        sum.rem_euclid(2.0) as u8
    }

    pub fn colour_factor_at(&self, u: f32, v: f32) -> Vec4 {
        match self.pattern_class(u, v) {
            0 => self.colour_factor1,
            _ => self.colour_factor2,
        }
    }

    pub fn is_semitransparent_at(&self, u: f32, v: f32) -> bool {
        match self.pattern_class(u, v) {
            0 => self.semitransparent1,
            _ => self.semitransparent2,
        }
    }
}

impl Default for CheckerboardSurface {
    fn default() -> Self {
        Self::BLACK_WHITE
    }
}

/// Any surface, tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Colour(ColourSurface),
    Mirror(MirrorSurface),
    ThinFocussing(ThinFocussingSurface),
    Checkerboard(CheckerboardSurface),
}

impl Surface {
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Colour(_) => SurfaceKind::Colour,
            Self::Mirror(_) => SurfaceKind::Mirror,
            Self::ThinFocussing(_) => SurfaceKind::ThinFocussing,
            Self::Checkerboard(_) => SurfaceKind::Checkerboard,
        }
    }
}

impl From<ColourSurface> for Surface {
    fn from(surface: ColourSurface) -> Self {
        Self::Colour(surface)
    }
}

impl From<MirrorSurface> for Surface {
    fn from(surface: MirrorSurface) -> Self {
        Self::Mirror(surface)
    }
}

impl From<ThinFocussingSurface> for Surface {
    fn from(surface: ThinFocussingSurface) -> Self {
        Self::ThinFocussing(surface)
    }
}

impl From<CheckerboardSurface> for Surface {
    fn from(surface: CheckerboardSurface) -> Self {
        Self::Checkerboard(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_parity() {
        let board = CheckerboardSurface::BLACK_WHITE;
        let samples = [(0.25, 0.75), (3.4, -1.2), (-2.6, 5.9), (10.1, 0.3)];
        for (u, v) in samples {
            assert_eq!(board.pattern_class(u, v), board.pattern_class(u + 2.0, v));
            assert_eq!(board.pattern_class(u, v), board.pattern_class(u, v - 2.0));
            assert_ne!(board.pattern_class(u, v), board.pattern_class(u + 1.0, v));
            assert_ne!(board.pattern_class(u, v), board.pattern_class(u, v + 1.0));
        }
    }

    #[test]
    fn test_checkerboard_widths_and_selection() {
        let board = CheckerboardSurface::new(0.5, 2.0, RED, BLUE, true, false).unwrap();
        assert_eq!(board.pattern_class(0.1, 0.1), 0);
        assert_eq!(board.pattern_class(0.6, 0.1), 1);
        assert_eq!(board.pattern_class(0.1, 2.1), 1);
        assert_eq!(board.colour_factor_at(0.1, 0.1), RED);
        assert_eq!(board.colour_factor_at(0.6, 0.1), BLUE);
        assert!(board.is_semitransparent_at(0.1, 0.1));
        assert!(!board.is_semitransparent_at(0.6, 0.1));
    }

    #[test]
    fn test_checkerboard_rejects_bad_widths() {
        for (w1, w2) in [(0.0, 1.0), (1.0, -1.0), (f32::NAN, 1.0), (1.0, f32::INFINITY)] {
            let result = CheckerboardSurface::new(w1, w2, WHITE, BLACK, false, false);
            assert!(matches!(result, Err(MirrorBoxError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_checkerboard_presets() {
        assert!(CheckerboardSurface::GRAY_SEMITRANSPARENT.semitransparent1);
        assert_eq!(CheckerboardSurface::GRAY_SEMITRANSPARENT.colour_factor2, GRAY80);
        assert_eq!(CheckerboardSurface::BLACK_WHITE_SEMITRANSPARENT.width1(), 1.0);
    }

    #[test]
    fn test_mirror_reflection_coefficient() {
        let mirror = MirrorSurface::with_reflection_coefficient(0.9);
        assert_eq!(mirror.colour_factor, Vec4::new(0.9, 0.9, 0.9, 1.0));
        assert_eq!(MirrorSurface::PERFECT.colour_factor, WHITE);
    }

    #[test]
    fn test_thin_focussing_normalizes_direction() {
        let lens = ThinFocussingSurface::new(
            Vec3::ZERO,
            2.5,
            FocussingType::Cylindrical,
            Vec3::new(0.0, 3.0, 4.0),
            false,
            RefractionType::PhaseHologram,
            TWO_SURFACE_COLOUR_FACTOR,
        )
        .unwrap();
        assert!((lens.n_optical_power_direction() - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
        assert_eq!(lens.focussing_type.code(), CYLINDRICAL_FOCUSSING_TYPE);
        assert_eq!(lens.refraction_type.code(), PHASE_HOLOGRAM_REFRACTION_TYPE);
    }

    #[test]
    fn test_thin_focussing_rejects_zero_direction() {
        let mut lens = ThinFocussingSurface::IDEAL_THIN_LENS;
        assert!(lens.set_optical_power_direction(Vec3::ZERO).is_err());
        assert_eq!(lens.n_optical_power_direction(), Vec3::X);

        let result = ThinFocussingSurface::new(
            Vec3::ZERO,
            1.0,
            FocussingType::Spherical,
            Vec3::ZERO,
            true,
            RefractionType::Ideal,
            WHITE,
        );
        assert!(matches!(result, Err(MirrorBoxError::DegenerateBasis(_))));
    }

    #[test]
    fn test_surface_kind() {
        assert_eq!(Surface::from(ColourSurface::RED).kind(), SurfaceKind::Colour);
        assert_eq!(Surface::from(MirrorSurface::PERFECT).kind(), SurfaceKind::Mirror);
        assert_eq!(
            Surface::from(ThinFocussingSurface::IDEAL_THIN_LENS).kind(),
            SurfaceKind::ThinFocussing
        );
        assert_eq!(
            Surface::from(CheckerboardSurface::BLACK_WHITE).kind(),
            SurfaceKind::Checkerboard
        );
    }
}
