use super::FuzzyOrd;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared and ordered.
///
/// All geometry in this crate is generic over `Real` with `f64` as the
/// default; layers and the overlay engine use the default.
pub trait Real:
    num_traits::real::Real + num_traits::Bounded + FuzzyOrd + Default + std::fmt::Debug + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Degrees to radians conversion factor (`PI / 180`).
    #[inline]
    fn deg_to_rad() -> Self {
        Self::pi() / Self::from(180.0).unwrap()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
