use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// All shape types and overlap tests are generic over this trait, implementations
/// are provided for `f32` and `f64`.
pub trait Real: num_traits::real::Real + FuzzyEq + std::fmt::Debug {
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
