// fb-core/src/units.rs

use uom::si::f64::{Force as UomForce, Ratio as UomRatio};

// Public canonical unit types (SI, f64)
pub type Force = UomForce;
pub type Ratio = UomRatio;

#[inline]
pub fn n(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Force value in newtons.
#[inline]
pub fn to_newtons(f: Force) -> f64 {
    use uom::si::force::newton;
    f.get::<newton>()
}

/// Ratio as a bare multiplier.
#[inline]
pub fn to_unitless(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}
