// PolyPlot - core/polynomial.rs
//
// The plotted function. Coefficients are fixed at compile time; there is
// no user-supplied function input.

/// A polynomial with constant coefficients over a common divisor.
///
/// `coefficients[0]` belongs to the highest power of x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: &'static [f64],
    divisor: f64,
}

/// f(x) = (x^6 - 2x^5 - 26x^4 + 28x^3 + 145x^2 - 26x - 80) / 100
pub const SEXTIC: Polynomial = Polynomial {
    coefficients: &[1.0, -2.0, -26.0, 28.0, 145.0, -26.0, -80.0],
    divisor: 100.0,
};

impl Polynomial {
    /// Coefficients highest power first, all divided by `divisor`.
    pub const fn new(coefficients: &'static [f64], divisor: f64) -> Self {
        Self {
            coefficients,
            divisor,
        }
    }

    /// Evaluate at `x` using Horner's rule.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &c| acc * x + c)
            / self.divisor
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        SEXTIC
    }
}
