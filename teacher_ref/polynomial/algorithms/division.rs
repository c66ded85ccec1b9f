//! Polynomial Division Algorithms
//!
//! DELETED - Use PolynomialArithmetic trait methods instead:
//! - `expr.poly_div(divisor, var)` for long division
//! - Exact division handled at algebra layer

// This file intentionally left minimal - all polynomial division
// operations are provided through the PolynomialArithmetic trait.
