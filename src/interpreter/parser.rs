/// Parser state and the expression entry point.
///
/// Holds the cursor and the variable table, and checks that the whole input
/// is consumed.
pub mod core;

/// Binary operator levels.
///
/// Implements addition and subtraction, multiplication and division, and the
/// left-to-right exponent reduction.
pub mod binary;

/// Grouping, unary minus, and leaf values.
///
/// Handles parenthesized subexpressions, prefix negation, and the dispatch to
/// number or variable scanning.
pub mod unary;
