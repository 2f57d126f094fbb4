/// The cursor module owns the expression text and the scan position.
///
/// All grammar layers read the input exclusively through the cursor's
/// one-character lookahead. There is no separate token stream.
///
/// # Responsibilities
/// - Provides `peek`, `advance`, and whitespace skipping.
/// - Reports positions as character offsets for error messages.
pub mod cursor;
/// The lexer module scans number literals and variable names.
///
/// These are the leaves of the grammar: each scan consumes a maximal run of
/// characters from the cursor and turns it into a [`Value`](value::core::Value).
///
/// # Responsibilities
/// - Scans decimal literals, rejecting a second decimal point.
/// - Scans identifiers and resolves them against the variable table.
pub mod lexer;
/// The normalize module post-processes the final value of an evaluation.
///
/// Scalars and every magnitude of a composite are snapped onto nearby
/// integers to absorb floating-point noise, and the result is wrapped in an
/// [`Outcome`](normalize::Outcome).
pub mod normalize;
/// The parser module evaluates the expression while descending the grammar.
///
/// Each precedence level calls the next tighter-binding level and combines the
/// returned values immediately, so no syntax tree is ever built.
///
/// # Responsibilities
/// - Implements addition, multiplication, exponentiation, grouping, and
///   unary minus.
/// - Reports syntax errors with the character index where they were detected.
/// - Requires the complete input to be consumed.
pub mod parser;
/// The value module defines the operands the grammar works on.
///
/// A value is either a plain scalar or an opaque composite implementing the
/// [`Composite`](value::composite::Composite) capability set. The module also
/// ships [`TimeSeries`](value::series::TimeSeries), a composite made of
/// timestamped magnitudes.
///
/// # Responsibilities
/// - Defines the `Value` enum and its arithmetic dispatch.
/// - Defines the capability trait composites must implement.
pub mod value;
/// The variables module holds the names an expression may reference.
///
/// The table is seeded with the constants `pi` and `e` and extended with the
/// caller's bindings. It is built once per evaluation and never mutated
/// afterwards.
pub mod variables;
