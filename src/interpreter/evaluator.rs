/// Postfix evaluation against the variable environment.
///
/// Scans a postfix sequence with an operand stack, resolving identifiers and
/// checking that every operator finds its two operands.
pub mod core;

/// Integer arithmetic for the six operators.
///
/// Every operation is checked: division by zero, negative exponents and
/// overflow are reported instead of panicking or wrapping.
pub mod arithmetic;
