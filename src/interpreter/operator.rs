/// The six binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

/// How repeated operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Precedence and associativity of one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// The operator this entry describes.
    pub operator:      Operator,
    /// The source symbol.
    pub symbol:        &'static str,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

/// The operator table, indexed in the order of [`Operator`]'s variants.
pub const OPERATOR_TABLE: [OperatorSpec; 6] =
    [OperatorSpec { operator:      Operator::Add,
                    symbol:        "+",
                    precedence:    0,
                    associativity: Associativity::Left, },
     OperatorSpec { operator:      Operator::Sub,
                    symbol:        "-",
                    precedence:    0,
                    associativity: Associativity::Left, },
     OperatorSpec { operator:      Operator::Mul,
                    symbol:        "*",
                    precedence:    5,
                    associativity: Associativity::Left, },
     OperatorSpec { operator:      Operator::Div,
                    symbol:        "/",
                    precedence:    5,
                    associativity: Associativity::Left, },
     OperatorSpec { operator:      Operator::Mod,
                    symbol:        "%",
                    precedence:    5,
                    associativity: Associativity::Left, },
     OperatorSpec { operator:      Operator::Pow,
                    symbol:        "^",
                    precedence:    10,
                    associativity: Associativity::Right, }];

impl Operator {
    /// Looks up this operator's entry in [`OPERATOR_TABLE`].
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::operator::{Associativity, Operator};
    ///
    /// assert_eq!(Operator::Pow.spec().associativity, Associativity::Right);
    /// assert!(Operator::Mul.precedence() > Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn spec(self) -> OperatorSpec {
        OPERATOR_TABLE[self as usize]
    }

    /// Binding strength of the operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        self.spec().precedence
    }

    /// Grouping of the operator.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        self.spec().associativity
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    /// Whether `self`, arriving at the converter, must first pop `top` off the
    /// operator stack.
    ///
    /// Left-associative operators yield to anything of equal or higher
    /// precedence; right-associative ones only to strictly higher precedence.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Sub.yields_to(Operator::Add));
    /// assert!(!Operator::Pow.yields_to(Operator::Pow));
    /// assert!(Operator::Mul.yields_to(Operator::Pow));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
