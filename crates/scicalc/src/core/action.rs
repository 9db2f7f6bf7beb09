//! Calculator actions as a closed, tagged enum.
//!
//! Every button on the keypad and every mapped key resolves to one of
//! these variants; [`crate::core::Calculator::apply`] dispatches them with
//! an exhaustive `match`, so adding a variant forces every dispatch site
//! to handle it.

/// A named function button; appends `name(` to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine (radians, or degrees in degree mode).
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Square root.
    Sqrt,
    /// Logarithm.
    Log,
}

impl Function {
    /// The identifier as it appears in an expression.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
        }
    }

    /// The text inserted when the button is pressed: `name` plus the
    /// opening parenthesis, matching the on-screen labels.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Sqrt => "sqrt(",
            Self::Log => "log(",
        }
    }
}

/// A named constant button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// The identifier inserted into the expression.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

/// Every operation the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Insert a digit (0-9).
    Digit(u8),
    /// Insert the decimal point.
    Decimal,
    /// Insert a binary operator character (`+ - * / ^ %`).
    Operator(char),
    /// Insert an opening parenthesis.
    OpenParen,
    /// Insert a closing parenthesis.
    CloseParen,
    /// Insert a function call prefix, e.g. `sin(`.
    Function(Function),
    /// Insert a named constant, e.g. `pi`.
    Constant(Constant),
    /// Run the bracket check and evaluate the buffer.
    Equals,
    /// Clear the buffer and the result display.
    Clear,
    /// Remove the character before the cursor.
    Backspace,
    /// Add the current result to the memory register.
    MemoryAdd,
    /// Subtract the current result from the memory register.
    MemorySubtract,
    /// Append the memory register's value to the buffer.
    MemoryRecall,
    /// Reset the memory register to zero.
    MemoryClear,
    /// Switch between radians and degrees.
    ToggleAngleMode,
}

impl Action {
    /// The text this action inserts into the buffer, if it is an
    /// insertion action.
    #[must_use]
    pub fn token(self) -> Option<String> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).map(String::from),
            Self::Decimal => Some(".".into()),
            Self::Operator(op) => Some(op.to_string()),
            Self::OpenParen => Some("(".into()),
            Self::CloseParen => Some(")".into()),
            Self::Function(f) => Some(f.token().into()),
            Self::Constant(c) => Some(c.token().into()),
            Self::Equals
            | Self::Clear
            | Self::Backspace
            | Self::MemoryAdd
            | Self::MemorySubtract
            | Self::MemoryRecall
            | Self::MemoryClear
            | Self::ToggleAngleMode => None,
        }
    }

    /// Maps a literal input character to its insertion action, mirroring
    /// the on-screen buttons. Characters outside the button set yield
    /// `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '+' | '-' | '*' | '/' | '^' | '%' => Some(Self::Operator(c)),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            _ => None,
        }
    }
}
