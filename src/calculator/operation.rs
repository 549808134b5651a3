use std::fmt;

/// One of the fixed arithmetic operations exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Percentage,
}

impl Operation {
    /// Every operation, in route registration order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Percentage,
    ];

    /// Tag reported in the `operation` field of a successful response.
    pub fn tag(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Percentage => "percentage",
        }
    }

    /// Final URL segment under `/api/v1/calculate/`.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Percentage => "percentage",
        }
    }

    /// Number of operands the request body carries (`a` only, or `a` and `b`).
    pub fn arity(self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
