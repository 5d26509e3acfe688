//! Classic corporate failure cases used as ready-made problem statements.

use serde::Serialize;

/// A well-known strategic failure with a canned problem statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassicCase {
    pub name: &'static str,
    pub problem: &'static str,
}

const CLASSIC_CASES: &[ClassicCase] = &[
    ClassicCase {
        name: "Nokia",
        problem: "Failed to adapt from feature phones to smartphone OS ecosystems (iOS/Android).",
    },
    ClassicCase {
        name: "Kodak",
        problem: "Underestimated the shift to digital photography despite inventing it internally.",
    },
    ClassicCase {
        name: "Blockbuster",
        problem: "Ignored/late to video streaming disruption and online subscription models.",
    },
    ClassicCase {
        name: "Sears",
        problem: "Lost retail share to e-commerce and discounters due to slow digital pivot.",
    },
    ClassicCase {
        name: "Pan Am",
        problem: "High fixed costs, deregulation shocks, and financial mismanagement led to collapse.",
    },
];

impl ClassicCase {
    /// Returns all cases in presentation order.
    pub fn all() -> &'static [ClassicCase] {
        CLASSIC_CASES
    }

    /// Finds a case by name, ignoring case and surrounding whitespace.
    pub fn find(name: &str) -> Option<&'static ClassicCase> {
        let wanted = name.trim();
        CLASSIC_CASES
            .iter()
            .find(|case| case.name.eq_ignore_ascii_case(wanted))
    }
}
