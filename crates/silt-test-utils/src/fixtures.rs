//! Named acceptance scenarios.
//!
//! Each [`Scenario`] is an ASCII region layout (`.` marks a free unit,
//! any other byte is occupied data) plus the exact diagnostic line
//! expected before and after compaction.

use indexmap::IndexMap;

/// A region layout with its expected reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    /// `.` is free; every other byte is stored as its ASCII value.
    pub layout: &'static str,
    /// Expected report straight after construction.
    pub before: &'static str,
    /// Expected report after `defragment()`.
    pub after: &'static str,
}

impl Scenario {
    /// The layout as a unit buffer of any type that widens from `u8`.
    pub fn units<T: From<u8>>(&self) -> Vec<T> {
        ascii_units(self.layout)
    }

    /// The layout after compaction: all free units first, then the
    /// occupied bytes in their original order.
    pub fn compacted_layout(&self) -> String {
        let free = self.layout.bytes().filter(|b| *b == b'.').count();
        let mut out = ".".repeat(free);
        out.extend(self.layout.chars().filter(|c| *c != '.'));
        out
    }
}

/// Convert an ASCII layout into units, mapping `.` to zero.
pub fn ascii_units<T: From<u8>>(layout: &str) -> Vec<T> {
    layout
        .bytes()
        .map(|b| T::from(if b == b'.' { 0 } else { b }))
        .collect()
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "empty",
        layout: "",
        before: "Free block length: 0 | Occupied block contents: \n",
        after: "Free block length: 0 | Occupied block contents: \n",
    },
    Scenario {
        name: "one occupied",
        layout: "A",
        before: "Free block length: 0 | Occupied block contents: A\n",
        after: "Free block length: 0 | Occupied block contents: A\n",
    },
    Scenario {
        name: "two occupied",
        layout: "ZW",
        before: "Free block length: 0 | Occupied block contents: ZW\n",
        after: "Free block length: 0 | Occupied block contents: ZW\n",
    },
    Scenario {
        name: "one free",
        layout: ".",
        before: "Free block length: 1 | Occupied block contents: \n",
        after: "Free block length: 1 | Occupied block contents: \n",
    },
    Scenario {
        name: "ten occupied",
        layout: "AAAAAAAAAA",
        before: "Free block length: 0 | Occupied block contents: AAAAAAAAAA\n",
        after: "Free block length: 0 | Occupied block contents: AAAAAAAAAA\n",
    },
    Scenario {
        name: "ten free",
        layout: "..........",
        before: "Free block length: 10 | Occupied block contents: \n",
        after: "Free block length: 10 | Occupied block contents: \n",
    },
    Scenario {
        name: "occupied then free",
        layout: "AA..",
        before: "Free block length: 2 | Occupied block contents: AA\n",
        after: "Free block length: 2 | Occupied block contents: AA\n",
    },
    Scenario {
        name: "free then occupied",
        layout: "..AA",
        before: "Free block length: 2 | Occupied block contents: AA\n",
        after: "Free block length: 2 | Occupied block contents: AA\n",
    },
    Scenario {
        name: "free between occupied",
        layout: "AA..BB",
        before: "Free block length: 2 | Occupied block contents: AA, BB\n",
        after: "Free block length: 2 | Occupied block contents: AABB\n",
    },
    Scenario {
        name: "free occupied free",
        layout: "...AA..",
        before: "Free block length: 3, 2 | Occupied block contents: AA\n",
        after: "Free block length: 5 | Occupied block contents: AA\n",
    },
    Scenario {
        name: "free both sides",
        layout: "..AA..",
        before: "Free block length: 2, 2 | Occupied block contents: AA\n",
        after: "Free block length: 4 | Occupied block contents: AA\n",
    },
    Scenario {
        name: "alternating",
        layout: ".A.B",
        before: "Free block length: 1, 1 | Occupied block contents: A, B\n",
        after: "Free block length: 2 | Occupied block contents: AB\n",
    },
    Scenario {
        name: "three runs",
        layout: "AA..BBB...CCCC",
        before: "Free block length: 2, 3 | Occupied block contents: AA, BBB, CCCC\n",
        after: "Free block length: 5 | Occupied block contents: AABBBCCCC\n",
    },
    Scenario {
        name: "leading free three runs",
        layout: "....AA..BBB...CCCC",
        before: "Free block length: 4, 2, 3 | Occupied block contents: AA, BBB, CCCC\n",
        after: "Free block length: 9 | Occupied block contents: AABBBCCCC\n",
    },
    Scenario {
        name: "contiguous",
        layout: "...CONTI.....GUOU..S!",
        before: "Free block length: 3, 5, 2 | Occupied block contents: CONTI, GUOU, S!\n",
        after: "Free block length: 10 | Occupied block contents: CONTIGUOUS!\n",
    },
];

/// Every scenario, keyed by name, in a fixed order.
pub fn catalog() -> IndexMap<&'static str, Scenario> {
    SCENARIOS.iter().map(|s| (s.name, *s)).collect()
}
