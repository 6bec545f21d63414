// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bit layout of a double-array unit.
//!
//! ```text
//! node unit:  0 | base (21 bits) | has_leaf | label (9 bits)
//! leaf unit:  1 | value (31 bits)
//! ```
//!
//! Label 0 addresses the leaf unit of a node; byte `b` is label `b + 1`.

const LABEL_MASK: u32 = 0x1FF;
const HAS_LEAF_BIT: u32 = 1 << 9;
const BASE_SHIFT: u32 = 10;
const LEAF_BIT: u32 = 1 << 31;

/// Largest base a node unit can hold.
pub(crate) const MAX_BASE: u32 = (1 << 21) - 1;

/// Label of the edge to a node's leaf unit.
pub(crate) const TERMINATOR: u32 = 0;

/// Label stored in unused units; no lookup ever asks for it.
pub(crate) const VACANT: u32 = LABEL_MASK;

/// Largest label a transition can carry.
pub(crate) const MAX_LABEL: u32 = u8::MAX as u32 + 1;

#[inline]
pub(crate) fn byte_label(byte: u8) -> u32 {
    u32::from(byte) + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit(pub(crate) u32);

impl Unit {
    pub(crate) fn node(label: u32, base: u32, has_leaf: bool) -> Self {
        let leaf = if has_leaf { HAS_LEAF_BIT } else { 0 };
        Unit(((base & MAX_BASE) << BASE_SHIFT) | leaf | (label & LABEL_MASK))
    }

    pub(crate) fn leaf(value: u32) -> Self {
        Unit(LEAF_BIT | (value & !LEAF_BIT))
    }

    pub(crate) fn vacant() -> Self {
        Unit(VACANT)
    }

    /// Label including the leaf bit, so leaf units never match a lookup.
    #[inline]
    pub(crate) fn label(self) -> u32 {
        self.0 & (LEAF_BIT | LABEL_MASK)
    }

    #[inline]
    pub(crate) fn base(self) -> u32 {
        (self.0 >> BASE_SHIFT) & MAX_BASE
    }

    #[inline]
    pub(crate) fn has_leaf(self) -> bool {
        self.0 & HAS_LEAF_BIT != 0
    }

    #[inline]
    pub(crate) fn is_leaf(self) -> bool {
        self.0 & LEAF_BIT != 0
    }

    #[inline]
    pub(crate) fn value(self) -> u32 {
        self.0 & !LEAF_BIT
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
