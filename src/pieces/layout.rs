//! Piece layout.
//!
//! Stacks pieces one after another along the sheet's orientation. There is
//! no packing: a vertical sheet is as wide as its widest piece and as tall
//! as all pieces together, and a horizontal sheet is the transpose.

use crate::sheet::Orientation;

/// Where one piece lands in the composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result of laying out a sheet.
///
/// `placements` is in piece declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Size of a piece to be stacked, plus the gap that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSize {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

/// Stack pieces along the given axis.
///
/// Returns `None` when the sheet would not fit in `u32` pixels along the
/// stacking axis.
pub fn stack(sizes: &[PieceSize], orientation: Orientation) -> Option<Layout> {
    let mut placements = Vec::with_capacity(sizes.len());
    let mut extent: u32 = 0;
    let mut cross: u32 = 0;
    // Padding of the previous piece. Trailing padding never grows the sheet.
    let mut gap: u32 = 0;

    for (i, size) in sizes.iter().enumerate() {
        let start = if i == 0 { 0 } else { extent.checked_add(gap)? };

        let (along, across) = match orientation {
            Orientation::Vertical => (size.height, size.width),
            Orientation::Horizontal => (size.width, size.height),
        };

        let placement = match orientation {
            Orientation::Vertical => Placement {
                x: 0,
                y: start,
                width: size.width,
                height: size.height,
            },
            Orientation::Horizontal => Placement {
                x: start,
                y: 0,
                width: size.width,
                height: size.height,
            },
        };

        extent = start.checked_add(along)?;
        cross = cross.max(across);
        gap = size.padding;

        placements.push(placement);
    }

    let (width, height) = match orientation {
        Orientation::Vertical => (cross, extent),
        Orientation::Horizontal => (extent, cross),
    };

    Some(Layout {
        placements,
        width,
        height,
    })
}
