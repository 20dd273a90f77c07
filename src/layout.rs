use log::debug;

use crate::config::{TILE_BORDER_FOCUS, TILE_BORDER_WIDTH, TILE_MARGIN, TILE_RATIO};
use crate::error::Result;
use crate::palette::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayout {
    pub ratio: f32,
    pub add_on_top: bool,
    pub border_focus: Color,
    pub border_width: u32,
    pub margin: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSpec {
    Tile(TileLayout),
    Max,
}

impl LayoutSpec {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutSpec::Tile(_) => "tile",
            LayoutSpec::Max => "max",
        }
    }
}

pub fn build_layouts() -> Result<Vec<LayoutSpec>> {
    Ok(vec![
        LayoutSpec::Tile(TileLayout {
            ratio: TILE_RATIO,
            add_on_top: false,
            border_focus: Color::parse(TILE_BORDER_FOCUS)?,
            border_width: TILE_BORDER_WIDTH,
            margin: TILE_MARGIN,
        }),
        LayoutSpec::Max,
    ])
}

/// Tracks which configured layout is active; `next` wraps around.
pub struct LayoutCycle<'a> {
    layouts: &'a [LayoutSpec],
    current: usize,
}

impl<'a> LayoutCycle<'a> {
    pub fn new(layouts: &'a [LayoutSpec]) -> Self {
        Self {
            layouts,
            current: 0,
        }
    }

    pub fn current(&self) -> Option<&'a LayoutSpec> {
        self.layouts.get(self.current)
    }

    pub fn next(&mut self) -> Option<&'a LayoutSpec> {
        if self.layouts.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.layouts.len();
        let layout = self.current();
        debug!("New layout activated: {:?}", layout.map(LayoutSpec::name));
        layout
    }
}
