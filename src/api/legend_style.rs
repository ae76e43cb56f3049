use serde::{Deserialize, Serialize};

use super::{LegendCorner, LegendFlow, LegendLayout, LegendPlacement};

/// Predefined legend configurations.
///
/// Each variant maps to a fresh [`LegendLayout`] value; nothing is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LegendStyle {
    #[default]
    UpLeftInBlock,
    UpLeftInLine,
    UpRightInBlock,
    UpRightInLine,
    BottomLeftInBlock,
    BottomLeftInLine,
    BottomRightInBlock,
    BottomRightInLine,
    UpCenterInLine,
    BottomCenterInLine,
    UpCenterOutLine,
    UpLeftOutLine,
    UpRightOutLine,
    BottomCenterOutLine,
    UpLeftSideBlock,
    UpRightSideBlock,
    BottomLeftSideBlock,
    BottomRightSideBlock,
}

impl LegendStyle {
    pub const ALL: [Self; 18] = [
        Self::UpLeftInBlock,
        Self::UpLeftInLine,
        Self::UpRightInBlock,
        Self::UpRightInLine,
        Self::BottomLeftInBlock,
        Self::BottomLeftInLine,
        Self::BottomRightInBlock,
        Self::BottomRightInLine,
        Self::UpCenterInLine,
        Self::BottomCenterInLine,
        Self::UpCenterOutLine,
        Self::UpLeftOutLine,
        Self::UpRightOutLine,
        Self::BottomCenterOutLine,
        Self::UpLeftSideBlock,
        Self::UpRightSideBlock,
        Self::BottomLeftSideBlock,
        Self::BottomRightSideBlock,
    ];

    #[must_use]
    pub const fn layout(self) -> LegendLayout {
        use LegendCorner::{BottomCenter, BottomLeft, BottomRight, UpCenter, UpLeft, UpRight};
        use LegendFlow::{Block, Line};
        use LegendPlacement::{Inside, Outside, Side};

        let (flow, corner, placement) = match self {
            Self::UpLeftInBlock => (Block, UpLeft, Inside),
            Self::UpLeftInLine => (Line, UpLeft, Inside),
            Self::UpRightInBlock => (Block, UpRight, Inside),
            Self::UpRightInLine => (Line, UpRight, Inside),
            Self::BottomLeftInBlock => (Block, BottomLeft, Inside),
            Self::BottomLeftInLine => (Line, BottomLeft, Inside),
            Self::BottomRightInBlock => (Block, BottomRight, Inside),
            Self::BottomRightInLine => (Line, BottomRight, Inside),
            Self::UpCenterInLine => (Line, UpCenter, Inside),
            Self::BottomCenterInLine => (Line, BottomCenter, Inside),
            Self::UpCenterOutLine => (Line, UpCenter, Outside),
            Self::UpLeftOutLine => (Line, UpLeft, Outside),
            Self::UpRightOutLine => (Line, UpRight, Outside),
            Self::BottomCenterOutLine => (Line, BottomCenter, Outside),
            Self::UpLeftSideBlock => (Block, UpLeft, Side),
            Self::UpRightSideBlock => (Block, UpRight, Side),
            Self::BottomLeftSideBlock => (Block, BottomLeft, Side),
            Self::BottomRightSideBlock => (Block, BottomRight, Side),
        };
        LegendLayout::new(flow, corner, placement)
    }
}

impl From<LegendStyle> for LegendLayout {
    fn from(style: LegendStyle) -> Self {
        style.layout()
    }
}
