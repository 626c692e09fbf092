use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BentoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Stars,
    SchedulePosts,
    Post,
    ConsistentSchedule,
    GrowFollowers,
    AiContent,
    Audience,
    MultiplePlatforms,
    Join,
}

pub const ALL_IMAGES: [ImageKey; 9] = [
    ImageKey::Stars,
    ImageKey::SchedulePosts,
    ImageKey::Post,
    ImageKey::ConsistentSchedule,
    ImageKey::GrowFollowers,
    ImageKey::AiContent,
    ImageKey::Audience,
    ImageKey::MultiplePlatforms,
    ImageKey::Join,
];

impl ImageKey {
    pub fn file_name(self) -> &'static str {
        match self {
            ImageKey::Stars => "stars.svg",
            ImageKey::SchedulePosts => "illustration-schedule-posts.webp",
            ImageKey::Post => "post.svg",
            ImageKey::ConsistentSchedule => "illustration-consistent-schedule.webp",
            ImageKey::GrowFollowers => "illustration-grow-followers.webp",
            ImageKey::AiContent => "illustration-ai-content.webp",
            ImageKey::Audience => "audience.svg",
            ImageKey::MultiplePlatforms => "illustration-multiple-platforms.webp",
            ImageKey::Join => "join.svg",
        }
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for ImageKey {
    type Err = BentoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ALL_IMAGES
            .iter()
            .copied()
            .find(|key| key.file_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BentoError::UnknownImage(trimmed.to_string()))
    }
}

/// CSS grid line numbers, 1-based with exclusive ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPlacement {
    pub col_start: u32,
    pub col_end: u32,
    pub row_start: u32,
    pub row_end: u32,
}

impl GridPlacement {
    pub const fn new(col_start: u32, col_end: u32, row_start: u32, row_end: u32) -> Self {
        Self {
            col_start,
            col_end,
            row_start,
            row_end,
        }
    }

    pub fn col_span(&self) -> u32 {
        self.col_end.saturating_sub(self.col_start)
    }

    pub fn row_span(&self) -> u32 {
        self.row_end.saturating_sub(self.row_start)
    }

    pub fn fits(&self, columns: usize, rows: usize) -> bool {
        self.col_start >= 1
            && self.row_start >= 1
            && self.col_span() > 0
            && self.row_span() > 0
            && self.col_end as usize <= columns + 1
            && self.row_end as usize <= rows + 1
    }

    /// Zero-based (column, row) tracks covered by this placement.
    pub fn tracks(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row_start..self.row_end).flat_map(move |row| {
            (self.col_start..self.col_end).map(move |col| {
                (col.saturating_sub(1) as usize, row.saturating_sub(1) as usize)
            })
        })
    }

    pub fn css(&self) -> String {
        format!(
            "grid-column: {} / {}; grid-row: {} / {};",
            self.col_start, self.col_end, self.row_start, self.row_end
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub image: ImageKey,
    pub label: Option<&'static str>,
    pub contain: bool,
    pub placement: GridPlacement,
    pub stack_order: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridVariant {
    #[default]
    Wide,
    Compact,
}

impl GridVariant {
    pub fn columns(self) -> usize {
        match self {
            GridVariant::Wide => 4,
            GridVariant::Compact => 3,
        }
    }

    pub fn rows(self) -> usize {
        match self {
            GridVariant::Wide => 6,
            GridVariant::Compact => 3,
        }
    }

    pub fn cells(self) -> &'static [GridCell] {
        match self {
            GridVariant::Wide => WIDE_CELLS,
            GridVariant::Compact => COMPACT_CELLS,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GridVariant::Wide => "wide",
            GridVariant::Compact => "compact",
        }
    }
}

impl FromStr for GridVariant {
    type Err = BentoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("wide") {
            Ok(GridVariant::Wide)
        } else if trimmed.eq_ignore_ascii_case("compact") {
            Ok(GridVariant::Compact)
        } else {
            Err(BentoError::UnknownVariant(trimmed.to_string()))
        }
    }
}

pub const WIDE_CELLS: &[GridCell] = &[
    GridCell {
        image: ImageKey::Post,
        label: None,
        contain: false,
        placement: GridPlacement::new(1, 2, 1, 4),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Stars,
        label: Some("Get improved Ratings"),
        contain: false,
        placement: GridPlacement::new(2, 4, 1, 3),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::SchedulePosts,
        label: None,
        contain: false,
        placement: GridPlacement::new(4, 5, 1, 5),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::AiContent,
        label: Some("AI Content"),
        contain: true,
        placement: GridPlacement::new(1, 2, 4, 7),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::MultiplePlatforms,
        label: Some("Multiple Platforms"),
        contain: true,
        placement: GridPlacement::new(3, 4, 3, 5),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::ConsistentSchedule,
        label: None,
        contain: true,
        placement: GridPlacement::new(2, 3, 3, 5),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Audience,
        label: None,
        contain: false,
        placement: GridPlacement::new(2, 3, 5, 7),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Join,
        label: Some("Join Today"),
        contain: false,
        placement: GridPlacement::new(3, 5, 5, 7),
        stack_order: 1,
    },
];

pub const COMPACT_CELLS: &[GridCell] = &[
    GridCell {
        image: ImageKey::Post,
        label: None,
        contain: false,
        placement: GridPlacement::new(1, 2, 1, 2),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Stars,
        label: Some("Get improved Ratings"),
        contain: false,
        placement: GridPlacement::new(2, 3, 1, 2),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::SchedulePosts,
        label: None,
        contain: false,
        placement: GridPlacement::new(3, 4, 1, 2),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::ConsistentSchedule,
        label: None,
        contain: true,
        placement: GridPlacement::new(1, 2, 2, 3),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::GrowFollowers,
        label: Some("Grow Followers"),
        contain: true,
        placement: GridPlacement::new(2, 3, 2, 3),
        stack_order: 2,
    },
    GridCell {
        image: ImageKey::AiContent,
        label: Some("AI Content"),
        contain: true,
        placement: GridPlacement::new(3, 4, 2, 3),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Audience,
        label: None,
        contain: false,
        placement: GridPlacement::new(1, 2, 3, 4),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::MultiplePlatforms,
        label: Some("Multiple Platforms"),
        contain: true,
        placement: GridPlacement::new(2, 3, 3, 4),
        stack_order: 1,
    },
    GridCell {
        image: ImageKey::Join,
        label: Some("Join Today"),
        contain: false,
        placement: GridPlacement::new(3, 4, 3, 4),
        stack_order: 1,
    },
];
